//! Runs router effects against the REST client.

use super::event::{Effect, Event};
use crate::api::ApiClient;

/// Performs `effect` and reports its completion as an [`Event`].
///
/// Takes the client by value so the returned future is `'static` and can be
/// handed to any executor.
pub async fn execute(client: ApiClient, effect: Effect) -> Event {
    match effect {
        Effect::ListMailbox {
            generation,
            mailbox,
        } => Event::MailboxLoaded {
            generation,
            mailbox,
            result: client.list_mailbox(mailbox).await,
        },
        Effect::GetEmail { generation, id } => Event::EmailLoaded {
            generation,
            result: client.get_email(id).await,
        },
        Effect::CreateEmail { generation, email } => Event::EmailCreated {
            generation,
            result: client.create_email(&email).await,
        },
        Effect::UpdateEmail {
            generation,
            id,
            update,
            follow_up,
        } => Event::EmailUpdated {
            generation,
            id,
            update,
            follow_up,
            result: client.update_email(id, &update).await,
        },
    }
}
