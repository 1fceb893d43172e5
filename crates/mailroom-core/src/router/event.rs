//! Events consumed and effects produced by the router.

use super::state::Generation;
use crate::{Error, Result};
use crate::compose::DraftField;
use crate::model::{CreateAck, Email, EmailId, EmailUpdate, Mailbox, NewEmail};

/// What happens after a flag update succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// Stay on the current view and patch the local copy.
    Stay,
    /// Move to the given mailbox list.
    Navigate(Mailbox),
}

/// Input to the router: a user intent or a finished round trip.
#[derive(Debug, Clone)]
pub enum Event {
    /// Show a mailbox list.
    Navigate(Mailbox),
    /// Open an empty compose form.
    ComposeNew,
    /// Open an email from the current mailbox list.
    OpenEmail(EmailId),
    /// A compose field changed.
    DraftEdited(DraftField, String),
    /// Send the current draft.
    SubmitDraft,
    /// Reply to the email being read.
    Reply,
    /// Archive or restore the email being read.
    ToggleArchive,
    /// Flip the read flag of the email being read.
    ToggleRead,
    /// Leave compose or detail for the mailbox they came from.
    Back,
    /// Fetch the current view's data again.
    Refresh,

    /// A mailbox list fetch finished.
    MailboxLoaded {
        /// Generation the fetch was issued under.
        generation: Generation,
        /// Mailbox fetched.
        mailbox: Mailbox,
        /// Emails or failure.
        result: Result<Vec<Email>>,
    },
    /// A single email fetch finished.
    EmailLoaded {
        /// Generation the fetch was issued under.
        generation: Generation,
        /// Email or failure.
        result: Result<Email>,
    },
    /// A create finished.
    EmailCreated {
        /// Generation the create was issued under.
        generation: Generation,
        /// Acknowledgment or failure.
        result: Result<CreateAck>,
    },
    /// A flag update finished.
    EmailUpdated {
        /// Generation the update was issued under.
        generation: Generation,
        /// Email updated.
        id: EmailId,
        /// Fields sent.
        update: EmailUpdate,
        /// What to do on success.
        follow_up: FollowUp,
        /// Outcome.
        result: Result<()>,
    },
}

/// A round trip the router asks the shell to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `GET /emails/{mailbox}`.
    ListMailbox {
        /// Generation to echo back.
        generation: Generation,
        /// Mailbox to fetch.
        mailbox: Mailbox,
    },
    /// `GET /emails/{id}`.
    GetEmail {
        /// Generation to echo back.
        generation: Generation,
        /// Email to fetch.
        id: EmailId,
    },
    /// `POST /emails`.
    CreateEmail {
        /// Generation to echo back.
        generation: Generation,
        /// Payload.
        email: NewEmail,
    },
    /// `PUT /emails/{id}`.
    UpdateEmail {
        /// Generation to echo back.
        generation: Generation,
        /// Email to update.
        id: EmailId,
        /// Fields to change.
        update: EmailUpdate,
        /// What to do on success.
        follow_up: FollowUp,
    },
}

impl Effect {
    /// The completion reporting that this round trip failed with `error`
    /// without reaching the backend.
    #[must_use]
    pub fn fail(self, error: Error) -> Event {
        match self {
            Self::ListMailbox {
                generation,
                mailbox,
            } => Event::MailboxLoaded {
                generation,
                mailbox,
                result: Err(error),
            },
            Self::GetEmail { generation, .. } => Event::EmailLoaded {
                generation,
                result: Err(error),
            },
            Self::CreateEmail { generation, .. } => Event::EmailCreated {
                generation,
                result: Err(error),
            },
            Self::UpdateEmail {
                generation,
                id,
                update,
                follow_up,
            } => Event::EmailUpdated {
                generation,
                id,
                update,
                follow_up,
                result: Err(error),
            },
        }
    }
}
