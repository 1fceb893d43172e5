//! Sans-I/O view router.
//!
//! The router owns the single [`ViewState`] slot. It never performs I/O:
//! callers feed it [`Event`]s and carry out the [`Effect`]s it returns,
//! feeding each completion back as another event. This keeps every
//! transition deterministic and testable without a window or a server.
//!
//! Each transition bumps the view [`Generation`]. Effects carry the
//! generation they were issued under and completions from an older
//! generation are dropped, so a slow response can never render into a view
//! the user has already left.
//!
//! # Example
//!
//! ```ignore
//! let mut router = Router::new(false);
//! let mut pending = router.start();
//! while let Some(effect) = pending.pop() {
//!     let event = execute(client.clone(), effect).await;
//!     pending.extend(router.update(event));
//! }
//! ```

mod event;
mod execute;
mod state;

pub use event::{Effect, Event, FollowUp};
pub use execute::execute;
pub use state::{Generation, LoadStatus, ViewKind, ViewState};

use tracing::{debug, info, warn};

use crate::Config;
use crate::compose::Draft;
use crate::model::{Email, EmailId, EmailUpdate, Mailbox};
use crate::render::{self, Action, DetailView, MailboxView};

/// Owner of the view state and its transitions.
#[derive(Debug, Clone)]
pub struct Router {
    state: ViewState,
    generation: Generation,
    return_to_origin: bool,
    notice: Option<String>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Router {
    /// Creates a router showing the inbox.
    ///
    /// With `return_to_origin`, archive/read actions go back to the mailbox
    /// the email was opened from instead of the inbox.
    #[must_use]
    pub const fn new(return_to_origin: bool) -> Self {
        Self {
            state: ViewState::loading(Mailbox::Inbox),
            generation: Generation(0),
            return_to_origin,
            notice: None,
        }
    }

    /// Creates a router configured from `config`.
    #[must_use]
    pub const fn from_config(config: &Config) -> Self {
        Self::new(config.return_to_origin)
    }

    /// Applies a late-loaded `return_to_origin` without leaving the current view.
    pub const fn set_return_to_origin(&mut self, return_to_origin: bool) {
        self.return_to_origin = return_to_origin;
    }

    /// Effects for the initial inbox load.
    pub fn start(&mut self) -> Vec<Effect> {
        self.show_mailbox(Mailbox::Inbox)
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Current view generation.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Latest failure worth showing, cleared on the next transition.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// The mailbox list view, when a list is visible.
    #[must_use]
    pub fn mailbox_view(&self) -> Option<MailboxView> {
        match &self.state {
            ViewState::MailboxList {
                mailbox,
                emails,
                status,
            } => Some(render::render_mailbox(*mailbox, emails, status)),
            _ => None,
        }
    }

    /// The detail view, when an email is open and has arrived.
    #[must_use]
    pub fn detail_view(&self) -> Option<DetailView> {
        match &self.state {
            ViewState::Detail {
                mailbox,
                email: Some(email),
                pending,
                ..
            } => Some(render::render_detail(email, *mailbox, *pending)),
            _ => None,
        }
    }

    /// The draft, when compose is visible.
    #[must_use]
    pub const fn draft(&self) -> Option<&Draft> {
        match &self.state {
            ViewState::Compose { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Applies `event` and returns the round trips it requires.
    pub fn update(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Navigate(mailbox) => self.show_mailbox(mailbox),
            Event::ComposeNew => {
                let origin = self.state.mailbox();
                self.transition(ViewState::Compose {
                    draft: Draft::fresh(),
                    origin,
                });
                Vec::new()
            }
            Event::OpenEmail(id) => self.open_email(id),
            Event::DraftEdited(field, value) => {
                if let ViewState::Compose { draft, .. } = &mut self.state {
                    draft.set(field, value);
                }
                Vec::new()
            }
            Event::SubmitDraft => self.submit_draft(),
            Event::Reply => self.reply(),
            Event::ToggleArchive => self.act(Action::ToggleArchive),
            Event::ToggleRead => self.act(Action::ToggleRead),
            Event::Back => {
                let origin = self.state.mailbox();
                match self.state.kind() {
                    ViewKind::MailboxList => Vec::new(),
                    ViewKind::Compose | ViewKind::Detail => self.show_mailbox(origin),
                }
            }
            Event::Refresh => self.refresh(),
            Event::MailboxLoaded {
                generation,
                mailbox,
                result,
            } => {
                self.mailbox_loaded(generation, mailbox, result);
                Vec::new()
            }
            Event::EmailLoaded { generation, result } => self.email_loaded(generation, result),
            Event::EmailCreated { generation, result } => {
                match result {
                    Ok(ack) => info!(
                        "Email sent: {}",
                        ack.message.as_deref().unwrap_or("accepted")
                    ),
                    Err(e) => {
                        warn!("Failed to send email: {}", e);
                        self.notice = Some(format!("Sending failed: {e}"));
                    }
                }
                // The sent list is fetched only now so it includes the new mail.
                match &self.state {
                    ViewState::MailboxList {
                        mailbox: Mailbox::Sent,
                        ..
                    } if generation == self.generation => vec![Effect::ListMailbox {
                        generation,
                        mailbox: Mailbox::Sent,
                    }],
                    _ => Vec::new(),
                }
            }
            Event::EmailUpdated {
                generation,
                id,
                update,
                follow_up,
                result,
            } => self.email_updated(generation, id, update, follow_up, result),
        }
    }

    /// Replaces the state and starts a new generation.
    fn transition(&mut self, state: ViewState) -> Generation {
        self.generation = self.generation.next();
        self.state = state;
        self.notice = None;
        self.generation
    }

    fn show_mailbox(&mut self, mailbox: Mailbox) -> Vec<Effect> {
        let generation = self.transition(ViewState::loading(mailbox));
        debug!("Showing {} ({})", mailbox, generation);
        vec![Effect::ListMailbox {
            generation,
            mailbox,
        }]
    }

    fn open_email(&mut self, id: EmailId) -> Vec<Effect> {
        let ViewState::MailboxList { mailbox, .. } = self.state else {
            debug!("Ignoring open of email {} outside a mailbox list", id);
            return Vec::new();
        };

        let generation = self.transition(ViewState::Detail {
            id,
            mailbox,
            email: None,
            status: LoadStatus::Loading,
            pending: false,
        });
        vec![Effect::GetEmail { generation, id }]
    }

    fn submit_draft(&mut self) -> Vec<Effect> {
        let ViewState::Compose { draft, .. } = &self.state else {
            return Vec::new();
        };
        let email = draft.submit();

        info!("Sending email to {}", email.recipients);
        let generation = self.transition(ViewState::loading(Mailbox::Sent));
        vec![Effect::CreateEmail { generation, email }]
    }

    fn reply(&mut self) -> Vec<Effect> {
        if let ViewState::Detail {
            mailbox,
            email: Some(email),
            ..
        } = &self.state
        {
            let draft = Draft::reply(email);
            let origin = *mailbox;
            self.transition(ViewState::Compose { draft, origin });
        }
        Vec::new()
    }

    fn act(&mut self, action: Action) -> Vec<Effect> {
        let generation = self.generation;
        let return_to_origin = self.return_to_origin;
        let ViewState::Detail {
            id,
            mailbox,
            email: Some(email),
            pending,
            ..
        } = &mut self.state
        else {
            return Vec::new();
        };
        if *pending || !mailbox.supports_flag_actions() {
            return Vec::new();
        }
        let Some(update) = action.update_for(email) else {
            return Vec::new();
        };

        *pending = true;
        let target = if return_to_origin {
            *mailbox
        } else {
            Mailbox::Inbox
        };
        vec![Effect::UpdateEmail {
            generation,
            id: *id,
            update,
            follow_up: FollowUp::Navigate(target),
        }]
    }

    fn refresh(&mut self) -> Vec<Effect> {
        match self.state {
            ViewState::MailboxList { mailbox, .. } => self.show_mailbox(mailbox),
            ViewState::Detail { id, mailbox, .. } => {
                let generation = self.transition(ViewState::Detail {
                    id,
                    mailbox,
                    email: None,
                    status: LoadStatus::Loading,
                    pending: false,
                });
                vec![Effect::GetEmail { generation, id }]
            }
            ViewState::Compose { .. } => Vec::new(),
        }
    }

    fn is_stale(&self, generation: Generation, what: &str) -> bool {
        if generation == self.generation {
            return false;
        }
        debug!(
            "Dropping stale {} from {} (current {})",
            what, generation, self.generation
        );
        true
    }

    fn mailbox_loaded(
        &mut self,
        generation: Generation,
        loaded: Mailbox,
        result: crate::Result<Vec<Email>>,
    ) {
        if self.is_stale(generation, "mailbox list") {
            return;
        }
        let ViewState::MailboxList {
            mailbox,
            emails,
            status,
        } = &mut self.state
        else {
            return;
        };
        if *mailbox != loaded {
            return;
        }

        match result {
            Ok(list) => {
                debug!("Loaded {} emails from {}", list.len(), loaded);
                *emails = list;
                *status = LoadStatus::Loaded;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", loaded, e);
                emails.clear();
                *status = LoadStatus::Failed(e.to_string());
            }
        }
    }

    fn email_loaded(&mut self, generation: Generation, result: crate::Result<Email>) -> Vec<Effect> {
        if self.is_stale(generation, "email") {
            return Vec::new();
        }
        let ViewState::Detail {
            id,
            mailbox,
            email,
            status,
            ..
        } = &mut self.state
        else {
            return Vec::new();
        };

        match result {
            Ok(mut loaded) => {
                // Sanitized once here; every redraw and reply quote reads the stored text.
                loaded.body = render::body_text(&loaded.body);
                let effects = render::implicit_read_update(&loaded, *mailbox)
                    .map(|update| Effect::UpdateEmail {
                        generation,
                        id: *id,
                        update,
                        follow_up: FollowUp::Stay,
                    })
                    .into_iter()
                    .collect();
                *email = Some(loaded);
                *status = LoadStatus::Loaded;
                effects
            }
            Err(e) => {
                warn!("Failed to load email {}: {}", id, e);
                *status = LoadStatus::Failed(e.to_string());
                self.notice = Some(format!("Could not open email: {e}"));
                Vec::new()
            }
        }
    }

    fn email_updated(
        &mut self,
        generation: Generation,
        updated: EmailId,
        update: EmailUpdate,
        follow_up: FollowUp,
        result: crate::Result<()>,
    ) -> Vec<Effect> {
        if let Err(e) = result {
            warn!("Failed to update email {}: {}", updated, e);
            self.notice = Some(format!("Update failed: {e}"));
            // Only the action round trip holds `pending`; the implicit read does not.
            if let FollowUp::Navigate(_) = follow_up
                && let ViewState::Detail { pending, .. } = &mut self.state
                && generation == self.generation
            {
                *pending = false;
            }
            return Vec::new();
        }

        if self.is_stale(generation, "update completion") {
            return Vec::new();
        }
        match follow_up {
            FollowUp::Stay => {
                if let ViewState::Detail {
                    email: Some(email), ..
                } = &mut self.state
                    && email.id == updated
                {
                    update.apply(email);
                }
                Vec::new()
            }
            FollowUp::Navigate(mailbox) => {
                info!("Updated email {}", updated);
                self.show_mailbox(mailbox)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::too_many_lines)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::compose::DraftField;
    use crate::model::{CreateAck, NewEmail};

    fn email(id: u64, read: bool, archived: bool) -> Email {
        Email {
            id: EmailId(id),
            sender: "a@x.com".into(),
            recipients: vec!["me@x.com".into()],
            subject: "Hi".into(),
            body: "B".into(),
            timestamp: "T".into(),
            read,
            archived,
        }
    }

    /// Router showing `mailbox` with `emails` loaded.
    fn listing(mailbox: Mailbox, emails: Vec<Email>) -> Router {
        let mut router = Router::default();
        router.update(Event::Navigate(mailbox));
        let generation = router.generation();
        router.update(Event::MailboxLoaded {
            generation,
            mailbox,
            result: Ok(emails),
        });
        router
    }

    /// Router reading `email` opened from `mailbox`; returns the effects
    /// produced when the email arrived.
    fn reading(mailbox: Mailbox, email: Email) -> (Router, Vec<Effect>) {
        let mut router = listing(mailbox, vec![email.clone()]);
        router.update(Event::OpenEmail(email.id));
        let generation = router.generation();
        let effects = router.update(Event::EmailLoaded {
            generation,
            result: Ok(email),
        });
        (router, effects)
    }

    fn updated(router: &Router, effect: &Effect, result: crate::Result<()>) -> Event {
        let Effect::UpdateEmail {
            generation,
            id,
            update,
            follow_up,
        } = effect.clone()
        else {
            panic!("expected an update effect, got {effect:?}");
        };
        assert!(generation <= router.generation());
        Event::EmailUpdated {
            generation,
            id,
            update,
            follow_up,
            result,
        }
    }

    mod navigation_tests {
        use super::*;

        #[test]
        fn starts_on_inbox() {
            let mut router = Router::default();
            let effects = router.start();
            assert_eq!(
                effects,
                vec![Effect::ListMailbox {
                    generation: Generation(1),
                    mailbox: Mailbox::Inbox,
                }]
            );
            assert_eq!(router.state().kind(), ViewKind::MailboxList);
            assert!(router.mailbox_view().unwrap().loading);
        }

        #[test]
        fn every_mailbox_shows_only_the_list() {
            for mailbox in Mailbox::ALL {
                let mut router = Router::default();
                router.update(Event::ComposeNew);
                let effects = router.update(Event::Navigate(mailbox));

                assert_eq!(router.state().kind(), ViewKind::MailboxList);
                assert!(router.draft().is_none());
                assert!(router.detail_view().is_none());
                assert_eq!(router.mailbox_view().unwrap().header, mailbox.display_name());
                assert_eq!(
                    effects,
                    vec![Effect::ListMailbox {
                        generation: router.generation(),
                        mailbox,
                    }]
                );
            }
        }

        #[test]
        fn loaded_list_renders_rows() {
            let router = listing(
                Mailbox::Inbox,
                vec![email(1, false, false), email(2, true, false)],
            );
            let view = router.mailbox_view().unwrap();
            assert_eq!(view.rows.len(), 2);
            assert!(!view.loading);
            assert!(view.error.is_none());
        }

        #[test]
        fn failed_list_keeps_header() {
            let mut router = Router::default();
            router.start();
            let generation = router.generation();
            router.update(Event::MailboxLoaded {
                generation,
                mailbox: Mailbox::Inbox,
                result: Err(Error::Network("connection refused".into())),
            });
            let view = router.mailbox_view().unwrap();
            assert_eq!(view.header, "Inbox");
            assert!(view.rows.is_empty());
            assert_eq!(
                view.error.as_deref(),
                Some("Network error: connection refused")
            );
        }

        #[test]
        fn compose_is_always_fresh() {
            let mut router = Router::default();
            router.update(Event::ComposeNew);
            router.update(Event::DraftEdited(DraftField::Subject, "left over".into()));
            router.update(Event::Navigate(Mailbox::Sent));
            router.update(Event::ComposeNew);
            assert_eq!(router.draft(), Some(&Draft::fresh()));
        }

        #[test]
        fn open_email_requests_it() {
            let mut router = listing(Mailbox::Archive, vec![email(4, true, true)]);
            let effects = router.update(Event::OpenEmail(EmailId(4)));
            assert_eq!(
                effects,
                vec![Effect::GetEmail {
                    generation: router.generation(),
                    id: EmailId(4),
                }]
            );
            assert_eq!(router.state().kind(), ViewKind::Detail);
            assert_eq!(router.state().mailbox(), Mailbox::Archive);
            assert!(router.detail_view().is_none());
        }

        #[test]
        fn open_email_ignored_outside_list() {
            let mut router = Router::default();
            router.update(Event::ComposeNew);
            assert!(router.update(Event::OpenEmail(EmailId(1))).is_empty());
            assert_eq!(router.state().kind(), ViewKind::Compose);
        }

        #[test]
        fn back_returns_to_origin_mailbox() {
            let (mut router, _) = reading(Mailbox::Archive, email(3, true, true));
            let effects = router.update(Event::Back);
            assert_eq!(router.state().kind(), ViewKind::MailboxList);
            assert_eq!(router.state().mailbox(), Mailbox::Archive);
            assert_eq!(effects.len(), 1);

            let mut router = listing(Mailbox::Sent, Vec::new());
            router.update(Event::ComposeNew);
            router.update(Event::Back);
            assert_eq!(router.state().mailbox(), Mailbox::Sent);

            assert!(router.update(Event::Back).is_empty());
        }

        #[test]
        fn refresh_reloads_current_view() {
            let mut router = listing(Mailbox::Inbox, vec![email(1, true, false)]);
            let before = router.generation();
            let effects = router.update(Event::Refresh);
            assert!(router.generation() > before);
            assert!(matches!(
                effects.as_slice(),
                [Effect::ListMailbox {
                    mailbox: Mailbox::Inbox,
                    ..
                }]
            ));

            let (mut router, _) = reading(Mailbox::Inbox, email(1, true, false));
            let effects = router.update(Event::Refresh);
            assert!(matches!(
                effects.as_slice(),
                [Effect::GetEmail { id: EmailId(1), .. }]
            ));
            assert!(router.detail_view().is_none());

            router.update(Event::ComposeNew);
            assert!(router.update(Event::Refresh).is_empty());
        }
    }

    mod stale_tests {
        use super::*;

        #[test]
        fn stale_list_is_dropped() {
            let mut router = Router::default();
            let stale = router.start();
            let Effect::ListMailbox { generation, .. } = stale[0] else {
                panic!("expected list effect");
            };
            router.update(Event::Navigate(Mailbox::Sent));

            router.update(Event::MailboxLoaded {
                generation,
                mailbox: Mailbox::Inbox,
                result: Ok(vec![email(1, false, false)]),
            });

            let view = router.mailbox_view().unwrap();
            assert_eq!(view.mailbox, Mailbox::Sent);
            assert!(view.rows.is_empty());
            assert!(view.loading);
        }

        #[test]
        fn stale_email_is_dropped() {
            let mut router = listing(Mailbox::Inbox, vec![email(1, false, false)]);
            router.update(Event::OpenEmail(EmailId(1)));
            let generation = router.generation();
            router.update(Event::ComposeNew);

            let effects = router.update(Event::EmailLoaded {
                generation,
                result: Ok(email(1, false, false)),
            });
            assert!(effects.is_empty());
            assert_eq!(router.state().kind(), ViewKind::Compose);
        }

        #[test]
        fn list_for_other_mailbox_is_dropped() {
            let mut router = Router::default();
            router.update(Event::Navigate(Mailbox::Archive));
            let generation = router.generation();
            router.update(Event::MailboxLoaded {
                generation,
                mailbox: Mailbox::Inbox,
                result: Ok(vec![email(1, false, false)]),
            });
            assert!(router.mailbox_view().unwrap().rows.is_empty());
        }

        #[test]
        fn late_action_completion_does_not_navigate() {
            let (mut router, _) = reading(Mailbox::Inbox, email(7, true, false));
            let effects = router.update(Event::ToggleArchive);
            router.update(Event::Navigate(Mailbox::Sent));

            let event = updated(&router, &effects[0], Ok(()));
            assert!(router.update(event).is_empty());
            assert_eq!(router.state().mailbox(), Mailbox::Sent);
        }
    }

    mod detail_tests {
        use super::*;

        #[test]
        fn viewing_unread_marks_read_once() {
            let (router, effects) = reading(Mailbox::Inbox, email(7, false, false));
            assert_eq!(
                effects,
                vec![Effect::UpdateEmail {
                    generation: router.generation(),
                    id: EmailId(7),
                    update: EmailUpdate::read(true),
                    follow_up: FollowUp::Stay,
                }]
            );
        }

        #[test]
        fn viewing_read_email_writes_nothing() {
            let (_, effects) = reading(Mailbox::Inbox, email(7, true, false));
            assert!(effects.is_empty());
        }

        #[test]
        fn viewing_sent_email_writes_nothing() {
            let (router, effects) = reading(Mailbox::Sent, email(7, false, false));
            assert!(effects.is_empty());
            let labels: Vec<_> = router
                .detail_view()
                .unwrap()
                .actions
                .iter()
                .map(|a| a.label)
                .collect();
            assert_eq!(labels, vec!["Reply"]);
        }

        #[test]
        fn implicit_read_patches_local_copy_after_success() {
            let (mut router, effects) = reading(Mailbox::Inbox, email(7, false, false));
            assert_eq!(router.detail_view().unwrap().actions[2].label, "Mark as Read");

            let event = updated(&router, &effects[0], Ok(()));
            assert!(router.update(event).is_empty());
            assert_eq!(router.state().kind(), ViewKind::Detail);
            assert_eq!(router.detail_view().unwrap().actions[2].label, "Mark as Unread");
        }

        #[test]
        fn implicit_read_failure_keeps_unread() {
            let (mut router, effects) = reading(Mailbox::Inbox, email(7, false, false));
            let event = updated(&router, &effects[0], Err(Error::Timeout));
            router.update(event);
            assert_eq!(router.detail_view().unwrap().actions[2].label, "Mark as Read");
            assert_eq!(router.notice(), Some("Update failed: Request timed out"));
        }

        #[test]
        fn loaded_markup_is_stored_as_text() {
            let mut html = email(7, true, false);
            html.body = "<p>Hello</p><script>steal()</script>".into();
            let (mut router, _) = reading(Mailbox::Inbox, html);

            let ViewState::Detail {
                email: Some(stored),
                ..
            } = router.state()
            else {
                panic!("expected a loaded email");
            };
            assert!(stored.body.contains("Hello"));
            assert!(!stored.body.contains("steal"));
            assert!(!render::looks_like_markup(&stored.body));
            assert_eq!(router.detail_view().unwrap().body, stored.body);

            router.update(Event::Reply);
            assert!(!router.draft().unwrap().body.contains("<script"));
        }

        #[test]
        fn failed_email_load_sets_notice() {
            let mut router = listing(Mailbox::Inbox, vec![email(7, false, false)]);
            router.update(Event::OpenEmail(EmailId(7)));
            let generation = router.generation();
            router.update(Event::EmailLoaded {
                generation,
                result: Err(Error::Api {
                    status: 404,
                    message: Some("Email not found.".into()),
                }),
            });
            assert!(router.detail_view().is_none());
            assert_eq!(
                router.notice(),
                Some("Could not open email: API error (404): Email not found.")
            );
            router.update(Event::Back);
            assert!(router.notice().is_none());
        }
    }

    mod action_tests {
        use super::*;

        #[test]
        fn archive_toggle_then_inbox() {
            let (mut router, _) = reading(Mailbox::Inbox, email(7, true, false));
            let effects = router.update(Event::ToggleArchive);
            assert_eq!(
                effects,
                vec![Effect::UpdateEmail {
                    generation: router.generation(),
                    id: EmailId(7),
                    update: EmailUpdate {
                        read: Some(false),
                        archived: Some(true),
                    },
                    follow_up: FollowUp::Navigate(Mailbox::Inbox),
                }]
            );
            assert_eq!(router.state().kind(), ViewKind::Detail);

            let event = updated(&router, &effects[0], Ok(()));
            let effects = router.update(event);
            assert_eq!(router.state().kind(), ViewKind::MailboxList);
            assert_eq!(router.state().mailbox(), Mailbox::Inbox);
            assert!(matches!(
                effects.as_slice(),
                [Effect::ListMailbox {
                    mailbox: Mailbox::Inbox,
                    ..
                }]
            ));
        }

        #[test]
        fn read_toggle_leaves_archived_untouched() {
            let (mut router, _) = reading(Mailbox::Archive, email(7, true, true));
            // Already read, so opening it issued no write; flip it back.
            let effects = router.update(Event::ToggleRead);
            assert_eq!(
                effects,
                vec![Effect::UpdateEmail {
                    generation: router.generation(),
                    id: EmailId(7),
                    update: EmailUpdate::read(false),
                    follow_up: FollowUp::Navigate(Mailbox::Inbox),
                }]
            );
        }

        #[test]
        fn read_toggle_on_unread_sends_read_only() {
            let mut router = listing(Mailbox::Inbox, vec![email(7, false, false)]);
            router.update(Event::OpenEmail(EmailId(7)));
            let generation = router.generation();
            let implicit = router.update(Event::EmailLoaded {
                generation,
                result: Ok(email(7, false, false)),
            });
            assert_eq!(implicit.len(), 1);

            let effects = router.update(Event::ToggleRead);
            let [Effect::UpdateEmail { id, update, .. }] = effects.as_slice() else {
                panic!("expected one update, got {effects:?}");
            };
            assert_eq!(*id, EmailId(7));
            assert_eq!(update.read, Some(true));
            assert_eq!(update.archived, None);
        }

        #[test]
        fn actions_ignored_while_pending() {
            let (mut router, _) = reading(Mailbox::Inbox, email(7, true, false));
            assert_eq!(router.update(Event::ToggleArchive).len(), 1);
            assert!(router.update(Event::ToggleRead).is_empty());
            assert!(router.update(Event::ToggleArchive).is_empty());
            assert!(router.detail_view().unwrap().actions.iter().all(|a| !a.enabled));
        }

        #[test]
        fn failed_action_stays_and_unlocks() {
            let (mut router, _) = reading(Mailbox::Inbox, email(7, true, false));
            let effects = router.update(Event::ToggleArchive);
            let event = updated(
                &router,
                &effects[0],
                Err(Error::Api {
                    status: 500,
                    message: None,
                }),
            );
            assert!(router.update(event).is_empty());
            assert_eq!(router.state().kind(), ViewKind::Detail);
            assert!(router.detail_view().unwrap().actions.iter().all(|a| a.enabled));
            assert_eq!(router.notice(), Some("Update failed: API error (500)"));
        }

        #[test]
        fn failed_implicit_read_keeps_action_pending() {
            let mut router = listing(Mailbox::Inbox, vec![email(7, false, false)]);
            router.update(Event::OpenEmail(EmailId(7)));
            let generation = router.generation();
            let implicit = router.update(Event::EmailLoaded {
                generation,
                result: Ok(email(7, false, false)),
            });
            assert_eq!(implicit.len(), 1);

            assert_eq!(router.update(Event::ToggleArchive).len(), 1);
            let event = updated(&router, &implicit[0], Err(Error::Timeout));
            assert!(router.update(event).is_empty());

            assert!(router.update(Event::ToggleArchive).is_empty());
            assert!(router.detail_view().unwrap().actions.iter().all(|a| !a.enabled));
            assert!(router.notice().unwrap().starts_with("Update failed"));
        }

        #[test]
        fn sent_mail_has_no_flag_actions() {
            let (mut router, _) = reading(Mailbox::Sent, email(7, false, false));
            assert!(router.update(Event::ToggleArchive).is_empty());
            assert!(router.update(Event::ToggleRead).is_empty());
        }

        #[test]
        fn actions_need_a_loaded_email() {
            let mut router = listing(Mailbox::Inbox, vec![email(7, false, false)]);
            router.update(Event::OpenEmail(EmailId(7)));
            assert!(router.update(Event::ToggleArchive).is_empty());
            assert!(router.update(Event::Reply).is_empty());
            assert_eq!(router.state().kind(), ViewKind::Detail);
        }

        #[test]
        fn return_to_origin_option() {
            let mut router = Router::new(true);
            router.update(Event::Navigate(Mailbox::Archive));
            let generation = router.generation();
            router.update(Event::MailboxLoaded {
                generation,
                mailbox: Mailbox::Archive,
                result: Ok(vec![email(7, true, true)]),
            });
            router.update(Event::OpenEmail(EmailId(7)));
            let generation = router.generation();
            router.update(Event::EmailLoaded {
                generation,
                result: Ok(email(7, true, true)),
            });

            let effects = router.update(Event::ToggleRead);
            let event = updated(&router, &effects[0], Ok(()));
            router.update(event);
            assert_eq!(router.state().mailbox(), Mailbox::Archive);
        }

        #[test]
        fn return_to_origin_set_after_navigation() {
            let mut router = listing(Mailbox::Archive, vec![email(7, true, true)]);
            router.update(Event::OpenEmail(EmailId(7)));
            router.set_return_to_origin(true);
            assert_eq!(router.state().kind(), ViewKind::Detail);

            let generation = router.generation();
            router.update(Event::EmailLoaded {
                generation,
                result: Ok(email(7, true, true)),
            });
            let effects = router.update(Event::ToggleArchive);
            let event = updated(&router, &effects[0], Ok(()));
            router.update(event);
            assert_eq!(router.state().mailbox(), Mailbox::Archive);
        }

        #[test]
        fn reply_prefills_compose() {
            let (mut router, _) = reading(Mailbox::Inbox, email(7, true, false));
            assert!(router.update(Event::Reply).is_empty());
            let draft = router.draft().unwrap();
            assert_eq!(draft.recipients, "a@x.com");
            assert_eq!(draft.subject, "Re: Hi");
            assert!(draft.body.contains("On T a@x.com wrote:\nB"));
            assert_eq!(router.state().mailbox(), Mailbox::Inbox);
        }
    }

    mod compose_tests {
        use super::*;

        fn composing() -> Router {
            let mut router = Router::default();
            router.update(Event::ComposeNew);
            router.update(Event::DraftEdited(DraftField::Recipients, "b@x.com".into()));
            router.update(Event::DraftEdited(DraftField::Subject, "S".into()));
            router.update(Event::DraftEdited(DraftField::Body, "B".into()));
            router
        }

        #[test]
        fn submit_creates_then_shows_sent() {
            let mut router = composing();
            let effects = router.update(Event::SubmitDraft);
            assert_eq!(
                effects,
                vec![Effect::CreateEmail {
                    generation: router.generation(),
                    email: NewEmail::new("b@x.com", "S", "B"),
                }]
            );
            assert_eq!(router.state().kind(), ViewKind::MailboxList);
            assert_eq!(router.state().mailbox(), Mailbox::Sent);
            assert!(router.draft().is_none());
        }

        #[test]
        fn sent_list_loads_after_create_succeeds() {
            let mut router = composing();
            router.update(Event::SubmitDraft);
            let generation = router.generation();
            let effects = router.update(Event::EmailCreated {
                generation,
                result: Ok(CreateAck {
                    message: Some("Email sent successfully.".into()),
                }),
            });
            assert_eq!(
                effects,
                vec![Effect::ListMailbox {
                    generation,
                    mailbox: Mailbox::Sent,
                }]
            );
            assert!(router.notice().is_none());
        }

        #[test]
        fn sent_list_loads_after_create_fails() {
            let mut router = composing();
            router.update(Event::SubmitDraft);
            let generation = router.generation();
            let effects = router.update(Event::EmailCreated {
                generation,
                result: Err(Error::Api {
                    status: 400,
                    message: Some("User b@x.com does not exist.".into()),
                }),
            });
            assert_eq!(effects.len(), 1);
            assert_eq!(router.state().mailbox(), Mailbox::Sent);
            assert_eq!(
                router.notice(),
                Some("Sending failed: API error (400): User b@x.com does not exist.")
            );
        }

        #[test]
        fn create_completion_after_leaving_sent_skips_reload() {
            let mut router = composing();
            router.update(Event::SubmitDraft);
            let generation = router.generation();
            router.update(Event::Navigate(Mailbox::Inbox));
            let effects = router.update(Event::EmailCreated {
                generation,
                result: Ok(CreateAck::default()),
            });
            assert!(effects.is_empty());
        }

        #[test]
        fn submit_outside_compose_does_nothing() {
            let mut router = listing(Mailbox::Inbox, Vec::new());
            assert!(router.update(Event::SubmitDraft).is_empty());
            assert_eq!(router.state().mailbox(), Mailbox::Inbox);
        }

        #[test]
        fn edits_outside_compose_are_ignored() {
            let mut router = listing(Mailbox::Inbox, Vec::new());
            router.update(Event::DraftEdited(DraftField::Body, "x".into()));
            assert!(router.draft().is_none());
        }
    }
}
