//! Single-email rendering and its action panel.

use super::body::body_text;
use crate::model::{Email, EmailId, EmailUpdate, Mailbox};

/// An action offered in the detail view's panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Open a reply draft.
    Reply,
    /// Archive or restore the email.
    ToggleArchive,
    /// Mark the email read or unread.
    ToggleRead,
}

impl Action {
    /// The server update this action performs on `email`, if any.
    #[must_use]
    pub const fn update_for(self, email: &Email) -> Option<EmailUpdate> {
        match self {
            Self::Reply => None,
            Self::ToggleArchive => Some(EmailUpdate::toggle_archived(email)),
            Self::ToggleRead => Some(EmailUpdate::toggle_read(email)),
        }
    }

    /// Button label for the current state of `email`.
    #[must_use]
    pub const fn label(self, email: &Email) -> &'static str {
        match self {
            Self::Reply => "Reply",
            Self::ToggleArchive if email.archived => "Unarchive",
            Self::ToggleArchive => "Archive",
            Self::ToggleRead if email.read => "Mark as Unread",
            Self::ToggleRead => "Mark as Read",
        }
    }
}

/// A button in the action panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    /// What pressing the button does.
    pub action: Action,
    /// Text shown on the button.
    pub label: &'static str,
    /// Whether the button accepts presses.
    pub enabled: bool,
}

/// Rendered email detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Email shown.
    pub id: EmailId,
    /// Sender address.
    pub sender: String,
    /// Recipients joined for display.
    pub recipients: String,
    /// Subject line.
    pub subject: String,
    /// Display timestamp.
    pub timestamp: String,
    /// Sanitized body text.
    pub body: String,
    /// Action panel, rebuilt for every render.
    pub actions: Vec<ActionButton>,
}

/// Renders `email` as opened from `mailbox`.
///
/// Sent mail only offers `Reply`. While an action round trip is `pending`
/// every button is disabled.
#[must_use]
pub fn render_detail(email: &Email, mailbox: Mailbox, pending: bool) -> DetailView {
    let mut actions = vec![Action::Reply];
    if mailbox.supports_flag_actions() {
        actions.push(Action::ToggleArchive);
        actions.push(Action::ToggleRead);
    }

    DetailView {
        id: email.id,
        sender: email.sender.clone(),
        recipients: email.recipients_display(),
        subject: email.subject.clone(),
        timestamp: email.timestamp.clone(),
        body: body_text(&email.body),
        actions: actions
            .into_iter()
            .map(|action| ActionButton {
                action,
                label: action.label(email),
                enabled: !pending,
            })
            .collect(),
    }
}

/// The update implied by opening `email` from `mailbox`.
///
/// Unread mail outside the sent mailbox is marked read; everything else
/// needs no write.
#[must_use]
pub const fn implicit_read_update(email: &Email, mailbox: Mailbox) -> Option<EmailUpdate> {
    if mailbox.supports_flag_actions() && !email.read {
        Some(EmailUpdate::read(true))
    } else {
        None
    }
}
