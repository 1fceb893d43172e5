//! Mailbox list rendering.

use crate::model::{Email, EmailId, Mailbox};
use crate::router::LoadStatus;

/// Visual weight of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEmphasis {
    /// Unread mail, drawn emphasized.
    Unread,
    /// Read mail, drawn plain.
    Read,
}

impl RowEmphasis {
    /// Emphasis for an email's read flag.
    #[must_use]
    pub const fn for_read(read: bool) -> Self {
        if read { Self::Read } else { Self::Unread }
    }
}

/// One summary row in a mailbox list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailboxRow {
    /// Email the row opens when clicked.
    pub id: EmailId,
    /// Sender, or recipients when listing sent mail.
    pub correspondent: String,
    /// Subject line.
    pub subject: String,
    /// Display timestamp.
    pub timestamp: String,
    /// Read/unread emphasis.
    pub emphasis: RowEmphasis,
}

impl MailboxRow {
    /// Builds the row for `email` as listed in `mailbox`.
    #[must_use]
    pub fn new(email: &Email, mailbox: Mailbox) -> Self {
        let correspondent = if mailbox == Mailbox::Sent {
            email.recipients_display()
        } else {
            email.sender.clone()
        };

        Self {
            id: email.id,
            correspondent,
            subject: email.subject.clone(),
            timestamp: email.timestamp.clone(),
            emphasis: RowEmphasis::for_read(email.read),
        }
    }
}

/// Rendered mailbox list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailboxView {
    /// Mailbox being shown.
    pub mailbox: Mailbox,
    /// Capitalized mailbox name.
    pub header: &'static str,
    /// One row per email, in server order.
    pub rows: Vec<MailboxRow>,
    /// Whether the list is still being fetched.
    pub loading: bool,
    /// Failure message when the fetch failed.
    pub error: Option<String>,
}

impl MailboxView {
    /// Whether a completed fetch returned no mail.
    #[must_use]
    pub fn is_empty_mailbox(&self) -> bool {
        !self.loading && self.error.is_none() && self.rows.is_empty()
    }
}

/// Renders a mailbox list.
#[must_use]
pub fn render_mailbox(mailbox: Mailbox, emails: &[Email], status: &LoadStatus) -> MailboxView {
    MailboxView {
        mailbox,
        header: mailbox.display_name(),
        rows: emails.iter().map(|e| MailboxRow::new(e, mailbox)).collect(),
        loading: matches!(status, LoadStatus::Loading),
        error: match status {
            LoadStatus::Failed(message) => Some(message.clone()),
            _ => None,
        },
    }
}
