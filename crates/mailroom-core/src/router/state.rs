//! View state held by the router.

use std::fmt;

use crate::compose::Draft;
use crate::model::{Email, EmailId, Mailbox};

/// Monotonic counter bumped on every view transition.
///
/// Round trips remember the generation they were issued under; a completion
/// whose generation no longer matches belongs to a view the user has left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Progress of the fetch backing a view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Request in flight.
    #[default]
    Loading,
    /// Data arrived.
    Loaded,
    /// Request failed with the given message.
    Failed(String),
}

/// Which of the three exclusive views is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// A mailbox's email list.
    MailboxList,
    /// The compose form.
    Compose,
    /// A single email.
    Detail,
}

/// The single view-state slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Listing a mailbox.
    MailboxList {
        /// Mailbox shown.
        mailbox: Mailbox,
        /// Emails from the last completed fetch.
        emails: Vec<Email>,
        /// Fetch progress.
        status: LoadStatus,
    },
    /// Editing a draft.
    Compose {
        /// Form content.
        draft: Draft,
        /// Mailbox to go back to on cancel.
        origin: Mailbox,
    },
    /// Reading one email.
    Detail {
        /// Email requested.
        id: EmailId,
        /// Mailbox the email was opened from.
        mailbox: Mailbox,
        /// Fetched copy, once it arrives.
        email: Option<Email>,
        /// Fetch progress.
        status: LoadStatus,
        /// Whether an archive/read action is awaiting its round trip.
        pending: bool,
    },
}

impl ViewState {
    /// A mailbox list waiting for its first fetch.
    #[must_use]
    pub const fn loading(mailbox: Mailbox) -> Self {
        Self::MailboxList {
            mailbox,
            emails: Vec::new(),
            status: LoadStatus::Loading,
        }
    }

    /// Which view is visible.
    #[must_use]
    pub const fn kind(&self) -> ViewKind {
        match self {
            Self::MailboxList { .. } => ViewKind::MailboxList,
            Self::Compose { .. } => ViewKind::Compose,
            Self::Detail { .. } => ViewKind::Detail,
        }
    }

    /// The mailbox this view belongs to: the one listed, the one an email
    /// was opened from, or the one compose was entered from.
    #[must_use]
    pub const fn mailbox(&self) -> Mailbox {
        match self {
            Self::MailboxList { mailbox, .. } | Self::Detail { mailbox, .. } => *mailbox,
            Self::Compose { origin, .. } => *origin,
        }
    }
}
