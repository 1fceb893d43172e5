//! Mailbox (named partition of emails) model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A mailbox exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mailbox {
    /// Received mail that has not been archived.
    #[default]
    Inbox,
    /// Mail sent by the current user.
    Sent,
    /// Received mail that has been archived.
    Archive,
}

impl Mailbox {
    /// Every mailbox, in navigation order.
    pub const ALL: [Self; 3] = [Self::Inbox, Self::Sent, Self::Archive];

    /// Name used in backend URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Sent => "sent",
            Self::Archive => "archive",
        }
    }

    /// Capitalized name shown as the list header.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Sent => "Sent",
            Self::Archive => "Archive",
        }
    }

    /// Whether read/archive actions apply to mail in this mailbox.
    ///
    /// The sender cannot see the recipient's read state, so sent mail only
    /// supports replying.
    #[must_use]
    pub const fn supports_flag_actions(self) -> bool {
        !matches!(self, Self::Sent)
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown mailbox name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown mailbox: {0}")]
pub struct UnknownMailbox(pub String);

impl FromStr for Mailbox {
    type Err = UnknownMailbox;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inbox" => Ok(Self::Inbox),
            "sent" => Ok(Self::Sent),
            "archive" | "archived" => Ok(Self::Archive),
            _ => Err(UnknownMailbox(s.to_string())),
        }
    }
}
