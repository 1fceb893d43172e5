//! Email resource models.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend-assigned identifier of an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailId(pub u64);

impl fmt::Display for EmailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An email as returned by the backend.
///
/// Everything except `read` and `archived` is immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// Unique identifier.
    pub id: EmailId,
    /// Sender address.
    pub sender: String,
    /// Recipient addresses, in the order the backend lists them.
    #[serde(deserialize_with = "deserialize_recipients")]
    pub recipients: Vec<String>,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    /// Message body as stored by the backend.
    #[serde(default)]
    pub body: String,
    /// Human-readable creation time.
    #[serde(default)]
    pub timestamp: String,
    /// Whether the email has been read.
    #[serde(default)]
    pub read: bool,
    /// Whether the email has been archived.
    #[serde(default)]
    pub archived: bool,
}

impl Email {
    /// Recipients joined for display.
    #[must_use]
    pub fn recipients_display(&self) -> String {
        self.recipients.join(", ")
    }
}

/// Accepts either a comma-delimited string or an array of strings.
fn deserialize_recipients<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Joined(String),
        List(Vec<String>),
    }

    let list = match Raw::deserialize(deserializer)? {
        Raw::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        Raw::List(list) => list,
    };

    Ok(list
        .into_iter()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect())
}

/// A new email to be created by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewEmail {
    /// One or more comma-delimited recipient addresses.
    pub recipients: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
}

impl NewEmail {
    /// Creates a new email payload.
    #[must_use]
    pub fn new(
        recipients: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipients: recipients.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Acknowledgment returned after a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CreateAck {
    /// Confirmation text, if the backend sent one.
    #[serde(default)]
    pub message: Option<String>,
}

/// Sparse update of an email's mutable flags.
///
/// Only fields that are `Some` are serialized, so an update never touches a
/// flag it does not name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmailUpdate {
    /// New read state.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub read: Option<bool>,
    /// New archived state.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub archived: Option<bool>,
}

impl EmailUpdate {
    /// Update that only sets the read flag.
    #[must_use]
    pub const fn read(read: bool) -> Self {
        Self {
            read: Some(read),
            archived: None,
        }
    }

    /// Update that flips the read flag of `email`.
    #[must_use]
    pub const fn toggle_read(email: &Email) -> Self {
        Self::read(!email.read)
    }

    /// Update that flips the archived flag of `email`.
    ///
    /// Archiving or restoring always resets the email to unread, so restored
    /// mail resurfaces in the inbox as new.
    #[must_use]
    pub const fn toggle_archived(email: &Email) -> Self {
        Self {
            read: Some(false),
            archived: Some(!email.archived),
        }
    }

    /// Whether the update names no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.read.is_none() && self.archived.is_none()
    }

    /// Applies the update to a local copy.
    pub fn apply(&self, email: &mut Email) {
        if let Some(read) = self.read {
            email.read = read;
        }
        if let Some(archived) = self.archived {
            email.archived = archived;
        }
    }
}
