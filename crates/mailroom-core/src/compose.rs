//! Compose draft model.

use crate::model::{Email, NewEmail};

/// Editable field of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Comma-delimited recipients.
    Recipients,
    /// Subject line.
    Subject,
    /// Message body.
    Body,
}

/// In-progress compose form content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    /// Comma-delimited recipient addresses.
    pub recipients: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
}

impl Draft {
    /// An empty draft.
    #[must_use]
    pub fn fresh() -> Self {
        Self::default()
    }

    /// A draft replying to `email`.
    ///
    /// The subject is always prefixed, so replying to a reply gives
    /// `"Re: Re: ..."`. The body starts with two blank lines above the
    /// quoted original.
    #[must_use]
    pub fn reply(email: &Email) -> Self {
        Self {
            recipients: email.sender.clone(),
            subject: format!("Re: {}", email.subject),
            body: format!(
                "\n\nOn {} {} wrote:\n{}",
                email.timestamp, email.sender, email.body
            ),
        }
    }

    /// Replaces one field.
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Recipients => self.recipients = value,
            DraftField::Subject => self.subject = value,
            DraftField::Body => self.body = value,
        }
    }

    /// Current value of one field.
    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Recipients => &self.recipients,
            DraftField::Subject => &self.subject,
            DraftField::Body => &self.body,
        }
    }

    /// The create payload for this draft.
    ///
    /// Fields are sent as typed; address checking is the backend's job.
    #[must_use]
    pub fn submit(&self) -> NewEmail {
        NewEmail::new(&self.recipients, &self.subject, &self.body)
    }
}
