//! # mailroom-core
//!
//! Core logic for the `Mailroom` email client.
//!
//! This crate provides:
//! - Domain models for emails and mailboxes
//! - A REST client for the mail backend
//! - Pure render functions for mailbox lists and email details
//! - The compose draft model
//! - A sans-I/O view router that owns the view state
//! - Client configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod api;
pub mod compose;
mod config;
mod error;
pub mod model;
pub mod render;
pub mod router;

pub use api::ApiClient;
pub use compose::{Draft, DraftField};
pub use config::{BASE_URL_ENV, Config};
pub use error::{Error, Result};
pub use model::{CreateAck, Email, EmailId, EmailUpdate, Mailbox, NewEmail};
pub use render::{Action, ActionButton, DetailView, MailboxRow, MailboxView, RowEmphasis};
pub use router::{Effect, Event, FollowUp, Generation, LoadStatus, Router, ViewKind, ViewState};
