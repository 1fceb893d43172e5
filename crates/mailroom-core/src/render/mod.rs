//! Pure render functions.
//!
//! Each function turns view state into a plain view model. Nothing here
//! performs I/O or keeps state, so a view model can be thrown away and
//! rebuilt on every frame.

mod body;
mod detail;
mod mailbox;

pub use body::{body_text, looks_like_markup};
pub use detail::{Action, ActionButton, DetailView, implicit_read_update, render_detail};
pub use mailbox::{MailboxRow, MailboxView, RowEmphasis, render_mailbox};
