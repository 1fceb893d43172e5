//! Domain models shared by the REST client, the renderers and the router.

mod email;
mod mailbox;

pub use email::{CreateAck, Email, EmailId, EmailUpdate, NewEmail};
pub use mailbox::{Mailbox, UnknownMailbox};
