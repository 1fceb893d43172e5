//! REST client for the mail backend.
//!
//! Wraps the four email endpoints:
//!
//! | Operation       | Request                     |
//! |-----------------|-----------------------------|
//! | list a mailbox  | `GET /emails/{mailbox}`     |
//! | get one email   | `GET /emails/{id}`          |
//! | create an email | `POST /emails`              |
//! | update flags    | `PUT /emails/{id}`          |

mod client;
mod response;

pub use client::ApiClient;
pub use response::error_message;
