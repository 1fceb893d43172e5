//! View components for the application.

mod compose;
mod detail;
mod header;
mod mailbox;
mod sidebar;

pub use compose::view_compose;
pub use detail::view_detail;
pub use header::view_header;
pub use mailbox::view_mailbox;
pub use sidebar::{highlighted, view_sidebar};

use iced::widget::{container, text};
use iced::{Element, Length};

use mailroom_core::LoadStatus;

use crate::message::Message;
use crate::style::widgets::{palette, panel_style};

/// Stand-in for an email that has not arrived.
pub fn view_opening(status: &LoadStatus) -> Element<'static, Message> {
    match status {
        LoadStatus::Failed(error) => placeholder(format!("Could not open email: {error}"), true),
        LoadStatus::Loading | LoadStatus::Loaded => placeholder("Loading...".to_string(), false),
    }
}

/// Centered status line filling the content panel.
fn placeholder(message: String, is_error: bool) -> Element<'static, Message> {
    let label = text(message).size(15).style(move |_theme| {
        let p = palette::current();
        text::Style {
            color: Some(if is_error { p.danger } else { p.text_secondary }),
        }
    });

    container(label)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(panel_style)
        .into()
}
