//! Mailbox list view.

use iced::widget::{Column, button, container, row, scrollable, text};
use iced::{Element, Length};

use mailroom_core::{Event, MailboxRow, MailboxView, RowEmphasis};

use super::placeholder;
use crate::message::Message;
use crate::style::widgets::{
    palette, panel_style, read_row_style, row_button_style, scrollable_style, unread_row_style,
};

/// Renders a mailbox list, or its loading, failure or empty state.
pub fn view_mailbox(view: &MailboxView) -> Element<'static, Message> {
    if view.loading {
        return placeholder("Loading...".to_string(), false);
    }
    if let Some(error) = &view.error {
        return placeholder(format!("Could not load {}: {error}", view.header), true);
    }
    if view.is_empty_mailbox() {
        return placeholder(format!("No emails in {}", view.header), false);
    }

    let rows = Column::with_children(view.rows.iter().map(view_row))
        .spacing(4)
        .padding([12, 16]);

    container(
        scrollable(rows)
            .height(Length::Fill)
            .style(scrollable_style),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(panel_style)
    .into()
}

/// One clickable summary row. Unread rows are bold on the full surface.
fn view_row(mail: &MailboxRow) -> Element<'static, Message> {
    let unread = mail.emphasis == RowEmphasis::Unread;
    let weight = if unread {
        iced::font::Weight::Bold
    } else {
        iced::font::Weight::Normal
    };
    let font = iced::Font {
        weight,
        ..Default::default()
    };

    let correspondent = text(mail.correspondent.clone())
        .size(14)
        .font(font)
        .width(Length::FillPortion(2));

    let subject = text(mail.subject.clone())
        .size(14)
        .font(font)
        .width(Length::FillPortion(5));

    let timestamp = text(mail.timestamp.clone()).size(12).style(|_theme| text::Style {
        color: Some(palette::current().text_muted),
    });

    let content = row![correspondent, subject, timestamp]
        .spacing(16)
        .align_y(iced::Alignment::Center);

    let row_button = button(content)
        .width(Length::Fill)
        .padding([10, 14])
        .style(row_button_style)
        .on_press(Message::Router(Event::OpenEmail(mail.id)));

    let style = if unread {
        unread_row_style
    } else {
        read_row_style
    };
    container(row_button).style(style).into()
}
