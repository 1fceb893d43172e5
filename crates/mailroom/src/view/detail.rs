//! Single-email view with its action panel.

use iced::widget::{Row, button, column, container, row, scrollable, text};
use iced::{Element, Length};

use mailroom_core::{Action, ActionButton, DetailView, Event};

use crate::message::Message;
use crate::style::widgets::{action_button_style, card_style, palette, panel_style, scrollable_style};

/// Renders an opened email.
pub fn view_detail(view: &DetailView) -> Element<'static, Message> {
    let fields = column![
        field_row("From", &view.sender),
        field_row("To", &view.recipients),
        field_row("Subject", &view.subject),
        field_row("Timestamp", &view.timestamp),
    ]
    .spacing(6);

    let actions = Row::with_children(view.actions.iter().map(action_button)).spacing(8);

    let card = container(column![fields, actions].spacing(16))
        .width(Length::Fill)
        .padding([16, 20])
        .style(card_style);

    let body = text(view.body.clone()).size(15);

    let content = column![card, body].spacing(20).padding([20, 24]);

    container(
        scrollable(content)
            .height(Length::Fill)
            .style(scrollable_style),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(panel_style)
    .into()
}

fn field_row(label: &str, value: &str) -> Element<'static, Message> {
    let label = text(format!("{label}:"))
        .size(13)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .width(Length::Fixed(90.0))
        .style(|_theme| text::Style {
            color: Some(palette::current().text_secondary),
        });

    row![label, text(value.to_string()).size(13)]
        .spacing(8)
        .into()
}

fn action_button(panel: &ActionButton) -> Element<'static, Message> {
    let event = match panel.action {
        Action::Reply => Event::Reply,
        Action::ToggleArchive => Event::ToggleArchive,
        Action::ToggleRead => Event::ToggleRead,
    };

    button(text(panel.label).size(13))
        .padding([8, 14])
        .style(action_button_style)
        .on_press_maybe(panel.enabled.then_some(Message::Router(event)))
        .into()
}
