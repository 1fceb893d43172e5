//! Compose form.

use iced::widget::{button, column, container, row, scrollable, text, text_editor, text_input};
use iced::{Element, Length};

use mailroom_core::{Draft, DraftField, Event};

use crate::message::Message;
use crate::style::widgets::{
    action_button_style, field_input_style, palette, panel_style, primary_button_style,
    scrollable_style,
};

/// Renders the compose form. The body lives in `body` so the editor keeps
/// its cursor between frames; the draft mirrors its text.
pub fn view_compose<'a>(draft: &Draft, body: &'a text_editor::Content) -> Element<'a, Message> {
    let recipients = field_row(
        "To",
        &draft.recipients,
        "alice@example.com, bob@example.com",
        DraftField::Recipients,
    );
    let subject = field_row("Subject", &draft.subject, "Subject", DraftField::Subject);

    let editor = text_editor(body)
        .placeholder("Write your message...")
        .on_action(Message::BodyEdited)
        .padding(12)
        .height(Length::Fixed(320.0));

    let send = button(text("Send").size(14))
        .padding([10, 24])
        .style(primary_button_style)
        .on_press(Message::Router(Event::SubmitDraft));

    let cancel = button(text("Cancel").size(14))
        .padding([10, 20])
        .style(action_button_style)
        .on_press(Message::Router(Event::Back));

    let content = column![
        recipients,
        subject,
        editor,
        row![send, cancel].spacing(12),
    ]
    .spacing(14)
    .padding([20, 24]);

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

fn field_row(
    label: &str,
    value: &str,
    placeholder: &str,
    field: DraftField,
) -> Element<'static, Message> {
    let label = text(format!("{label}:"))
        .size(14)
        .width(Length::Fixed(80.0))
        .style(|_theme| text::Style {
            color: Some(palette::current().text_secondary),
        });

    let input = text_input(placeholder, value)
        .on_input(move |value| Message::Router(Event::DraftEdited(field, value)))
        .on_submit(Message::Router(Event::SubmitDraft))
        .padding(10)
        .size(14)
        .style(field_input_style)
        .width(Length::Fill);

    row![label, input]
        .spacing(12)
        .align_y(iced::Alignment::Center)
        .into()
}
