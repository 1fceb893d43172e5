//! Mailbox navigation column.

use iced::widget::{Column, Space, button, column, container, text};
use iced::{Element, Length};

use mailroom_core::{Event, Mailbox, ViewKind};

use crate::message::Message;
use crate::style::widgets::palette::ThemeMode;
use crate::style::widgets::{
    nav_button_selected_style, nav_button_style, palette, primary_button_style, sidebar_style,
};

/// Mailbox to highlight: the one listed on screen, if any.
#[must_use]
pub const fn highlighted(kind: ViewKind, mailbox: Mailbox) -> Option<Mailbox> {
    match kind {
        ViewKind::MailboxList => Some(mailbox),
        ViewKind::Compose | ViewKind::Detail => None,
    }
}

/// Renders the sidebar.
pub fn view_sidebar(
    highlight: Option<Mailbox>,
    theme_mode: ThemeMode,
) -> Element<'static, Message> {
    let title = text("Mailroom")
        .size(20)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| text::Style {
            color: Some(palette::current().primary),
        });

    let compose = button(text("Compose").size(14))
        .width(Length::Fill)
        .padding([10, 16])
        .style(primary_button_style)
        .on_press(Message::Router(Event::ComposeNew));

    let mailboxes = Column::with_children(
        Mailbox::ALL
            .iter()
            .map(|&mailbox| view_mailbox_entry(mailbox, highlight == Some(mailbox))),
    )
    .spacing(2);

    let theme_toggle = button(text(theme_mode.toggle_label()).size(13))
        .width(Length::Fill)
        .padding([8, 12])
        .style(nav_button_style)
        .on_press(Message::ToggleTheme);

    let content = column![
        title,
        compose,
        mailboxes,
        Space::new().height(Length::Fill),
        theme_toggle,
    ]
    .spacing(16)
    .padding([20, 12]);

    container(content)
        .width(Length::Fixed(200.0))
        .height(Length::Fill)
        .style(sidebar_style)
        .into()
}

fn view_mailbox_entry(mailbox: Mailbox, selected: bool) -> Element<'static, Message> {
    let style = if selected {
        nav_button_selected_style
    } else {
        nav_button_style
    };

    button(text(mailbox.display_name()).size(14))
        .width(Length::Fill)
        .padding([8, 12])
        .style(style)
        .on_press(Message::Router(Event::Navigate(mailbox)))
        .into()
}
