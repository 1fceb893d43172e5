//! Title bar with the failure notice beneath it.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length};

use mailroom_core::Event;

use crate::message::Message;
use crate::style::widgets::{header_style, nav_button_style, notice_style, palette};

/// Renders the title bar. `notice` shows the latest failure, if any.
pub fn view_header(title: &str, notice: Option<&str>) -> Element<'static, Message> {
    let title = text(title.to_string())
        .size(22)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| text::Style {
            color: Some(palette::current().text),
        });

    let refresh = button(text("\u{21BB}").size(18))
        .padding([6, 12])
        .style(nav_button_style)
        .on_press(Message::Router(Event::Refresh));

    let bar = container(
        row![title, Space::new().width(Length::Fill), refresh]
            .align_y(iced::Alignment::Center)
            .padding([14, 24]),
    )
    .width(Length::Fill)
    .style(header_style);

    match notice {
        Some(notice) => column![
            bar,
            container(text(notice.to_string()).size(13))
                .width(Length::Fill)
                .padding([8, 16])
                .style(notice_style),
        ]
        .spacing(8)
        .into(),
        None => bar.into(),
    }
}
