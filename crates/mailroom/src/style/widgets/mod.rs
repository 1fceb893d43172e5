//! Widget style functions backed by the active palette.

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

pub use buttons::{
    action_button_style, nav_button_selected_style, nav_button_style, primary_button_style,
    row_button_style,
};
pub use containers::{
    app_style, card_style, header_style, notice_style, panel_style, read_row_style,
    sidebar_style, unread_row_style,
};
pub use inputs::{field_input_style, scrollable_style};
