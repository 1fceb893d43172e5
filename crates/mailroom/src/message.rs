//! Message types for application events.
//!
//! Everything the router understands travels as [`Message::Router`]; the
//! remaining variants cover what only the desktop shell cares about.

use iced::widget::text_editor;
use mailroom_core::{Config, Event};

use crate::model::AppSettings;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    /// A user intent or a round-trip completion for the router.
    Router(Event),
    /// Edit in the compose body editor.
    BodyEdited(text_editor::Action),
    /// Switch between light and dark palettes.
    ToggleTheme,
    /// Client configuration read at start-up.
    ConfigLoaded(Result<Config, String>),
    /// Settings read at start-up.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings written after a change.
    SettingsSaved(Result<(), String>),
    /// Input the shell does not react to.
    Ignored,
}
