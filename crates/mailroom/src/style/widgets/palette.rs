//! Light and dark color palettes.
//!
//! Style functions read the active palette through [`current`], so a theme
//! switch only has to call [`set_theme`] before the next redraw.

use iced::Color;
use serde::{Deserialize, Serialize};

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label for the toggle that switches away from this mode.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark mode",
            Self::Dark => "Light mode",
        }
    }
}

/// Colors shared by every style function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Accent for primary actions and the selected mailbox.
    pub primary: Color,
    /// Primary accent under the pointer.
    pub primary_hover: Color,
    /// Primary accent while pressed.
    pub primary_pressed: Color,
    /// Text drawn on the primary accent.
    pub text_on_primary: Color,

    /// Window background.
    pub background: Color,
    /// Panels and unread rows.
    pub surface: Color,
    /// Read rows and recessed areas.
    pub surface_muted: Color,

    /// Body text.
    pub text: Color,
    /// Labels and secondary text.
    pub text_secondary: Color,
    /// Timestamps and placeholders.
    pub text_muted: Color,

    /// Failure notices.
    pub danger: Color,
    /// Background behind failure notices.
    pub danger_surface: Color,

    /// Selected navigation entry.
    pub selected: Color,
    /// Hover background.
    pub hover: Color,
    /// Hairline borders.
    pub border: Color,
    /// Stronger borders for inputs.
    pub border_strong: Color,
    /// Drop shadow.
    pub shadow: Color,
}

impl Palette {
    /// Light palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.11, 0.42, 0.87),
            primary_hover: Color::from_rgb(0.25, 0.53, 0.95),
            primary_pressed: Color::from_rgb(0.07, 0.33, 0.72),
            text_on_primary: Color::WHITE,

            background: Color::from_rgb(0.96, 0.97, 0.98),
            surface: Color::WHITE,
            surface_muted: Color::from_rgb(0.91, 0.92, 0.93),

            text: Color::from_rgb(0.09, 0.10, 0.13),
            text_secondary: Color::from_rgb(0.38, 0.42, 0.49),
            text_muted: Color::from_rgb(0.56, 0.60, 0.66),

            danger: Color::from_rgb(0.78, 0.16, 0.20),
            danger_surface: Color::from_rgb(0.99, 0.93, 0.93),

            selected: Color::from_rgb(0.90, 0.94, 1.0),
            hover: Color::from_rgb(0.95, 0.96, 0.98),
            border: Color::from_rgb(0.88, 0.89, 0.92),
            border_strong: Color::from_rgb(0.76, 0.79, 0.84),
            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
        }
    }

    /// Dark palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.40, 0.66, 1.0),
            primary_hover: Color::from_rgb(0.52, 0.74, 1.0),
            primary_pressed: Color::from_rgb(0.30, 0.55, 0.90),
            text_on_primary: Color::from_rgb(0.06, 0.08, 0.12),

            background: Color::from_rgb(0.08, 0.09, 0.11),
            surface: Color::from_rgb(0.13, 0.14, 0.16),
            surface_muted: Color::from_rgb(0.10, 0.11, 0.13),

            text: Color::from_rgb(0.92, 0.93, 0.95),
            text_secondary: Color::from_rgb(0.66, 0.69, 0.74),
            text_muted: Color::from_rgb(0.50, 0.53, 0.58),

            danger: Color::from_rgb(1.0, 0.42, 0.45),
            danger_surface: Color::from_rgb(0.22, 0.11, 0.12),

            selected: Color::from_rgb(0.14, 0.20, 0.29),
            hover: Color::from_rgb(0.17, 0.18, 0.21),
            border: Color::from_rgb(0.21, 0.22, 0.25),
            border_strong: Color::from_rgb(0.34, 0.36, 0.40),
            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        }
    }

    /// Palette for `mode`.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Active palette.
static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::light()));

/// Switches the active palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Copy of the active palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::light(), |p| *p)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggle_label(), "Dark mode");
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(Palette::light().background, Palette::dark().background);
        assert_eq!(Palette::for_mode(ThemeMode::Dark), Palette::dark());
    }
}
