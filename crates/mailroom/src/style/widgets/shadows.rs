//! Shadow presets and corner radii.

use iced::{Color, Shadow, Vector};

use super::palette;

/// Corner radii.
pub mod radius {
    /// Square corners.
    pub const NONE: f32 = 0.0;
    /// Rows and small chips.
    pub const SMALL: f32 = 4.0;
    /// Buttons and inputs.
    pub const MEDIUM: f32 = 6.0;
    /// Cards.
    pub const LARGE: f32 = 8.0;
}

/// No shadow.
pub fn none() -> Shadow {
    Shadow::default()
}

/// Hairline lift for cards.
pub fn subtle() -> Shadow {
    Shadow {
        color: palette::current().shadow,
        offset: Vector::new(0.0, 1.0),
        blur_radius: 3.0,
    }
}

/// Colored halo around primary buttons.
pub const fn glow(color: Color) -> Shadow {
    Shadow {
        color: Color::from_rgba(color.r, color.g, color.b, 0.3),
        offset: Vector::new(0.0, 2.0),
        blur_radius: 10.0,
    }
}
