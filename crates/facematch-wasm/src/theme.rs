//! Colors for the canvas UI

use serde::{Deserialize, Serialize};

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn as_css_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Color theme for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Fill behind the background image, and while loading
    pub background: Color,
    /// Region box outline
    pub box_stroke: Color,
    /// Opacity of the region boxes
    pub box_alpha: f64,
    /// Level number and status text
    pub text: Color,
    /// Loading progress text
    pub loading_text: Color,
    /// Highlight behind the tile under the pointer
    pub hover_glow: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// The original look: translucent boxes over the background image
    pub fn classic() -> Self {
        Self {
            background: Color::new(0, 0, 0),
            box_stroke: Color::new(0, 0, 0),
            box_alpha: 0.5,
            text: Color::new(255, 255, 255),
            loading_text: Color::new(255, 255, 255),
            hover_glow: Color::new(255, 255, 200),
        }
    }

    /// Stronger boxes for bright screens
    pub fn bold() -> Self {
        Self {
            background: Color::new(20, 20, 30),
            box_stroke: Color::new(255, 255, 255),
            box_alpha: 0.8,
            text: Color::new(255, 240, 120),
            loading_text: Color::new(200, 200, 220),
            hover_glow: Color::new(255, 255, 255),
        }
    }

    pub fn by_name(name: &str) -> Self {
        match name {
            "bold" => Self::bold(),
            _ => Self::classic(),
        }
    }
}
