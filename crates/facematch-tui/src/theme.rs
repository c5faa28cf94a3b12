use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Region border color
    pub border: Color,
    /// Region title color
    pub title: Color,
    /// Background under the cursor
    pub cursor_bg: Color,
    /// The question mark tile
    pub mystery: Color,
    /// Try-again marker
    pub error: Color,
    /// Level complete banner
    pub success: Color,
    /// Status and help text
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 64, g: 200, b: 205 },
            title: Color::Rgb { r: 255, g: 120, b: 70 },
            cursor_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            mystery: Color::Rgb { r: 255, g: 210, b: 100 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 0, g: 139, b: 139 },
            title: Color::Rgb { r: 200, g: 60, b: 20 },
            cursor_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            mystery: Color::Rgb { r: 200, g: 120, b: 20 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            border: Color::White,
            title: Color::Yellow,
            cursor_bg: Color::Blue,
            mystery: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            info: Color::Grey,
            key: Color::Yellow,
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "high_contrast" | "high-contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }
}
