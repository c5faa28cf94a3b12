//! Mapping from attribute values to the renderer's asset keys.
//!
//! The engine only deals in indices. Renderers look up images by these keys
//! and tint shapes with [`ColorFilter`].

use crate::attribute::ValueIndex;
use serde::{Deserialize, Serialize};

pub const QUESTION_MARK: &str = "question_mark";
pub const TRY_AGAIN: &str = "try_again";
pub const BLANK: &str = "blank";
pub const BACKGROUND: &str = "background";

/// Shape images, by shape index
pub const SHAPES: [&str; 4] = ["shape_circle", "shape_hexagon", "shape_rhombus", "shape_square"];

/// Face images, by expression index
pub const FACES: [&str; 4] = ["face_angry", "face_glasses", "face_happy", "face_tonque"];

/// Menu bar buttons, in bar order
pub const MENU_BAR: [&str; 5] = ["bar_home", "bar_help", "bar_about", "bar_previous", "bar_next"];

/// Images shown when a level is complete; one is picked per level
pub const SUCCESS_IMAGES: [&str; 2] = ["flower_good", "lion_good"];

/// Every image a renderer has to load before the first level
pub const ALL: [&str; 19] = [
    QUESTION_MARK,
    FACES[0],
    FACES[1],
    FACES[2],
    FACES[3],
    SHAPES[0],
    SHAPES[1],
    SHAPES[2],
    SHAPES[3],
    MENU_BAR[0],
    MENU_BAR[1],
    MENU_BAR[2],
    MENU_BAR[3],
    MENU_BAR[4],
    BACKGROUND,
    SUCCESS_IMAGES[0],
    SUCCESS_IMAGES[1],
    TRY_AGAIN,
    BLANK,
];

pub fn shape_key(shape: ValueIndex) -> &'static str {
    SHAPES[shape.as_usize()]
}

pub fn face_key(expression: ValueIndex) -> &'static str {
    FACES[expression.as_usize()]
}

/// Per-channel multipliers applied to a white shape image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorFilter {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl ColorFilter {
    /// No tint
    pub const IDENTITY: ColorFilter = ColorFilter {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
    };

    /// Filter for a color index: red, green, blue, yellow.
    ///
    /// Each color is a 3-bit RGB mask; a set bit keeps the channel, a clear
    /// bit halves it.
    pub fn for_color(color: ValueIndex) -> Self {
        const RGB_MASKS: [u8; 4] = [4, 2, 3, 6];
        let mask = RGB_MASKS[color.as_usize()];
        let channel = |bit: u8| if mask & bit != 0 { 1.0 } else { 0.5 };
        Self {
            red: channel(4),
            green: channel(2),
            blue: channel(1),
        }
    }

    /// The filter applied to pure white, as 8-bit RGB
    pub fn rgb(&self) -> (u8, u8, u8) {
        let scale = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        (scale(self.red), scale(self.green), scale(self.blue))
    }

    /// CSS `rgb()` string for the tint
    pub fn as_css(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("rgb({}, {}, {})", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(i: i64) -> ValueIndex {
        ValueIndex::new(i).unwrap()
    }

    #[test]
    fn test_color_filters() {
        assert_eq!(ColorFilter::for_color(idx(0)).rgb(), (255, 128, 128));
        assert_eq!(ColorFilter::for_color(idx(1)).rgb(), (128, 255, 128));
        assert_eq!(ColorFilter::for_color(idx(2)).rgb(), (128, 255, 255));
        assert_eq!(ColorFilter::for_color(idx(3)).rgb(), (255, 255, 128));
    }

    #[test]
    fn test_asset_keys() {
        assert_eq!(shape_key(idx(0)), "shape_circle");
        assert_eq!(shape_key(idx(3)), "shape_square");
        assert_eq!(face_key(idx(2)), "face_happy");
        assert_eq!(ALL.len(), 19);
        assert_eq!(ALL[0], QUESTION_MARK);
    }
}
