//! Logical screen regions and the input dispatch table.
//!
//! Renderers decide where regions go in pixels; this module only says how
//! many slots each region has, how they are arranged in a grid, and what a
//! click on each slot means.

use crate::attribute::{Attribute, ValueIndex, ATTRIBUTE_VALUES};
use crate::error::ParseError;
use crate::tile::TILE_COUNT;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionId {
    /// The row of mystery tiles
    Mystery,
    /// Shape, color and expression choices
    Picker,
    /// The combination picked so far
    Preview,
    /// Menu bar along the bottom
    Menu,
}

/// Static shape of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub id: RegionId,
    /// Grid columns
    pub grid_x: usize,
    /// Grid rows
    pub grid_y: usize,
    /// Number of drawable slots, including overlays
    pub slots: usize,
    /// Box fill color, if the region has a box
    pub color: Option<&'static str>,
}

impl Region {
    /// 12 tiles in one row. Slots 12..24 are the faces drawn over tiles 0..12.
    pub const MYSTERY: Region = Region {
        id: RegionId::Mystery,
        grid_x: TILE_COUNT,
        grid_y: 1,
        slots: 2 * TILE_COUNT,
        color: Some("DarkTurquoise"),
    };

    /// 4x3 grid: shapes, colors, expression backgrounds, then the 4 faces
    /// drawn over the expression backgrounds.
    pub const PICKER: Region = Region {
        id: RegionId::Picker,
        grid_x: ATTRIBUTE_VALUES,
        grid_y: 3,
        slots: 4 * ATTRIBUTE_VALUES,
        color: Some("OrangeRed"),
    };

    /// Slot 0 is the tinted shape (or the try-again image), slot 1 the face
    pub const PREVIEW: Region = Region {
        id: RegionId::Preview,
        grid_x: 1,
        grid_y: 1,
        slots: 2,
        color: Some("DeepSkyBlue"),
    };

    pub const MENU: Region = Region {
        id: RegionId::Menu,
        grid_x: MenuAction::ALL.len(),
        grid_y: 1,
        slots: MenuAction::ALL.len(),
        color: None,
    };

    pub const ALL: [Region; 4] = [Region::MYSTERY, Region::PICKER, Region::PREVIEW, Region::MENU];

    pub fn get(id: RegionId) -> Region {
        match id {
            RegionId::Mystery => Region::MYSTERY,
            RegionId::Picker => Region::PICKER,
            RegionId::Preview => Region::PREVIEW,
            RegionId::Menu => Region::MENU,
        }
    }

    /// Slot drawn on top of `slot`, if any
    pub fn overlay_of(&self, slot: usize) -> Option<usize> {
        match self.id {
            RegionId::Mystery if slot < TILE_COUNT => Some(slot + TILE_COUNT),
            RegionId::Picker if (2 * ATTRIBUTE_VALUES..3 * ATTRIBUTE_VALUES).contains(&slot) => {
                Some(slot + ATTRIBUTE_VALUES)
            }
            RegionId::Preview if slot == 0 => Some(1),
            _ => None,
        }
    }

    /// Slot an overlay is drawn over. Overlays share their base's grid cell.
    pub fn base_of(&self, slot: usize) -> usize {
        match self.id {
            RegionId::Mystery if slot >= TILE_COUNT => slot - TILE_COUNT,
            RegionId::Picker if slot >= 3 * ATTRIBUTE_VALUES => slot - ATTRIBUTE_VALUES,
            RegionId::Preview => 0,
            _ => slot,
        }
    }

    /// Whether the slot grows under the pointer, ignoring tile state
    pub fn hoverable(&self, slot: usize) -> bool {
        match self.id {
            RegionId::Mystery => slot < TILE_COUNT,
            RegionId::Picker => slot < 3 * ATTRIBUTE_VALUES,
            RegionId::Preview => false,
            RegionId::Menu => slot < self.slots,
        }
    }
}

/// Menu bar buttons, in bar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    Home,
    Help,
    About,
    Previous,
    Next,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::Home,
        MenuAction::Help,
        MenuAction::About,
        MenuAction::Previous,
        MenuAction::Next,
    ];

    pub fn asset_key(self) -> &'static str {
        crate::assets::MENU_BAR[self as usize]
    }
}

impl FromStr for MenuAction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(MenuAction::Home),
            "help" => Ok(MenuAction::Help),
            "about" => Ok(MenuAction::About),
            "previous" | "prev" => Ok(MenuAction::Previous),
            "next" => Ok(MenuAction::Next),
            _ => Err(ParseError::UnknownMenuAction(s.to_string())),
        }
    }
}

/// What a click means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum InputTarget {
    Shape(ValueIndex),
    Color(ValueIndex),
    Expression(ValueIndex),
    /// A mystery tile, by tile index
    Target(usize),
    Menu(MenuAction),
}

impl InputTarget {
    /// Picker choice as (attribute, value)
    pub fn as_selection(&self) -> Option<(Attribute, ValueIndex)> {
        match *self {
            InputTarget::Shape(value) => Some((Attribute::Shape, value)),
            InputTarget::Color(value) => Some((Attribute::Color, value)),
            InputTarget::Expression(value) => Some((Attribute::Expression, value)),
            InputTarget::Target(_) | InputTarget::Menu(_) => None,
        }
    }
}

/// Dispatch table: what a click on `slot` of `region` does, if anything
pub fn dispatch(region: RegionId, slot: usize) -> Option<InputTarget> {
    match region {
        RegionId::Mystery if slot < TILE_COUNT => Some(InputTarget::Target(slot)),
        RegionId::Picker => {
            let value = ValueIndex::wrapping(slot);
            match slot / ATTRIBUTE_VALUES {
                0 => Some(InputTarget::Shape(value)),
                1 => Some(InputTarget::Color(value)),
                2 => Some(InputTarget::Expression(value)),
                // Face overlays are not clickable; the click lands on the base
                _ => None,
            }
        }
        RegionId::Menu => MenuAction::ALL.get(slot).copied().map(InputTarget::Menu),
        _ => None,
    }
}
