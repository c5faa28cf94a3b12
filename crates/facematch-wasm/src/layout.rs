//! Pixel placement of the logical regions on a 16:9 canvas, and hit-testing.
//!
//! Sizes derive from the canvas width for the mystery row; everything else
//! is sized relative to it.

use facematch_core::{Region, RegionId};

/// Scale of a tile under the pointer
pub const HOVER_SCALE: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Where a region sits and how big its tiles are
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub region: Region,
    pub x: f64,
    pub y: f64,
    pub tile_size: f64,
    pub margin: f64,
}

impl Placement {
    /// Rounded box drawn behind the tiles
    pub fn box_rect(&self) -> Rect {
        let gx = self.region.grid_x as f64;
        let gy = self.region.grid_y as f64;
        Rect {
            x: self.x,
            y: self.y,
            w: gx * self.tile_size + (gx + 1.0) * self.margin,
            h: gy * self.tile_size + (gy + 1.0) * self.margin,
        }
    }

    /// Grid cell `cell`, counted row by row
    fn cell_rect(&self, cell: usize) -> Rect {
        let col = (cell % self.region.grid_x) as f64;
        let row = (cell / self.region.grid_x) as f64;
        let step = self.tile_size + self.margin;
        Rect {
            x: self.x + self.margin + step * col,
            y: self.y + self.margin + step * row,
            w: self.tile_size,
            h: self.tile_size,
        }
    }
}

/// Text anchor and font size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSpot {
    pub x: f64,
    pub y: f64,
    pub font_px: f64,
}

/// Every placement for one canvas size
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenLayout {
    pub width: f64,
    pub height: f64,
    pub mystery: Placement,
    pub picker: Placement,
    pub preview: Placement,
    pub menu: Placement,
    /// Extra horizontal offset of the last menu button, leaving room for the level
    next_button_shift: f64,
    pub level_text: TextSpot,
    /// Right-aligned status line in the bottom corner
    pub status_text: TextSpot,
    /// Loading text, centered
    pub loading_text: TextSpot,
}

impl ScreenLayout {
    /// Largest 16:9 canvas that fits the window
    pub fn fit_canvas(window_width: f64, window_height: f64) -> (f64, f64) {
        if window_height <= 0.0 {
            return (window_width.max(0.0).floor(), 0.0);
        }
        if window_width * 9.0 >= window_height * 16.0 {
            let height = window_height.floor();
            ((height * 16.0 / 9.0).floor(), height)
        } else {
            let width = window_width.floor();
            (width, (width * 9.0 / 16.0).floor())
        }
    }

    pub fn compute(width: f64, height: f64, display_level: usize) -> Self {
        // Mystery row: room for the tiles plus two tiles' worth of spacing
        let region = Region::MYSTERY;
        let gx = region.grid_x as f64;
        let gy = region.grid_y as f64;
        let tile_size = (width / (gx + 2.0)).floor();
        let blank_space = width - gx * tile_size;
        let margin = blank_space / (5.0 + (1.0 + (gx - 1.0) + 1.0) + 5.0);
        let mystery = Placement {
            region,
            x: 5.0 * margin,
            y: margin,
            tile_size,
            margin,
        };

        let picker = Placement {
            region: Region::PICKER,
            x: mystery.x + 5.0 * margin,
            y: mystery.y + gy * mystery.tile_size + (gy + 2.0) * margin,
            tile_size: 1.5 * mystery.tile_size,
            margin,
        };

        let preview = Placement {
            region: Region::PREVIEW,
            x: width - 3.0 * picker.tile_size - 9.0 * picker.margin - 5.0 * picker.margin,
            y: picker.y,
            tile_size: 3.0 * picker.tile_size,
            margin: 2.0 * picker.margin,
        };

        let menu_tile = height / 10.0;
        let menu_margin = menu_tile / 5.0;
        let menu = Placement {
            region: Region::MENU,
            x: 0.0,
            y: height - menu_tile - 2.0 * menu_margin,
            tile_size: menu_tile,
            margin: menu_margin,
        };

        let mut next_button_shift = menu_tile + menu_margin;
        let mut level_x = (4.5 * (menu_margin + menu_tile) + menu_margin / 2.0).trunc();
        if display_level < 10 {
            level_x -= menu_tile / 4.0;
            next_button_shift -= menu_tile / 2.0;
        }

        Self {
            width,
            height,
            mystery,
            picker,
            preview,
            menu,
            next_button_shift,
            level_text: TextSpot {
                x: level_x,
                y: height - menu_margin / 2.0 - menu_tile / 2.0,
                font_px: menu_tile.trunc(),
            },
            status_text: TextSpot {
                x: width - menu_margin,
                y: height - menu_margin,
                font_px: (menu_tile / 2.0).trunc(),
            },
            loading_text: TextSpot {
                x: width / 2.0,
                y: height / 2.0,
                font_px: (height / 10.0).trunc(),
            },
        }
    }

    pub fn placement(&self, id: RegionId) -> &Placement {
        match id {
            RegionId::Mystery => &self.mystery,
            RegionId::Picker => &self.picker,
            RegionId::Preview => &self.preview,
            RegionId::Menu => &self.menu,
        }
    }

    /// Screen rectangle of a slot. Overlays share the rectangle of their base.
    pub fn slot_rect(&self, id: RegionId, slot: usize) -> Rect {
        let placement = self.placement(id);
        let mut rect = placement.cell_rect(placement.region.base_of(slot));
        if id == RegionId::Menu && slot + 1 == placement.region.slots {
            rect.x += self.next_button_shift;
        }
        rect
    }

    /// The success image: two thirds of the canvas height, centered, square
    pub fn success_rect(&self, scale: f64) -> Rect {
        let size = self.height * 2.0 / 3.0 * scale;
        Rect {
            x: self.width / 2.0 - size / 2.0,
            y: self.height / 2.0 - size / 2.0,
            w: size,
            h: size,
        }
    }

    /// Clickable slot under a point, if any
    pub fn hit_test(&self, x: f64, y: f64) -> Option<(RegionId, usize)> {
        [RegionId::Menu, RegionId::Mystery, RegionId::Picker]
            .into_iter()
            .find_map(|id| {
                let region = Region::get(id);
                (0..region.slots)
                    .filter(|slot| region.base_of(*slot) == *slot)
                    .find(|slot| self.slot_rect(id, *slot).contains(x, y))
                    .map(|slot| (id, slot))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facematch_core::TARGET_TILE;

    fn layout() -> ScreenLayout {
        ScreenLayout::compute(1600.0, 900.0, 1)
    }

    #[test]
    fn test_fit_canvas_keeps_ratio() {
        assert_eq!(ScreenLayout::fit_canvas(1920.0, 1080.0), (1920.0, 1080.0));
        assert_eq!(ScreenLayout::fit_canvas(2000.0, 900.0), (1600.0, 900.0));
        assert_eq!(ScreenLayout::fit_canvas(800.0, 900.0), (800.0, 450.0));
    }

    #[test]
    fn test_mystery_row_fills_width() {
        let layout = layout();
        assert_eq!(layout.mystery.tile_size, 114.0);
        let row = layout.mystery.box_rect();
        assert!(row.x > 0.0);
        assert!(row.x + row.w < layout.width);
    }

    #[test]
    fn test_hit_test_finds_slots() {
        let layout = layout();
        let (x, y) = layout.slot_rect(RegionId::Mystery, TARGET_TILE).center();
        assert_eq!(layout.hit_test(x, y), Some((RegionId::Mystery, TARGET_TILE)));

        let (x, y) = layout.slot_rect(RegionId::Picker, 9).center();
        assert_eq!(layout.hit_test(x, y), Some((RegionId::Picker, 9)));

        let (x, y) = layout.slot_rect(RegionId::Menu, 4).center();
        assert_eq!(layout.hit_test(x, y), Some((RegionId::Menu, 4)));

        // Preview is display only
        let (x, y) = layout.slot_rect(RegionId::Preview, 0).center();
        assert_eq!(layout.hit_test(x, y), None);
        assert_eq!(layout.hit_test(-5.0, -5.0), None);
    }

    #[test]
    fn test_overlays_share_base_rect() {
        let layout = layout();
        assert_eq!(
            layout.slot_rect(RegionId::Mystery, 3),
            layout.slot_rect(RegionId::Mystery, 15)
        );
        assert_eq!(
            layout.slot_rect(RegionId::Picker, 10),
            layout.slot_rect(RegionId::Picker, 14)
        );
        assert_eq!(
            layout.slot_rect(RegionId::Preview, 0),
            layout.slot_rect(RegionId::Preview, 1)
        );
    }

    #[test]
    fn test_regions_do_not_overlap() {
        let layout = layout();
        let picker = layout.picker.box_rect();
        let preview = layout.preview.box_rect();
        let menu = layout.menu.box_rect();
        assert!(picker.x + picker.w < preview.x);
        assert!(preview.x + preview.w <= layout.width);
        assert!(picker.y + picker.h < menu.y);
    }

    #[test]
    fn test_next_button_leaves_room_for_level() {
        let layout = layout();
        let previous = layout.slot_rect(RegionId::Menu, 3);
        let next = layout.slot_rect(RegionId::Menu, 4);
        assert!(next.x > previous.x + previous.w);
        assert!(layout.level_text.x > previous.x + previous.w);
        assert!(layout.level_text.x < next.x);
    }
}
