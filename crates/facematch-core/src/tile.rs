use crate::combination::Solution;
use serde::{Deserialize, Serialize};

/// Number of mystery tiles in a level
pub const TILE_COUNT: usize = 12;

/// The tile hidden behind the question mark
pub const TARGET_TILE: usize = TILE_COUNT - 1;

/// What a mystery tile currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileState {
    /// Shape, color and face are visible
    Revealed,
    /// Question mark; the player has to work it out
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MysteryTile {
    solution: Solution,
    state: TileState,
}

impl MysteryTile {
    pub fn revealed(solution: Solution) -> Self {
        Self {
            solution,
            state: TileState::Revealed,
        }
    }

    pub fn unknown(solution: Solution) -> Self {
        Self {
            solution,
            state: TileState::Unknown,
        }
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn state(&self) -> TileState {
        self.state
    }

    pub fn is_unknown(&self) -> bool {
        self.state == TileState::Unknown
    }

    /// Show the tile. Its solution never changes.
    pub(crate) fn reveal(&mut self) {
        self.state = TileState::Revealed;
    }
}

/// Per-tile view for renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TileView {
    Revealed { index: usize, solution: Solution },
    Unknown { index: usize },
}

impl TileView {
    pub fn of(index: usize, tile: &MysteryTile) -> Self {
        match tile.state {
            TileState::Revealed => TileView::Revealed {
                index,
                solution: tile.solution,
            },
            TileState::Unknown => TileView::Unknown { index },
        }
    }
}

/// True when no tile is still hidden behind a question mark
pub fn is_complete(tiles: &[MysteryTile]) -> bool {
    !tiles.iter().any(MysteryTile::is_unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::ValueIndex;

    fn tiles_with_target_unknown() -> Vec<MysteryTile> {
        let solution = Solution::new(ValueIndex::ALL[0], ValueIndex::ALL[1], ValueIndex::ALL[2]);
        (0..TILE_COUNT)
            .map(|i| {
                if i == TARGET_TILE {
                    MysteryTile::unknown(solution)
                } else {
                    MysteryTile::revealed(solution)
                }
            })
            .collect()
    }

    #[test]
    fn test_incomplete_while_target_unknown() {
        let mut tiles = tiles_with_target_unknown();
        assert!(!is_complete(&tiles));

        tiles[TARGET_TILE].reveal();
        assert!(is_complete(&tiles));
    }

    #[test]
    fn test_any_unknown_tile_blocks_completion() {
        let solution = Solution::new(ValueIndex::ALL[3], ValueIndex::ALL[3], ValueIndex::ALL[3]);
        for hidden in 0..TILE_COUNT {
            let tiles: Vec<_> = (0..TILE_COUNT)
                .map(|i| {
                    if i == hidden {
                        MysteryTile::unknown(solution)
                    } else {
                        MysteryTile::revealed(solution)
                    }
                })
                .collect();
            assert!(!is_complete(&tiles), "tile {} is hidden", hidden);
        }
    }

    #[test]
    fn test_tile_view_hides_unknown_solution() {
        let tiles = tiles_with_target_unknown();
        assert_eq!(TileView::of(TARGET_TILE, &tiles[TARGET_TILE]), TileView::Unknown { index: 11 });
        assert!(matches!(TileView::of(0, &tiles[0]), TileView::Revealed { index: 0, .. }));

        let json = serde_json::to_string(&TileView::of(TARGET_TILE, &tiles[TARGET_TILE])).unwrap();
        assert_eq!(json, r#"{"state":"unknown","index":11}"#);
    }
}
