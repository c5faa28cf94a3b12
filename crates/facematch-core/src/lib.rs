//! Rule engine for the mystery tile matching puzzle.
//!
//! A row of twelve tiles follows a pattern of (shape, color, expression)
//! triples and the last one is hidden behind a question mark. The player
//! builds a guess from the picker and tries it on the hidden tile.
//!
//! This crate has no rendering, clocks or I/O. Front ends feed it input
//! events and draw from the views it exposes.

pub mod assets;
pub mod attribute;
pub mod combination;
pub mod config;
pub mod error;
pub mod layout;
pub mod level;
pub mod messages;
pub mod puzzle;
pub mod rng;
pub mod tile;

pub use assets::ColorFilter;
pub use attribute::{Attribute, ValueIndex, ATTRIBUTE_VALUES};
pub use combination::{attempt, AttemptOutcome, Combination, Solution};
pub use config::PuzzleConfig;
pub use error::{InvariantViolation, ParseError};
pub use layout::{dispatch, InputTarget, MenuAction, Region, RegionId};
pub use level::{normalize_level, Level, LevelBand, LevelGenerator, NUM_LEVELS};
pub use puzzle::{AdvanceTicket, AttemptResult, InputOutcome, Preview, PuzzleState, PuzzleView};
pub use rng::{shuffled_indices, RandomSource, ScriptedRng, SimpleRng};
pub use tile::{is_complete, MysteryTile, TileState, TileView, TARGET_TILE, TILE_COUNT};
