//! Error types for the puzzle engine.

use crate::attribute::Attribute;
use thiserror::Error;

/// A level that breaks the generator's own guarantees.
///
/// These are programming errors, never player errors. The generator checks
/// every level it produces with [`crate::Level::validate`] in debug builds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{attribute} value set has length {len}, expected 1..=4")]
    ValueSetLength { attribute: Attribute, len: usize },

    #[error("{attribute} value set has {len} entries but {count} are in play")]
    ValueSetCount {
        attribute: Attribute,
        len: usize,
        count: usize,
    },

    #[error("{attribute} value set repeats value {value}")]
    DuplicateValue { attribute: Attribute, value: u8 },

    #[error("tile {tile} has {attribute} value {value} outside the level's value set")]
    SolutionOutOfSet {
        tile: usize,
        attribute: Attribute,
        value: u8,
    },

    #[error("level index {0} is outside 0..7")]
    LevelOutOfRange(usize),
}

/// Errors for values coming in from outside the engine (front ends, JSON).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("value index {0} is outside 0..4")]
    ValueOutOfRange(i64),

    #[error("unknown attribute {0:?}")]
    UnknownAttribute(String),

    #[error("unknown menu action {0:?}")]
    UnknownMenuAction(String),
}
