//! Level generation: how many values of each attribute are in play and
//! which triple every mystery tile stands for.

use crate::attribute::{Attribute, ValueIndex, ATTRIBUTE_VALUES};
use crate::combination::Solution;
use crate::error::InvariantViolation;
use crate::rng::{shuffled_indices, RandomSource, SimpleRng};
use crate::tile::{MysteryTile, TARGET_TILE, TILE_COUNT};
use serde::{Deserialize, Serialize};

/// Number of levels before the game wraps around
pub const NUM_LEVELS: usize = 7;

/// Bring any requested level into `0..NUM_LEVELS`, wrapping negatives
pub fn normalize_level(requested: i64) -> usize {
    let n = NUM_LEVELS as i64;
    (((requested % n) + n) % n) as usize
}

/// How the in-play counts are chosen for a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelBand {
    /// Levels 1-2: every attribute uses the shared rank
    Uniform,
    /// Levels 3-4: shared rank, except one attribute is fixed to one value
    OneFixed,
    /// Levels 5-6: everything fixed except one attribute with the shared rank
    OneVaries,
    /// Level 7: each attribute gets its own rank
    Independent,
}

impl LevelBand {
    /// Band for a normalized level index
    pub fn for_level(level: usize) -> Self {
        match level {
            0..=1 => LevelBand::Uniform,
            2..=3 => LevelBand::OneFixed,
            4..=5 => LevelBand::OneVaries,
            _ => LevelBand::Independent,
        }
    }
}

impl std::fmt::Display for LevelBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LevelBand::Uniform => "uniform",
            LevelBand::OneFixed => "one fixed",
            LevelBand::OneVaries => "one varies",
            LevelBand::Independent => "independent",
        };
        write!(f, "{}", name)
    }
}

/// A generated level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    index: usize,
    band: LevelBand,
    rank: usize,
    counts: [usize; 3],
    value_sets: [Vec<ValueIndex>; 3],
    solutions: Vec<Solution>,
}

impl Level {
    /// Zero-based level index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Level number as shown to the player
    pub fn display_number(&self) -> usize {
        self.index + 1
    }

    pub fn band(&self) -> LevelBand {
        self.band
    }

    /// The shared rank drawn for this level
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// How many distinct values of `attribute` appear in the row
    pub fn in_play_count(&self, attribute: Attribute) -> usize {
        self.counts[attribute.index()]
    }

    pub fn value_set(&self, attribute: Attribute) -> &[ValueIndex] {
        &self.value_sets[attribute.index()]
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn solution(&self, tile: usize) -> Option<&Solution> {
        self.solutions.get(tile)
    }

    pub fn target_solution(&self) -> &Solution {
        &self.solutions[TARGET_TILE]
    }

    /// Fresh tiles for this level: all revealed except the target
    pub fn tiles(&self) -> Vec<MysteryTile> {
        self.solutions
            .iter()
            .enumerate()
            .map(|(i, solution)| {
                if i == TARGET_TILE {
                    MysteryTile::unknown(*solution)
                } else {
                    MysteryTile::revealed(*solution)
                }
            })
            .collect()
    }

    /// Check the generator's guarantees
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        if self.index >= NUM_LEVELS {
            return Err(InvariantViolation::LevelOutOfRange(self.index));
        }

        for attribute in Attribute::ALL {
            let set = self.value_set(attribute);
            let count = self.in_play_count(attribute);

            if set.is_empty() || set.len() > ATTRIBUTE_VALUES {
                return Err(InvariantViolation::ValueSetLength {
                    attribute,
                    len: set.len(),
                });
            }
            if set.len() != count {
                return Err(InvariantViolation::ValueSetCount {
                    attribute,
                    len: set.len(),
                    count,
                });
            }
            for (i, value) in set.iter().enumerate() {
                if set[..i].contains(value) {
                    return Err(InvariantViolation::DuplicateValue {
                        attribute,
                        value: value.get(),
                    });
                }
            }
            for (tile, solution) in self.solutions.iter().enumerate() {
                let value = solution.get(attribute);
                if !set.contains(&value) {
                    return Err(InvariantViolation::SolutionOutOfSet {
                        tile,
                        attribute,
                        value: value.get(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Builds levels from a random source
pub struct LevelGenerator<R = SimpleRng> {
    rng: R,
}

impl Default for LevelGenerator<SimpleRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelGenerator<SimpleRng> {
    /// Generator seeded from the platform
    pub fn new() -> Self {
        Self::with_rng(SimpleRng::new())
    }

    /// Generator with a fixed seed for reproducible levels
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SimpleRng::with_seed(seed))
    }
}

impl<R: RandomSource> LevelGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// The random source, for draws that follow level generation
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Generate the level for `requested`, wrapped into range
    pub fn generate(&mut self, requested: i64) -> Level {
        let index = normalize_level(requested);
        let band = LevelBand::for_level(index);

        // Drawn for every band so the sequence of draws does not depend on it
        let rank = self.random_rank();
        let counts = match band {
            LevelBand::Uniform => [rank; 3],
            LevelBand::OneFixed => {
                let mut counts = [rank; 3];
                counts[self.rng.next_index(3)] = 1;
                counts
            }
            LevelBand::OneVaries => {
                let mut counts = [1; 3];
                counts[self.rng.next_index(3)] = rank;
                counts
            }
            LevelBand::Independent => {
                let shape = self.random_rank();
                let color = self.random_rank();
                let expression = self.random_rank();
                [shape, color, expression]
            }
        };

        let value_sets = counts.map(|count| self.value_set(count));

        let solutions = (0..TILE_COUNT)
            .map(|i| {
                let pick = |set: &Vec<ValueIndex>| set[i % set.len()];
                Solution::new(
                    pick(&value_sets[0]),
                    pick(&value_sets[1]),
                    pick(&value_sets[2]),
                )
            })
            .collect();

        let level = Level {
            index,
            band,
            rank,
            counts,
            value_sets,
            solutions,
        };

        debug_assert!(
            level.validate().is_ok(),
            "generated an invalid level: {:?}",
            level.validate()
        );
        level
    }

    /// A rank in 2..=4
    fn random_rank(&mut self) -> usize {
        2 + self.rng.next_index(3)
    }

    /// The first `count` values of a fresh shuffle
    fn value_set(&mut self, count: usize) -> Vec<ValueIndex> {
        shuffled_indices(&mut self.rng, ATTRIBUTE_VALUES, false)
            .into_iter()
            .take(count)
            .map(ValueIndex::wrapping)
            .collect()
    }
}
