use crate::attribute::{Attribute, ValueIndex};
use crate::error::ParseError;
use serde::{Deserialize, Serialize};

/// The hidden triple a mystery tile stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Solution {
    pub shape: ValueIndex,
    pub color: ValueIndex,
    pub expression: ValueIndex,
}

impl Solution {
    pub fn new(shape: ValueIndex, color: ValueIndex, expression: ValueIndex) -> Self {
        Self {
            shape,
            color,
            expression,
        }
    }

    pub fn get(&self, attribute: Attribute) -> ValueIndex {
        match attribute {
            Attribute::Shape => self.shape,
            Attribute::Color => self.color,
            Attribute::Expression => self.expression,
        }
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.shape, self.color, self.expression)
    }
}

/// The player's guess, built one attribute at a time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    slots: [Option<ValueIndex>; 3],
}

impl Combination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one slot. Nothing is checked against any solution here.
    pub fn select(&mut self, attribute: Attribute, value: ValueIndex) {
        self.slots[attribute.index()] = Some(value);
    }

    pub fn get(&self, attribute: Attribute) -> Option<ValueIndex> {
        self.slots[attribute.index()]
    }

    pub fn clear(&mut self) {
        self.slots = [None; 3];
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The full triple, once every attribute has been picked
    pub fn as_solution(&self) -> Option<Solution> {
        match self.slots {
            [Some(shape), Some(color), Some(expression)] => {
                Some(Solution::new(shape, color, expression))
            }
            _ => None,
        }
    }

    /// Wire form with `-1` for unpicked slots
    pub fn as_sentinel(&self) -> [i8; 3] {
        self.slots
            .map(|slot| slot.map_or(-1, |value| value.get() as i8))
    }

    /// Parse the wire form; `-1` means unpicked
    pub fn from_sentinel(raw: [i64; 3]) -> Result<Self, ParseError> {
        let mut combination = Self::new();
        for (attribute, value) in Attribute::ALL.into_iter().zip(raw) {
            if value != -1 {
                combination.select(attribute, ValueIndex::new(value)?);
            }
        }
        Ok(combination)
    }
}

impl From<Solution> for Combination {
    fn from(solution: Solution) -> Self {
        Self {
            slots: [
                Some(solution.shape),
                Some(solution.color),
                Some(solution.expression),
            ],
        }
    }
}

/// Result of trying a combination on a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptOutcome {
    Matched,
    Mismatched,
}

/// Exact match on all three attributes. An incomplete combination never matches.
pub fn attempt(combination: &Combination, target: &Solution) -> AttemptOutcome {
    if combination.as_solution().as_ref() == Some(target) {
        AttemptOutcome::Matched
    } else {
        AttemptOutcome::Mismatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(s: i64, c: i64, e: i64) -> Solution {
        Solution::new(
            ValueIndex::new(s).unwrap(),
            ValueIndex::new(c).unwrap(),
            ValueIndex::new(e).unwrap(),
        )
    }

    #[test]
    fn test_select_overwrites() {
        let mut combination = Combination::new();
        assert!(combination.is_empty());

        combination.select(Attribute::Shape, ValueIndex::new(1).unwrap());
        combination.select(Attribute::Shape, ValueIndex::new(3).unwrap());
        assert_eq!(combination.get(Attribute::Shape).map(ValueIndex::get), Some(3));
        assert_eq!(combination.get(Attribute::Color), None);
        assert_eq!(combination.as_sentinel(), [3, -1, -1]);
    }

    #[test]
    fn test_empty_never_matches() {
        let combination = Combination::new();
        for s in 0..4 {
            for c in 0..4 {
                for e in 0..4 {
                    assert_eq!(
                        attempt(&combination, &solution(s, c, e)),
                        AttemptOutcome::Mismatched
                    );
                }
            }
        }
    }

    #[test]
    fn test_partial_never_matches() {
        let target = solution(2, 1, 0);
        let mut combination = Combination::new();
        combination.select(Attribute::Shape, target.shape);
        combination.select(Attribute::Color, target.color);
        assert_eq!(attempt(&combination, &target), AttemptOutcome::Mismatched);

        combination.select(Attribute::Expression, target.expression);
        assert_eq!(attempt(&combination, &target), AttemptOutcome::Matched);
    }

    #[test]
    fn test_one_attribute_off_mismatches() {
        let target = solution(2, 1, 0);
        let mut combination = Combination::from(target);
        combination.select(Attribute::Expression, ValueIndex::new(3).unwrap());
        assert_eq!(attempt(&combination, &target), AttemptOutcome::Mismatched);
    }

    #[test]
    fn test_sentinel_roundtrip() {
        let combination = Combination::from_sentinel([-1, 2, -1]).unwrap();
        assert_eq!(combination.get(Attribute::Color).map(ValueIndex::get), Some(2));
        assert_eq!(combination.as_sentinel(), [-1, 2, -1]);
        assert!(Combination::from_sentinel([4, 0, 0]).is_err());
        assert!(Combination::from_sentinel([-2, 0, 0]).is_err());
    }

    #[test]
    fn test_clear() {
        let mut combination = Combination::from(solution(0, 0, 0));
        assert!(combination.is_complete());
        combination.clear();
        assert!(combination.is_empty());
        assert_eq!(combination.as_sentinel(), [-1, -1, -1]);
    }
}
