use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of values each attribute can take
pub const ATTRIBUTE_VALUES: usize = 4;

/// One of the three dimensions a tile varies along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Shape,
    Color,
    Expression,
}

impl Attribute {
    /// All attributes, in solution order
    pub const ALL: [Attribute; 3] = [Attribute::Shape, Attribute::Color, Attribute::Expression];

    /// Position of this attribute inside a solution triple
    pub fn index(self) -> usize {
        match self {
            Attribute::Shape => 0,
            Attribute::Color => 1,
            Attribute::Expression => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Attribute::Shape => "shape",
            Attribute::Color => "color",
            Attribute::Expression => "expression",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Attribute {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shape" => Ok(Attribute::Shape),
            "color" | "colour" => Ok(Attribute::Color),
            "expression" | "face" => Ok(Attribute::Expression),
            _ => Err(ParseError::UnknownAttribute(s.to_string())),
        }
    }
}

/// A value of one attribute, always in `0..ATTRIBUTE_VALUES`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct ValueIndex(u8);

impl ValueIndex {
    /// Every value, in index order
    pub const ALL: [ValueIndex; ATTRIBUTE_VALUES] =
        [ValueIndex(0), ValueIndex(1), ValueIndex(2), ValueIndex(3)];

    pub fn new(value: i64) -> Result<Self, ParseError> {
        if (0..ATTRIBUTE_VALUES as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ParseError::ValueOutOfRange(value))
        }
    }

    /// Build from an index already known to be in range (wraps otherwise)
    pub(crate) fn wrapping(index: usize) -> Self {
        Self((index % ATTRIBUTE_VALUES) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<i64> for ValueIndex {
    type Error = ParseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ValueIndex> for u8 {
    fn from(value: ValueIndex) -> Self {
        value.0
    }
}

impl std::fmt::Display for ValueIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_index_roundtrip() {
        for attribute in Attribute::ALL {
            assert_eq!(Attribute::from_index(attribute.index()), Some(attribute));
        }
        assert_eq!(Attribute::from_index(3), None);
    }

    #[test]
    fn test_attribute_parse() {
        assert_eq!("Shape".parse::<Attribute>(), Ok(Attribute::Shape));
        assert_eq!("colour".parse::<Attribute>(), Ok(Attribute::Color));
        assert_eq!("face".parse::<Attribute>(), Ok(Attribute::Expression));
        assert!(matches!(
            "size".parse::<Attribute>(),
            Err(ParseError::UnknownAttribute(_))
        ));
    }

    #[test]
    fn test_value_index_range() {
        assert_eq!(ValueIndex::new(0).map(ValueIndex::get), Ok(0));
        assert_eq!(ValueIndex::new(3).map(ValueIndex::get), Ok(3));
        assert_eq!(ValueIndex::new(-1), Err(ParseError::ValueOutOfRange(-1)));
        assert_eq!(ValueIndex::new(4), Err(ParseError::ValueOutOfRange(4)));
    }

    #[test]
    fn test_value_index_serde() {
        let value: ValueIndex = serde_json::from_str("2").unwrap();
        assert_eq!(value.get(), 2);
        assert_eq!(serde_json::to_string(&value).unwrap(), "2");
        assert!(serde_json::from_str::<ValueIndex>("-1").is_err());
    }
}
