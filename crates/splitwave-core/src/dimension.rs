//! Dimension selector
//!
//! A dimension is a classification parameter, never an attribute of an integer. It picks
//! one of six reference frames: dimensions 0..=2 read the wave phases directly, 3..=5 are
//! their inverse counterparts.

use crate::{EngineError, Result, ANCHOR_OFFSETS, DIMENSION_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six reference frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Dimension {
    #[default]
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
}

impl Dimension {
    /// All dimensions in index order
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Dimension::D0,
        Dimension::D1,
        Dimension::D2,
        Dimension::D3,
        Dimension::D4,
        Dimension::D5,
    ];

    /// Create a dimension, validating range
    pub fn new(value: i64) -> Result<Self> {
        if !(0..DIMENSION_COUNT as i64).contains(&value) {
            return Err(EngineError::InvalidDimension(value));
        }
        Ok(Self::ALL[value as usize])
    }

    /// Table index of this dimension
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Dimensions 3, 4 and 5 invert the split
    pub const fn is_inverse(self) -> bool {
        self.index() >= 3
    }

    /// Anchor offset of the 2-wave for this dimension
    pub const fn anchor_offset(self) -> i8 {
        ANCHOR_OFFSETS[self.index()]
    }
}

impl TryFrom<i64> for Dimension {
    type Error = EngineError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Dimension> for i64 {
    fn from(dimension: Dimension) -> Self {
        dimension.index() as i64
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_validation() {
        for value in 0..6 {
            assert_eq!(Dimension::new(value).unwrap().index(), value as usize);
        }
        assert_eq!(Dimension::new(6), Err(EngineError::InvalidDimension(6)));
        assert_eq!(Dimension::new(-1), Err(EngineError::InvalidDimension(-1)));
    }

    #[test]
    fn test_inverse_frames() {
        let inverse: Vec<_> = Dimension::ALL.iter().map(|d| d.is_inverse()).collect();
        assert_eq!(inverse, vec![false, false, false, true, true, true]);
    }

    #[test]
    fn test_serde_as_integer() {
        let json = serde_json::to_string(&Dimension::D4).unwrap();
        assert_eq!(json, "4");
        let parsed: Dimension = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, Dimension::D2);
        assert!(serde_json::from_str::<Dimension>("7").is_err());
    }
}
