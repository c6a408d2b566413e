//! Feedback score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A feedback score between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Score(u8);

impl Score {
    /// Lowest score.
    pub const MIN: Self = Self(0);

    /// Highest score.
    pub const MAX: Self = Self(100);

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(0..=100).contains(&value) {
            return Err(ValidationError::out_of_range("score", 0, 100, value));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<i64> for Score {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Score> for i64 {
    fn from(score: Score) -> Self {
        i64::from(score.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
