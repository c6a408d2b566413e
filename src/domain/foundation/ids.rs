//! Strongly-typed identifier value objects.
//!
//! The review API keys every record by a positive integer primary key.
//! Each entity gets its own newtype so an employee ID can never be passed
//! where a review ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw primary key.
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw primary key.
            pub const fn get(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

integer_id!(
    /// Identifier of an employee account.
    EmployeeId
);

integer_id!(
    /// Identifier of a performance review.
    ReviewId
);

integer_id!(
    /// Identifier of a feedback request (one invitation to answer a review).
    FeedbackId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_id_displays_raw_value() {
        assert_eq!(EmployeeId::new(42).to_string(), "42");
    }

    #[test]
    fn review_id_parses_from_string() {
        let id: ReviewId = " 7 ".parse().unwrap();
        assert_eq!(id, ReviewId::new(7));
    }

    #[test]
    fn feedback_id_rejects_garbage() {
        assert!("abc".parse::<FeedbackId>().is_err());
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&EmployeeId::new(3)).unwrap();
        assert_eq!(json, "3");

        let id: FeedbackId = serde_json::from_str("12").unwrap();
        assert_eq!(id.get(), 12);
    }
}
