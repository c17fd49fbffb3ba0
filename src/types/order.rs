//! Sort direction selected by the user.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Direction in which the engine orders values.
///
/// Deserializes through [`FromStr`], so `"descending"` is accepted as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum SortOrder {
    /// Smallest value first. Adjacent values swap when `left > right`.
    #[default]
    Ascending,

    /// Largest value first. Adjacent values swap when `left < right`.
    Descending,
}

impl SortOrder {
    /// Returns true if `left` and `right` are out of order and must be swapped.
    ///
    /// Comparisons are strict, so equal values never swap and the sort stays
    /// stable. NaN compares false against everything and is never moved by a
    /// comparison it takes part in.
    pub fn should_swap(self, left: f64, right: f64) -> bool {
        match self {
            SortOrder::Ascending => left > right,
            SortOrder::Descending => left < right,
        }
    }

    /// Returns the display name used in the form and the JSON API.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names neither sort order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order: {0:?} (expected \"Ascending\" or \"Descending\")")]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("ascending") {
            Ok(SortOrder::Ascending)
        } else if s.eq_ignore_ascii_case("descending") {
            Ok(SortOrder::Descending)
        } else {
            Err(UnknownSortOrder(s.to_string()))
        }
    }
}

impl TryFrom<String> for SortOrder {
    type Error = UnknownSortOrder;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_is_ascending() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
    }

    #[test]
    fn ties_never_swap() {
        assert!(!SortOrder::Ascending.should_swap(1.0, 1.0));
        assert!(!SortOrder::Descending.should_swap(1.0, 1.0));
    }

    #[test]
    fn nan_never_swaps() {
        assert!(!SortOrder::Ascending.should_swap(f64::NAN, 1.0));
        assert!(!SortOrder::Ascending.should_swap(1.0, f64::NAN));
        assert!(!SortOrder::Descending.should_swap(f64::NAN, 1.0));
        assert!(!SortOrder::Descending.should_swap(1.0, f64::NAN));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("ascending".parse(), Ok(SortOrder::Ascending));
        assert_eq!("DESCENDING".parse(), Ok(SortOrder::Descending));
        assert_eq!(" Descending ".parse(), Ok(SortOrder::Descending));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "sideways".parse::<SortOrder>().unwrap_err();
        assert_eq!(err, UnknownSortOrder("sideways".to_string()));
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn serde_uses_display_names() {
        assert_eq!(
            serde_json::to_string(&SortOrder::Descending).unwrap(),
            "\"Descending\""
        );
        let parsed: SortOrder = serde_json::from_str("\"Ascending\"").unwrap();
        assert_eq!(parsed, SortOrder::Ascending);
    }

    #[test]
    fn deserialize_is_case_insensitive() {
        let parsed: SortOrder = serde_json::from_str("\"descending\"").unwrap();
        assert_eq!(parsed, SortOrder::Descending);
    }

    #[test]
    fn deserialize_rejects_unknown() {
        let err = serde_json::from_str::<SortOrder>("\"sideways\"").unwrap_err();
        assert!(err.to_string().contains("unknown sort order"));
    }

    proptest! {
        #[test]
        fn orders_are_mirror_images(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            prop_assert_eq!(
                SortOrder::Ascending.should_swap(a, b),
                SortOrder::Descending.should_swap(b, a)
            );
        }
    }
}
