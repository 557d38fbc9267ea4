//! User-facing list positions.

use std::fmt;

/// A position in a displayed list.
///
/// Users see 1-based positions; collections are indexed 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    /// Create from a 0-based position.
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// Create from a 1-based position. Returns `None` for 0.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self::from_zero_based)
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_based_conversion() {
        let index = Index::from_one_based(3).unwrap();
        assert_eq!(index.zero_based(), 2);
        assert_eq!(index.one_based(), 3);
        assert_eq!(index.to_string(), "3");
    }

    #[test]
    fn test_zero_is_not_a_one_based_index() {
        assert!(Index::from_one_based(0).is_none());
    }

    #[test]
    fn test_zero_based_round_trip() {
        assert_eq!(Index::from_zero_based(0), Index::from_one_based(1).unwrap());
    }
}
