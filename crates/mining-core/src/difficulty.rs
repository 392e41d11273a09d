//! Difficulty levels and the coin-qualification predicate.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Lowest selectable difficulty level.
pub const MIN_LEVEL: u8 = 1;

/// Highest selectable difficulty level.
pub const MAX_LEVEL: u8 = 5;

/// Errors from difficulty level validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyError {
    /// Level outside the [`MIN_LEVEL`]..=[`MAX_LEVEL`] range.
    OutOfRange(u8),
}

impl fmt::Display for DifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyError::OutOfRange(level) => {
                write!(
                    f,
                    "Difficulty level {} is out of range ({}-{})",
                    level, MIN_LEVEL, MAX_LEVEL
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DifficultyError {}

/// A validated mining difficulty level.
///
/// The level is the number of leading `'0'` characters a hash's hex
/// encoding must have to qualify as a coin. The value is always within
/// [`MIN_LEVEL`]..=[`MAX_LEVEL`]; construct it through
/// [`DifficultyLevel::new`], which rejects out-of-range values instead
/// of clamping them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DifficultyLevel(u8);

impl DifficultyLevel {
    /// Create a validated level.
    pub fn new(level: u8) -> Result<Self, DifficultyError> {
        if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            Ok(DifficultyLevel(level))
        } else {
            Err(DifficultyError::OutOfRange(level))
        }
    }

    /// The raw level value.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for DifficultyLevel {
    fn default() -> Self {
        DifficultyLevel(MIN_LEVEL)
    }
}

impl TryFrom<u8> for DifficultyLevel {
    type Error = DifficultyError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        DifficultyLevel::new(level)
    }
}

impl From<DifficultyLevel> for u8 {
    fn from(level: DifficultyLevel) -> u8 {
        level.0
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check whether a hash qualifies as a coin at the given difficulty.
///
/// String-prefix semantics: level 3 means the first three hex characters
/// are all `'0'`, not 12 leading zero bits.
#[inline]
pub fn qualifies(hash: &str, level: DifficultyLevel) -> bool {
    has_zero_prefix(hash, level.get() as usize)
}

/// Raw prefix test. A prefix length of 0 is vacuously satisfied.
pub fn has_zero_prefix(hash: &str, len: usize) -> bool {
    hash.len() >= len && hash.as_bytes()[..len].iter().all(|&b| b == b'0')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: u8) -> DifficultyLevel {
        DifficultyLevel::new(n).unwrap()
    }

    #[test]
    fn test_level_accepts_full_range() {
        for n in MIN_LEVEL..=MAX_LEVEL {
            assert_eq!(level(n).get(), n);
        }
    }

    #[test]
    fn test_level_rejects_out_of_range() {
        assert_eq!(DifficultyLevel::new(0), Err(DifficultyError::OutOfRange(0)));
        assert_eq!(DifficultyLevel::new(6), Err(DifficultyError::OutOfRange(6)));
        assert_eq!(
            DifficultyLevel::new(255),
            Err(DifficultyError::OutOfRange(255))
        );
    }

    #[test]
    fn test_level_default_is_minimum() {
        assert_eq!(DifficultyLevel::default().get(), MIN_LEVEL);
    }

    #[test]
    fn test_qualifies_string_prefix_semantics() {
        assert!(qualifies("000abc", level(3)));
        assert!(!qualifies("00fabc", level(3)));
        // More zeros than required still qualifies
        assert!(qualifies("0000ff", level(3)));
        // Level 1 is the loosest rule
        assert!(qualifies("0fffff", level(1)));
        assert!(!qualifies("f00000", level(1)));
    }

    #[test]
    fn test_qualifies_is_not_a_bit_count() {
        // 0x08 has 4 leading zero bits per hex digit semantics would differ:
        // "08..." starts with one '0' character, so level 2 must reject it.
        assert!(qualifies("08ffff", level(1)));
        assert!(!qualifies("08ffff", level(2)));
    }

    #[test]
    fn test_zero_prefix_is_vacuous_at_length_zero() {
        assert!(has_zero_prefix("deadbeef", 0));
        assert!(has_zero_prefix("", 0));
    }

    #[test]
    fn test_zero_prefix_of_short_string() {
        assert!(!has_zero_prefix("00", 3));
    }

    #[test]
    fn test_level_serde_round_trip_validates() {
        let json = serde_json::to_string(&level(3)).unwrap();
        assert_eq!(json, "3");
        let back: DifficultyLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, level(3));
        // Deserialization goes through the same validation as new()
        assert!(serde_json::from_str::<DifficultyLevel>("9").is_err());
    }
}
