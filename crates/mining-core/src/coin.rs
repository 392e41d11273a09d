//! The coin record produced by a qualifying tick.

use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::difficulty::DifficultyLevel;

/// A recorded qualifying hash.
///
/// Created by the engine when a tick's hash satisfies the difficulty
/// predicate. Never mutated afterwards; the collection is only cleared
/// in bulk on reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// The qualifying hash value.
    pub hash: String,
    /// Iteration count at the moment of discovery.
    pub count: u64,
    /// Difficulty level active at the moment of discovery.
    pub level: DifficultyLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_serializes_with_plain_fields() {
        let coin = Coin {
            hash: "000abc".into(),
            count: 42,
            level: DifficultyLevel::new(3).unwrap(),
        };
        let json = serde_json::to_string(&coin).unwrap();
        assert_eq!(json, r#"{"hash":"000abc","count":42,"level":3}"#);
    }
}
