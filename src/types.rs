use serde::Serialize;

use crate::surname::surname_key;

// ── A canonical fighter pairing ────────────────────────────────────

/// The single retained representative for one real-world pairing,
/// after merging all textual mentions of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FighterPair {
    pub fighter1: String,
    pub fighter2: String,
}

impl FighterPair {
    pub fn new(fighter1: impl Into<String>, fighter2: impl Into<String>) -> Self {
        FighterPair {
            fighter1: fighter1.into(),
            fighter2: fighter2.into(),
        }
    }
}

// ── Grouping key ───────────────────────────────────────────────────

/// Sorted pair of lowercased surnames. Used only to key the aggregation
/// (at most one entry per key), never displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairKey(String, String);

impl PairKey {
    pub fn for_pair(name1: &str, name2: &str) -> Self {
        let a = surname_key(name1);
        let b = surname_key(name2);
        if a <= b { PairKey(a, b) } else { PairKey(b, a) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_key_is_order_independent() {
        assert_eq!(
            PairKey::for_pair("Justin Gaethje", "Max Holloway"),
            PairKey::for_pair("Max Holloway", "Justin Gaethje"),
        );
    }

    #[test]
    fn test_pair_key_uses_surnames() {
        assert_eq!(
            PairKey::for_pair("Gaethje", "Holloway"),
            PairKey::for_pair("Justin Gaethje", "Max Holloway"),
        );
    }
}
