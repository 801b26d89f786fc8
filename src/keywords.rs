//! Keyword and exclusion lists used by cleaning and filtering.
//!
//! All lists are ordered: the cleaner tries strip keywords in exactly this
//! order, re-anchoring after each removal. Multi-word keywords come before
//! their single-word prefixes ("Live now" before "Live").

/// Status/UI fragments that leak in front of a name when the page renders
/// a live event, e.g. "Live now Israel Adesanya".
pub const PREFIX_STRIP: &[&str] = &[
    "Live now", "Live", "LIVE NOW", "LIVE", "Card", "Method", "Main Card", "Main",
];

/// Table-column fragments that leak behind a name, e.g. "Tom Aspinall Round".
pub const SUFFIX_STRIP: &[&str] = &[
    "Round", "Round Time", "Time", "Follow live", "Follow", "LIVE NOW", "LIVE", "now",
];

/// Tokens that indicate a captured pair is UI/status text rather than a pure
/// name. Substring-checked case-insensitively when ranking duplicate mentions.
pub const NOISE_WORDS: &[&str] = &["live", "round", "method", "card", "follow", "time"];

/// Exact (case-insensitive) strings that are never fighter names.
pub const EXCLUDED_EXACT: &[&str] = &["vs", "odds", "Flag"];

/// Country names that show up in "X vs Y" flag rows on the event page.
pub const EXCLUDED_COUNTRIES: &[&str] = &[
    "United States",
    "England",
    "Brazil",
    "China",
    "Russia",
    "Dominican Republic",
    "Lithuania",
    "Cameroon",
];

/// Weight-class / bout-category keywords. A candidate containing any of
/// these anywhere is rejected outright.
pub const EXCLUDED_CONTAINS: &[&str] = &[
    "Title",
    "Bout",
    "Interim",
    "Women",
    "Lightweight",
    "Bantamweight",
    "Heavyweight",
    "Featherweight",
    "Light Heavyweight",
    "Middleweight",
    "Flyweight",
    "Fight Card",
];

/// Check whether a name carries any noise word as a (case-insensitive)
/// substring.
pub fn has_noise_word(name: &str) -> bool {
    let lower = name.to_lowercase();
    NOISE_WORDS.iter().any(|w| lower.contains(w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_word_is_substring_checked() {
        assert!(has_noise_word("Live now Israel Adesanya"));
        assert!(has_noise_word("Tom Aspinall Round"));
        assert!(!has_noise_word("Justin Gaethje"));
    }
}
