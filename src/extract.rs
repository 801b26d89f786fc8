use regex::Regex;

use crate::clean::clean_name;
use crate::keywords::{EXCLUDED_CONTAINS, EXCLUDED_COUNTRIES, EXCLUDED_EXACT, has_noise_word};
use crate::matcher::names_match;
use crate::types::{FighterPair, PairKey};

// ── Scanner ────────────────────────────────────────────────────────

/// Holds the compiled regexes for fight-pair extraction.
pub struct PairScanner {
    /// `<Name> vs <Name>` — names are capitalized, may span several
    /// tokens with hyphens and apostrophes.
    re_pair: Regex,
    /// Proper-name shape a cleaned candidate must keep.
    re_shape: Regex,
}

impl Default for PairScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl PairScanner {
    pub fn new() -> Self {
        let re_pair =
            Regex::new(r"\b([A-Z][A-Za-z\s'\-]{2,50})\s+vs\s+([A-Z][A-Za-z\s'\-]{2,50})\b")
                .expect("pair regex");
        let re_shape = Regex::new(r"^[A-Z][A-Za-z\s'\-]+$").expect("shape regex");

        PairScanner { re_pair, re_shape }
    }

    /// Scan flattened page text and return the canonical fight pairs in
    /// the order they were first discovered.
    ///
    /// Every textual `X vs Y` occurrence is cleaned and filtered; valid
    /// pairs are merged against the pairs found so far, keeping the best
    /// textual representative per real-world pairing.
    pub fn scan_text(&self, text: &str) -> Vec<FighterPair> {
        // Discovery-ordered working set. A linear scan (not a hash
        // lookup) so the first matching entry always wins.
        let mut entries: Vec<Entry> = Vec::new();

        for caps in self.re_pair.captures_iter(text) {
            let fighter1 = clean_name(caps.get(1).map_or("", |m| m.as_str()));
            let fighter2 = clean_name(caps.get(2).map_or("", |m| m.as_str()));

            if !self.is_valid_name(&fighter1) || !self.is_valid_name(&fighter2) {
                continue;
            }

            let matched = entries.iter().position(|e| {
                (names_match(&fighter1, &e.pair.fighter1)
                    && names_match(&fighter2, &e.pair.fighter2))
                    || (names_match(&fighter1, &e.pair.fighter2)
                        && names_match(&fighter2, &e.pair.fighter1))
            });

            let candidate = FighterPair::new(fighter1, fighter2);
            match matched {
                Some(i) => {
                    // Same pairing seen again: keep whichever textual
                    // variant scores better. Position and key untouched.
                    if prefer_candidate(&candidate, &entries[i].pair) {
                        entries[i].pair = candidate;
                    }
                }
                None => {
                    let key = PairKey::for_pair(&candidate.fighter1, &candidate.fighter2);
                    // One entry per key: a colliding insert overwrites the
                    // stored value in place.
                    match entries.iter().position(|e| e.key == key) {
                        Some(i) => entries[i].pair = candidate,
                        None => entries.push(Entry { key, pair: candidate }),
                    }
                }
            }
        }

        entries.into_iter().map(|e| e.pair).collect()
    }

    /// Validity filter for one cleaned side of a match.
    fn is_valid_name(&self, name: &str) -> bool {
        let len = name.chars().count();
        if !(5..=40).contains(&len) {
            return false;
        }
        if EXCLUDED_EXACT.iter().any(|x| name.eq_ignore_ascii_case(x)) {
            return false;
        }
        if EXCLUDED_COUNTRIES.iter().any(|c| name.eq_ignore_ascii_case(c)) {
            return false;
        }
        let lower = name.to_lowercase();
        if EXCLUDED_CONTAINS.iter().any(|k| lower.contains(&k.to_lowercase())) {
            return false;
        }
        self.re_shape.is_match(name)
    }
}

// ── Aggregation ────────────────────────────────────────────────────

struct Entry {
    key: PairKey,
    pair: FighterPair,
}

/// Decide whether `candidate` should replace `existing` as the stored
/// representative of a pairing. Preference order: noise-free beats noisy,
/// then strictly more words, then strictly more characters.
fn prefer_candidate(candidate: &FighterPair, existing: &FighterPair) -> bool {
    let candidate_noisy = has_noise_word(&candidate.fighter1) || has_noise_word(&candidate.fighter2);
    let existing_noisy = has_noise_word(&existing.fighter1) || has_noise_word(&existing.fighter2);

    if candidate_noisy != existing_noisy {
        return !candidate_noisy;
    }

    let candidate_words = word_count(candidate);
    let existing_words = word_count(existing);
    if candidate_words != existing_words {
        return candidate_words > existing_words;
    }

    char_count(candidate) > char_count(existing)
}

fn word_count(pair: &FighterPair) -> usize {
    pair.fighter1.split_whitespace().count() + pair.fighter2.split_whitespace().count()
}

fn char_count(pair: &FighterPair) -> usize {
    pair.fighter1.chars().count() + pair.fighter2.chars().count()
}
