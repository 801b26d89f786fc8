use regex::Regex;
use std::sync::LazyLock;

use crate::keywords::{PREFIX_STRIP, SUFFIX_STRIP};

// ── Regex patterns ─────────────────────────────────────────────────
//
// Raw captures as they come off the page text:
//   "#4 Justin Gaethje"        (ranking marker)
//   "C Islam Makhachev"        (champion marker)
//   "Live now Israel Adesanya" (status text glued to the name)
//   "Tom Aspinall Round"       (table column header glued behind)

static RE_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// Ranking marker: "#<digits> " at the very start.
static RE_RANK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\d+\s+").unwrap());

// Champion marker: a bare capital "C " at the very start. Case-sensitive,
// a lowercase "c" never marks a champion.
static RE_CHAMP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^C\s+").unwrap());

// One anchored, case-insensitive regex per strip keyword, in list order.
static PREFIX_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PREFIX_STRIP
        .iter()
        .map(|kw| Regex::new(&format!(r"(?i)^{}\s+", regex::escape(kw))).unwrap())
        .collect()
});

static SUFFIX_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SUFFIX_STRIP
        .iter()
        .map(|kw| Regex::new(&format!(r"(?i)\s+{}$", regex::escape(kw))).unwrap())
        .collect()
});

/// Clean a raw captured name: collapse whitespace, strip ranking and
/// champion markers, then strip every known prefix/suffix keyword in
/// list order, each removal re-anchored to the shortened string.
///
/// Pure and total. Over-stripped or degenerate results are not an error
/// here; the validity filter downstream rejects them.
pub fn clean_name(raw: &str) -> String {
    let mut name = RE_WS.replace_all(raw.trim(), " ").into_owned();

    name = RE_RANK.replace(&name, "").into_owned();
    name = RE_CHAMP.replace(&name, "").into_owned();

    for re in PREFIX_RES.iter() {
        name = re.replace(&name, "").into_owned();
    }
    for re in SUFFIX_RES.iter() {
        name = re.replace(&name, "").into_owned();
    }

    RE_WS.replace_all(name.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_ranking_marker() {
        assert_eq!(clean_name("#4 Justin Gaethje"), "Justin Gaethje");
        assert_eq!(clean_name("#12 Paulo Costa"), "Paulo Costa");
    }

    #[test]
    fn test_strips_champion_marker() {
        assert_eq!(clean_name("C Islam Makhachev"), "Islam Makhachev");
    }

    #[test]
    fn test_strips_prefix_keywords() {
        assert_eq!(clean_name("Live now Israel Adesanya"), "Israel Adesanya");
        assert_eq!(clean_name("LIVE Alex Pereira"), "Alex Pereira");
        assert_eq!(clean_name("Main Card Sean Strickland"), "Sean Strickland");
    }

    #[test]
    fn test_strips_suffix_keywords() {
        assert_eq!(clean_name("Tom Aspinall Round"), "Tom Aspinall");
        assert_eq!(clean_name("Ilia Topuria Follow live"), "Ilia Topuria");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_name("  Jon   Jones \t"), "Jon Jones");
    }

    #[test]
    fn test_is_idempotent() {
        for raw in [
            "#4 Justin Gaethje",
            "Live now Israel Adesanya",
            "Tom Aspinall Round",
            "C Merab Dvalishvili",
            "Jon Jones",
        ] {
            let once = clean_name(raw);
            assert_eq!(clean_name(&once), once);
        }
    }

    #[test]
    fn test_lowercase_c_is_not_a_champion_marker() {
        // "c " at the start is part of a (malformed) name, not a marker.
        assert_eq!(clean_name("c Islam Makhachev"), "c Islam Makhachev");
    }

    #[test]
    fn test_over_stripping_yields_degenerate_string() {
        // Almost nothing left after stripping; validity filtering rejects
        // this later.
        assert_eq!(clean_name("Live now"), "now");
    }
}
