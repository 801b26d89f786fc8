// ── Fighter identity matching ──────────────────────────────────────
//
// Real mentions of the same fighter on one event page:
//   "Justin Gaethje"  /  "Gaethje"        (full vs surname-only row)
//   "Max Holloway"    /  "max holloway"   (case drift)
//
// A bare surname is matched against any fuller name ending in the same
// token. That also merges distinct people who share a surname; see
// test_distinct_people_sharing_a_surname below.

/// Check whether two cleaned names denote the same fighter.
pub fn names_match(name1: &str, name2: &str) -> bool {
    let lower1 = name1.to_lowercase();
    let lower2 = name2.to_lowercase();

    // Exact match
    if lower1 == lower2 {
        return true;
    }

    // One name contains the other, e.g. "gaethje" in "justin gaethje".
    // Guard against coincidental containment: the shorter name's last
    // token must equal the longer name's last token.
    if lower1.contains(&lower2) || lower2.contains(&lower1) {
        let (shorter, longer) = if name1.chars().count() < name2.chars().count() {
            (&lower1, &lower2)
        } else {
            (&lower2, &lower1)
        };

        if let (Some(s), Some(l)) = (
            shorter.split_whitespace().last(),
            longer.split_whitespace().last(),
        ) {
            return s == l;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(names_match("Jon Jones", "Jon Jones"));
    }

    #[test]
    fn test_case_insensitive_match() {
        assert!(names_match("Jon Jones", "jon jones"));
    }

    #[test]
    fn test_surname_only_matches_full_name() {
        assert!(names_match("Gaethje", "Justin Gaethje"));
        assert!(names_match("Justin Gaethje", "Gaethje"));
    }

    #[test]
    fn test_different_fighters_do_not_match() {
        assert!(!names_match("Justin Gaethje", "Max Holloway"));
    }

    #[test]
    fn test_containment_without_shared_surname_is_rejected() {
        // "Jon" is contained in "Jones Smith" textually but the last
        // tokens differ, so the containment is coincidental.
        assert!(!names_match("Jon", "Smith Jon Jones"));
    }

    #[test]
    fn test_distinct_people_sharing_a_surname() {
        // Known limitation: a bare surname merges with any fuller name
        // sharing that final token, even when they are different people.
        assert!(names_match("Silva", "Anderson Silva"));
        assert!(names_match("Silva", "Wanderlei Silva"));
    }
}
