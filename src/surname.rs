/// Reduce a cleaned name to its comparison key: the last
/// whitespace-delimited token, lowercased. A string with no tokens maps
/// to itself lowercased. Used only for grouping, never displayed.
pub fn surname_key(name: &str) -> String {
    match name.split_whitespace().last() {
        Some(last) => last.to_lowercase(),
        None => name.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(surname_key("Justin Gaethje"), "gaethje");
        assert_eq!(surname_key("Max Holloway"), "holloway");
    }

    #[test]
    fn test_surname_only() {
        assert_eq!(surname_key("Gaethje"), "gaethje");
    }

    #[test]
    fn test_hyphenated_surname_is_one_token() {
        assert_eq!(surname_key("Jan Blachowicz-Kowalski"), "blachowicz-kowalski");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(surname_key(""), "");
        assert_eq!(surname_key("   "), "   ");
    }
}
