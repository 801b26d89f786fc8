use scraper::Html;

/// Flatten an HTML document to plain text: every text node in document
/// order, joined by a single space. No structural selection happens here;
/// downstream extraction treats the page as flat text.
pub fn flatten_html(html: &str) -> String {
    let document = Html::parse_document(html);
    document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elements_are_space_separated() {
        let html = "<html><body><div>Justin Gaethje</div><span>vs</span>\
                    <div>Max Holloway</div></body></html>";
        let text = flatten_html(html);
        assert!(text.contains("Justin Gaethje"));
        assert!(text.contains(" vs "));
        assert!(text.contains("Max Holloway"));
    }

    #[test]
    fn test_nested_markup_is_dropped() {
        let html = "<p>Alex <b>Pereira</b> vs Magomed <i>Ankalaev</i></p>";
        let text = flatten_html(html);
        assert!(!text.contains('<'));
        assert!(text.contains("Pereira"));
        assert!(text.contains("Ankalaev"));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(flatten_html("").trim(), "");
    }
}
