use std::sync::LazyLock;

use regex::Regex;

static RE_PAGES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{1,3})\s*-?\s*(?:page|pages)\b").unwrap());

/// Page count from the first "<n> page(s)" mention ("4 page", "4-page", "4pages").
pub fn extract_pages(text: &str) -> Option<u32> {
    RE_PAGES
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_page_count() {
        assert_eq!(extract_pages("Please write a 6-page report"), Some(6));
    }

    #[test]
    fn plural_with_space() {
        assert_eq!(extract_pages("a 10 pages essay"), Some(10));
    }

    #[test]
    fn no_space_and_mixed_case() {
        assert_eq!(extract_pages("need 4PAGES asap"), Some(4));
    }

    #[test]
    fn only_first_mention_counts() {
        assert_eq!(
            extract_pages("3 pages of text and 12 pages of appendix"),
            Some(3)
        );
    }

    #[test]
    fn no_page_mention() {
        assert_eq!(extract_pages("write an essay about rivers"), None);
        assert_eq!(extract_pages("see the homepage"), None);
    }

    #[test]
    fn word_must_end_after_page() {
        assert_eq!(extract_pages("5 pageants"), None);
    }
}
