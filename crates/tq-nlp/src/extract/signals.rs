//! Secondary signals feeding the pricing engine.

use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::{
    HANDWRITING_TERMS, IMPLEMENTATION_LANGUAGES, MOBILE_PLATFORM_TERMS, WEB_PLATFORM_TERMS,
    contains_any,
};

static RE_DIAGRAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:diagram|figure|drawing|drawings)\b").unwrap());

/// Target platform, which scales the final price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Mobile,
    Web,
    Unspecified,
}

/// Number of whole-word diagram/figure/drawing mentions.
pub fn count_diagrams(text: &str) -> usize {
    RE_DIAGRAM.find_iter(text).count()
}

pub fn mentions_handwriting(text: &str) -> bool {
    contains_any(&text.to_lowercase(), HANDWRITING_TERMS)
}

/// Implementation-language categories mentioned, one entry per category.
pub fn detect_languages(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    IMPLEMENTATION_LANGUAGES
        .iter()
        .filter(|(_, keys)| contains_any(&lowered, keys))
        .map(|(name, _)| *name)
        .collect()
}

/// Mobile wins over web when both are mentioned.
pub fn detect_platform(text: &str) -> Platform {
    let lowered = text.to_lowercase();
    if contains_any(&lowered, MOBILE_PLATFORM_TERMS) {
        Platform::Mobile
    } else if contains_any(&lowered, WEB_PLATFORM_TERMS) {
        Platform::Web
    } else {
        Platform::Unspecified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagrams_are_whole_words() {
        assert_eq!(
            count_diagrams("two Diagrams? one diagram, a figure and drawings"),
            3
        );
        assert_eq!(count_diagrams("configure the figurehead"), 0);
    }

    #[test]
    fn handwriting_terms() {
        assert!(mentions_handwriting("must be Handwritten"));
        assert!(!mentions_handwriting("typed please"));
    }

    #[test]
    fn one_unit_per_language_category() {
        assert_eq!(detect_languages("react and node"), vec!["JavaScript"]);
        // "java" is a substring of "javascript".
        assert_eq!(detect_languages("javascript"), vec!["Java", "JavaScript"]);
        assert_eq!(detect_languages("python with c++"), vec!["Python", "C++"]);
        assert!(detect_languages("an essay on poetry").is_empty());
    }

    #[test]
    fn mobile_beats_web() {
        assert_eq!(
            detect_platform("flutter app with a web dashboard"),
            Platform::Mobile
        );
        assert_eq!(detect_platform("a React frontend"), Platform::Web);
        assert_eq!(detect_platform("a report"), Platform::Unspecified);
    }
}
