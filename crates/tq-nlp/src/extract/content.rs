use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::{GREETINGS, STOPWORDS};

static RE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Number of words likely to carry meaning: longer than two characters and
/// neither a stopword nor a greeting.
pub fn content_word_count(text: &str) -> usize {
    let lowered = text.to_lowercase();
    RE_WORD
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| w.chars().count() > 2)
        .filter(|w| !STOPWORDS.contains(w) && !GREETINGS.contains(w))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greetings_carry_no_content() {
        assert_eq!(content_word_count("Hi there, good morning!"), 0);
    }

    #[test]
    fn short_words_are_ignored() {
        assert_eq!(content_word_count("go to it ok"), 0);
    }

    #[test]
    fn counts_meaningful_words() {
        assert_eq!(
            content_word_count("Write an essay on volcanic eruptions"),
            4
        );
    }

    #[test]
    fn punctuation_splits_words() {
        assert_eq!(content_word_count("rust,async;tokio"), 3);
    }
}
