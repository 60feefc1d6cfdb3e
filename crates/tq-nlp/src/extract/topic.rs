use std::sync::LazyLock;

use regex::Regex;

use crate::capability::TopicExtractor;

/// Topic used when neither the extractor nor the regex rules find one.
pub const DEFAULT_TOPIC: &str = "General";

const MAX_TOPIC_CHARS: usize = 60;
const MAX_TOPIC_WORDS: usize = 6;

static RE_ABOUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)about\s+([A-Za-z0-9 \-]+)").unwrap());

static RE_ON_OR_ABOUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:on|about)\s+([A-Za-z0-9 \-,]+)").unwrap());

/// Short topic phrase: extractor candidate, then "about X", then "on X",
/// then `DEFAULT_TOPIC`.
pub async fn resolve_topic(text: &str, extractor: Option<&dyn TopicExtractor>) -> String {
    if let Some(extractor) = extractor {
        match extractor.extract_topics(text).await {
            Ok(candidates) => {
                if let Some(topic) = candidates.into_iter().find(|c| is_short_phrase(c)) {
                    return topic.trim().to_string();
                }
            }
            Err(e) => {
                tracing::warn!(extractor = extractor.name(), error = %e, "topic extraction failed");
            }
        }
    }
    topic_from_patterns(text).unwrap_or_else(|| DEFAULT_TOPIC.to_string())
}

/// Regex-only topic: "about X" first, then "on X" / "about X" with commas.
pub fn topic_from_patterns(text: &str) -> Option<String> {
    [&*RE_ABOUT, &*RE_ON_OR_ABOUT]
        .into_iter()
        .filter_map(|re| re.captures(text))
        .map(|caps| caps[1].trim().to_string())
        .find(|topic| !topic.is_empty())
}

fn is_short_phrase(candidate: &str) -> bool {
    let candidate = candidate.trim();
    !candidate.is_empty()
        && candidate.chars().count() < MAX_TOPIC_CHARS
        && candidate.split_whitespace().count() <= MAX_TOPIC_WORDS
}
