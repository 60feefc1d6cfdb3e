use tq_protocol::Urgency;

use crate::lexicon::URGENCY_TERMS;

/// Urgency of the first matching term, High terms first, then Medium, then Low.
/// Defaults to Medium when nothing matches.
pub fn extract_urgency(text: &str) -> Urgency {
    let lowered = text.to_lowercase();
    URGENCY_TERMS
        .iter()
        .find(|(_, terms)| terms.iter().any(|t| lowered.contains(t)))
        .map(|(level, _)| *level)
        .unwrap_or_default()
}
