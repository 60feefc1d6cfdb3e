//! Request type classification with an irrelevance short-circuit.
//!
//! Two stages against the zero-shot classifier: a binary Irrelevant/Relevant
//! check, then the full candidate label set. Any classifier failure falls
//! back to ordered keyword rules.

use tq_protocol::AssignmentType;

use crate::capability::{LabelScore, ZeroShotClassifier};
use crate::error::{CapabilityError, CapabilityResult};
use crate::lexicon::{SHORT_MESSAGE_WORDS, TYPE_RULES, contains_any};

/// Labels for the binary relevance check.
pub const RELEVANCE_LABELS: [&str; 2] = ["Irrelevant", "Relevant"];

/// Irrelevant score at or above which the request is rejected outright.
pub const DEFAULT_IRRELEVANCE_THRESHOLD: f64 = 0.65;

/// Where a type decision came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSource {
    Classifier,
    Keywords,
}

/// Outcome of classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// Classifier is confident the message carries no request.
    Irrelevant { score: f64 },
    Typed {
        kind: AssignmentType,
        source: TypeSource,
    },
}

/// Classify `text`, preferring the zero-shot classifier when one is configured.
pub async fn classify_request(
    text: &str,
    classifier: Option<&dyn ZeroShotClassifier>,
    threshold: f64,
) -> Classification {
    let Some(classifier) = classifier else {
        return keyword_classification(text);
    };

    match classify_with(classifier, text, threshold).await {
        Ok(classification) => classification,
        Err(e) => {
            tracing::warn!(
                classifier = classifier.name(),
                error = %e,
                "zero-shot classification failed, using keyword rules"
            );
            keyword_classification(text)
        }
    }
}

async fn classify_with(
    classifier: &dyn ZeroShotClassifier,
    text: &str,
    threshold: f64,
) -> CapabilityResult<Classification> {
    let binary = classifier.classify(text, &RELEVANCE_LABELS).await?;
    let irrelevant = binary
        .iter()
        .find(|s| s.label.eq_ignore_ascii_case("irrelevant"))
        .map(|s| s.score)
        .unwrap_or(0.0);

    if irrelevant >= threshold {
        return Ok(Classification::Irrelevant { score: irrelevant });
    }

    let candidates: Vec<&str> = AssignmentType::ALL.iter().map(|t| t.as_str()).collect();
    let ranked = classifier.classify(text, &candidates).await?;
    let top = top_label(&ranked)
        .ok_or_else(|| CapabilityError::InvalidResponse("classifier returned no labels".into()))?;
    let kind = AssignmentType::from_label(&top.label)
        .map_err(|e| CapabilityError::InvalidResponse(e.to_string()))?;

    tracing::debug!(label = %kind, score = top.score, "classifier chose type");
    Ok(Classification::Typed {
        kind,
        source: TypeSource::Classifier,
    })
}

/// Highest score; earliest entry wins ties.
fn top_label(ranked: &[LabelScore]) -> Option<&LabelScore> {
    ranked
        .iter()
        .reduce(|best, s| if s.score > best.score { s } else { best })
}

fn keyword_classification(text: &str) -> Classification {
    Classification::Typed {
        kind: keyword_type(text),
        source: TypeSource::Keywords,
    }
}

/// Ordered keyword rules; short messages with no match are Irrelevant.
pub fn keyword_type(text: &str) -> AssignmentType {
    let lowered = text.to_lowercase();
    if let Some((kind, _)) = TYPE_RULES
        .iter()
        .find(|(_, terms)| contains_any(&lowered, terms))
    {
        return *kind;
    }
    if text.split_whitespace().count() <= SHORT_MESSAGE_WORDS {
        AssignmentType::Irrelevant
    } else {
        AssignmentType::Other
    }
}
