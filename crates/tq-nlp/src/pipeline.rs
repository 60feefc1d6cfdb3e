//! End-to-end interpretation of a single request.

use tq_protocol::{AssignmentType, ParseRequest, ParseResponse};

use crate::assemble::{Interpretation, assemble};
use crate::capability::Capabilities;
use crate::classify::{Classification, DEFAULT_IRRELEVANCE_THRESHOLD, classify_request};
use crate::error::{PipelineError, PipelineResult};
use crate::extract::{
    content_word_count, count_diagrams, detect_domain, detect_languages, detect_platform,
    detect_tasks, extract_deadline, extract_pages, extract_skills, extract_urgency,
    mentions_handwriting, resolve_topic,
};
use crate::gate::{Signals, irrelevant_response};
use crate::pricing::{PriceSchedule, PricingEngine, PricingInput, PricingOutcome};

/// Turns free-form request text into a priced [`ParseResponse`].
///
/// Holds no per-request state; one instance serves every request.
#[derive(Clone)]
pub struct Interpreter {
    capabilities: Capabilities,
    pricing: PricingEngine,
    irrelevance_threshold: f64,
}

impl Interpreter {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            pricing: PricingEngine::default(),
            irrelevance_threshold: DEFAULT_IRRELEVANCE_THRESHOLD,
        }
    }

    pub fn with_schedule(mut self, schedule: PriceSchedule) -> Self {
        self.pricing = PricingEngine::new(schedule);
        self
    }

    pub fn with_irrelevance_threshold(mut self, threshold: f64) -> Self {
        self.irrelevance_threshold = threshold;
        self
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub async fn interpret(&self, request: &ParseRequest) -> PipelineResult<ParseResponse> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(PipelineError::EmptyText);
        }
        let caps = &self.capabilities;

        let classification = classify_request(
            text,
            caps.classifier.as_deref(),
            self.irrelevance_threshold,
        )
        .await;
        let kind = match classification {
            Classification::Irrelevant { score } => {
                tracing::debug!(score, "classifier rejected request");
                return Ok(irrelevant_response(text, caps.replies.as_ref()));
            }
            Classification::Typed { kind, source } => {
                tracing::debug!(kind = %kind, source = ?source, "request typed");
                kind
            }
        };

        let pages = extract_pages(text);
        let deadline = extract_deadline(text, caps.dates.as_ref());
        let urgency = extract_urgency(text);
        let skills = extract_skills(text);
        let topic = resolve_topic(text, caps.topics.as_deref()).await;
        let domain = detect_domain(text);
        let tasks = detect_tasks(text);
        let content_words = content_word_count(text);

        let signals = Signals {
            content_words,
            skills: skills.len(),
            tasks: tasks.len(),
            pages,
            has_deadline: deadline.is_some(),
        };
        if signals.looks_irrelevant() {
            tracing::debug!(content_words, "no actionable signal in request");
            return Ok(irrelevant_response(text, caps.replies.as_ref()));
        }

        // Irrelevant is reserved for the fixed zero-price shape.
        let kind = if kind == AssignmentType::Irrelevant {
            AssignmentType::Other
        } else {
            kind
        };

        let input = PricingInput {
            text,
            kind,
            pages,
            urgency,
            skills: &skills,
            tasks: &tasks,
            diagrams: count_diagrams(text),
            handwriting: mentions_handwriting(text),
            languages: detect_languages(text).len(),
            platform: detect_platform(text),
            content_words,
            has_deadline: deadline.is_some(),
        };
        let quote = match self.pricing.quote(&input)? {
            PricingOutcome::Quoted(quote) => quote,
            PricingOutcome::Irrelevant => {
                return Ok(irrelevant_response(text, caps.replies.as_ref()));
            }
        };

        let interpretation = Interpretation {
            kind,
            topic,
            domain,
            pages,
            deadline,
            urgency,
            skills,
        };
        Ok(assemble(text, interpretation, &quote))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Capabilities::rules_only())
    }
}
