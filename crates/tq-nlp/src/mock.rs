//! In-memory capability implementations for tests and local runs.
//!
//! None of these touch a model, the network or the wall clock.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tq_protocol::RefundRequest;

use crate::capability::{
    DateMatch, DateParser, LabelScore, ReplySource, TopicExtractor, ZeroShotClassifier,
};
use crate::classify::RELEVANCE_LABELS;
use crate::error::{CapabilityError, CapabilityResult};
use crate::refund::RefundModel;

/// Classifier with a fixed irrelevance score and a fixed winning label.
///
/// The binary relevance call answers with `irrelevant_score`; any other call
/// ranks `top_label` first and the remaining candidates after it.
pub struct MockClassifier {
    irrelevant_score: f64,
    top_label: String,
    fail_full_pass: bool,
    calls: AtomicUsize,
}

impl MockClassifier {
    pub fn new(irrelevant_score: f64, top_label: impl Into<String>) -> Self {
        Self {
            irrelevant_score,
            top_label: top_label.into(),
            fail_full_pass: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Answer the binary call, then fail on the full label set.
    pub fn failing_full_pass(mut self) -> Self {
        self.fail_full_pass = true;
        self
    }

    /// Number of `classify` calls seen so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ZeroShotClassifier for MockClassifier {
    async fn classify(&self, _text: &str, labels: &[&str]) -> CapabilityResult<Vec<LabelScore>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if labels == RELEVANCE_LABELS.as_slice() {
            let irrelevant = LabelScore::new("Irrelevant", self.irrelevant_score);
            let relevant = LabelScore::new("Relevant", 1.0 - self.irrelevant_score);
            return Ok(if self.irrelevant_score >= 0.5 {
                vec![irrelevant, relevant]
            } else {
                vec![relevant, irrelevant]
            });
        }

        if self.fail_full_pass {
            return Err(CapabilityError::Unavailable("mock full pass".into()));
        }

        let mut ranked = vec![LabelScore::new(self.top_label.clone(), 0.8)];
        let rest = labels.iter().filter(|l| **l != self.top_label);
        ranked.extend(rest.map(|l| LabelScore::new(*l, 0.01)));
        Ok(ranked)
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Classifier that always fails.
pub struct FailingClassifier;

#[async_trait]
impl ZeroShotClassifier for FailingClassifier {
    async fn classify(&self, _text: &str, _labels: &[&str]) -> CapabilityResult<Vec<LabelScore>> {
        Err(CapabilityError::Unavailable("classifier offline".into()))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Topic extractor with a canned answer.
pub struct MockTopicExtractor {
    result: CapabilityResult<Vec<String>>,
}

impl MockTopicExtractor {
    pub fn returning(phrases: Vec<&str>) -> Self {
        Self {
            result: Ok(phrases.into_iter().map(String::from).collect()),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(CapabilityError::Unavailable("no topic model".into())),
        }
    }
}

#[async_trait]
impl TopicExtractor for MockTopicExtractor {
    async fn extract_topics(&self, _text: &str) -> CapabilityResult<Vec<String>> {
        self.result.clone()
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Date parser with canned answers, independent of the input text.
pub struct FixedDateParser {
    found: CapabilityResult<Vec<DateMatch>>,
    whole: Option<NaiveDateTime>,
}

impl FixedDateParser {
    pub fn found(matches: Vec<(&str, NaiveDateTime)>) -> Self {
        Self {
            found: Ok(matches
                .into_iter()
                .map(|(phrase, at)| DateMatch {
                    phrase: phrase.to_string(),
                    at,
                })
                .collect()),
            whole: None,
        }
    }

    /// No search hits; the whole text parses as `at`.
    pub fn whole(at: NaiveDateTime) -> Self {
        Self {
            found: Ok(Vec::new()),
            whole: Some(at),
        }
    }

    pub fn failing() -> Self {
        Self {
            found: Err(CapabilityError::Unavailable("date parser offline".into())),
            whole: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            found: Ok(Vec::new()),
            whole: None,
        }
    }
}

impl DateParser for FixedDateParser {
    fn find_dates(&self, _text: &str) -> CapabilityResult<Vec<DateMatch>> {
        self.found.clone()
    }

    fn parse_whole(&self, _text: &str) -> CapabilityResult<Option<NaiveDateTime>> {
        match &self.found {
            Ok(_) => Ok(self.whole),
            Err(e) => Err(e.clone()),
        }
    }
}

/// Always picks the reply at a fixed index (clamped to the pool).
#[derive(Debug, Clone, Copy)]
pub struct FixedReply {
    index: usize,
}

impl FixedReply {
    pub fn at(index: usize) -> Self {
        Self { index }
    }

    pub fn first() -> Self {
        Self::at(0)
    }
}

impl ReplySource for FixedReply {
    fn pick(&self, pool: &[&'static str]) -> &'static str {
        match pool.len() {
            0 => "",
            n => pool[self.index.min(n - 1)],
        }
    }
}

/// Refund model with a canned prediction.
pub struct MockRefundModel {
    result: CapabilityResult<f64>,
    calls: AtomicUsize,
}

impl MockRefundModel {
    pub fn returning(percent: f64) -> Self {
        Self {
            result: Ok(percent),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(CapabilityError::InvalidResponse("model exploded".into())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RefundModel for MockRefundModel {
    async fn predict_percent(&self, _request: &RefundRequest) -> CapabilityResult<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn name(&self) -> &str {
        "mock"
    }
}
