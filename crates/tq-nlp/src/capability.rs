//! Pluggable collaborators consumed by the pipeline.
//!
//! The pipeline never constructs these itself. A process builds one
//! `Capabilities` bundle at startup and shares it by reference across
//! requests, so implementations must be `Send + Sync` and must not keep
//! per-request state.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::dates::RuleDateParser;
use crate::error::CapabilityResult;

/// One scored label from a zero-shot classification.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

impl LabelScore {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Zero-shot text classifier. Returns labels ordered by descending score.
#[async_trait]
pub trait ZeroShotClassifier: Send + Sync {
    async fn classify(&self, text: &str, labels: &[&str]) -> CapabilityResult<Vec<LabelScore>>;

    /// Name of this backend (for logging).
    fn name(&self) -> &str;
}

/// Noun-phrase / entity extractor producing short candidate topics.
#[async_trait]
pub trait TopicExtractor: Send + Sync {
    async fn extract_topics(&self, text: &str) -> CapabilityResult<Vec<String>>;

    fn name(&self) -> &str;
}

/// A date phrase found inside a larger text.
#[derive(Debug, Clone, PartialEq)]
pub struct DateMatch {
    pub phrase: String,
    pub at: NaiveDateTime,
}

/// Date recognition biased toward future dates.
pub trait DateParser: Send + Sync {
    /// Date phrases inside `text`, in order of appearance.
    fn find_dates(&self, text: &str) -> CapabilityResult<Vec<DateMatch>>;

    /// Interpret the whole of `text` as a single date.
    fn parse_whole(&self, text: &str) -> CapabilityResult<Option<NaiveDateTime>>;
}

/// Picks the reply attached to an irrelevant response.
pub trait ReplySource: Send + Sync {
    fn pick(&self, pool: &[&'static str]) -> &'static str;
}

/// Independent draw from the thread-local generator on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngReplies;

impl ReplySource for ThreadRngReplies {
    fn pick(&self, pool: &[&'static str]) -> &'static str {
        pool.choose(&mut rand::thread_rng()).copied().unwrap_or("")
    }
}

/// Reproducible draws from a seeded generator.
pub struct SeededReplies {
    rng: Mutex<StdRng>,
}

impl SeededReplies {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ReplySource for SeededReplies {
    fn pick(&self, pool: &[&'static str]) -> &'static str {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        pool.choose(&mut *rng).copied().unwrap_or("")
    }
}

/// The full set of collaborators handed to the pipeline.
#[derive(Clone)]
pub struct Capabilities {
    /// Absent means "always use keyword rules".
    pub classifier: Option<Arc<dyn ZeroShotClassifier>>,
    /// Absent means "always use the regex fallback".
    pub topics: Option<Arc<dyn TopicExtractor>>,
    pub dates: Arc<dyn DateParser>,
    pub replies: Arc<dyn ReplySource>,
}

impl Capabilities {
    /// Rule-only setup: no classifier, no topic extractor, wall-clock dates.
    pub fn rules_only() -> Self {
        Self {
            classifier: None,
            topics: None,
            dates: Arc::new(RuleDateParser::new()),
            replies: Arc::new(ThreadRngReplies),
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn ZeroShotClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn with_topics(mut self, topics: Arc<dyn TopicExtractor>) -> Self {
        self.topics = Some(topics);
        self
    }

    pub fn with_dates(mut self, dates: Arc<dyn DateParser>) -> Self {
        self.dates = dates;
        self
    }

    pub fn with_replies(mut self, replies: Arc<dyn ReplySource>) -> Self {
        self.replies = replies;
        self
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::rules_only()
    }
}
