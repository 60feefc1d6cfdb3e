//! Rule-based interpretation and pricing of free-form task requests.
//!
//! The [`Interpreter`] runs a request through classification, extraction,
//! the irrelevance gate and the pricing engine. Model-backed collaborators
//! plug in through the traits in [`capability`]; without them every step
//! falls back to the keyword tables in [`lexicon`].

pub mod assemble;
pub mod capability;
pub mod classify;
pub mod dates;
pub mod error;
pub mod extract;
pub mod gate;
pub mod lexicon;
pub mod mock;
pub mod pipeline;
pub mod pricing;
pub mod refund;

pub use capability::{
    Capabilities, DateMatch, DateParser, LabelScore, ReplySource, SeededReplies,
    ThreadRngReplies, TopicExtractor, ZeroShotClassifier,
};
pub use classify::{Classification, DEFAULT_IRRELEVANCE_THRESHOLD, TypeSource};
pub use dates::RuleDateParser;
pub use error::{
    CapabilityError, CapabilityResult, PipelineError, PipelineResult, ScheduleError,
};
pub use pipeline::Interpreter;
pub use pricing::{Branch, PriceSchedule, PricingEngine};
pub use refund::{RefundModel, quote_refund, settle};
