//! Independent signal extractors over the raw request text.
//!
//! Every function here is pure: same text in, same signal out. Extractors that
//! need case folding lower-case the text themselves, so callers can pass the
//! trimmed original.

pub mod content;
pub mod deadline;
pub mod domain;
pub mod pages;
pub mod signals;
pub mod skills;
pub mod tasks;
pub mod topic;
pub mod urgency;

pub use content::content_word_count;
pub use deadline::extract_deadline;
pub use domain::detect_domain;
pub use pages::extract_pages;
pub use signals::{
    Platform, count_diagrams, detect_languages, detect_platform, mentions_handwriting,
};
pub use skills::extract_skills;
pub use tasks::{DetectedTask, detect_tasks};
pub use topic::{DEFAULT_TOPIC, resolve_topic};
pub use urgency::extract_urgency;
