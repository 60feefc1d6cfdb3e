//! Post-extraction irrelevance heuristic.

use tq_protocol::ParseResponse;

use crate::capability::ReplySource;
use crate::lexicon::IRRELEVANT_REPLIES;

/// Content-word count at or below which a signal-free message is rejected.
pub const MAX_CONTENT_WORDS: usize = 2;

/// Extracted signals the heuristic looks at.
#[derive(Debug, Clone, Copy, Default)]
pub struct Signals {
    pub content_words: usize,
    pub skills: usize,
    pub tasks: usize,
    pub pages: Option<u32>,
    pub has_deadline: bool,
}

impl Signals {
    /// Few content words and nothing actionable extracted.
    pub fn looks_irrelevant(&self) -> bool {
        self.content_words <= MAX_CONTENT_WORDS
            && self.skills == 0
            && self.tasks == 0
            && self.pages.unwrap_or(0) == 0
            && !self.has_deadline
    }
}

/// The fixed zero-price response with a reply drawn from the pool.
pub fn irrelevant_response(raw_text: &str, replies: &dyn ReplySource) -> ParseResponse {
    let reply = replies.pick(IRRELEVANT_REPLIES);
    ParseResponse::irrelevant(raw_text, reply)
}
