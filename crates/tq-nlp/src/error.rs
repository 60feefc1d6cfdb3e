//! Engine error types.

use thiserror::Error;

/// Why a pluggable capability could not produce an answer.
///
/// Never surfaced to callers of the pipeline; every variant resolves to the
/// capability's documented fallback.
#[derive(Debug, Clone, Error)]
pub enum CapabilityError {
    #[error("capability unavailable: {0}")]
    Unavailable(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("timed out after {0} ms")]
    Timeout(u64),
}

/// Convenience alias for capability results.
pub type CapabilityResult<T> = Result<T, CapabilityError>;

/// Errors returned by the interpretation pipeline itself.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("empty text")]
    EmptyText,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience alias for pipeline results.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// A price schedule entry that is negative or not finite.
#[derive(Debug, Clone, Error)]
#[error("invalid price schedule: {field} = {value}")]
pub struct ScheduleError {
    pub field: &'static str,
    pub value: f64,
}
