use generation_client::GenerationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The estimated output budget for a summarizable text was zero. Only
    /// zero-word input can produce this, and zero-word input is routed to
    /// the passthrough path upstream, so reaching it is an invariant
    /// violation rather than an expected failure.
    #[error("estimated max generation length is zero for a summarizable text")]
    InvalidMaxLength,

    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("generation worker task failed: {0}")]
    WorkerJoin(String),
}
