//! Orchestration core for the Vietnamese text summarization service.
//!
//! The pipeline is deliberately small: estimate how many model tokens a text
//! represents, classify it into a length regime, and either return it
//! unchanged, summarize it in one generation call, or split it into
//! sentence-aligned chunks and summarize chunk by chunk. Both a blocking and
//! an incremental (fragment-streaming) path are provided.

pub mod chunk;
pub mod error;
pub mod estimate;
pub mod summarizer;

pub use chunk::split_into_chunks;
pub use error::SummarizeError;
pub use estimate::{estimate_max_length, estimate_tokens, word_count};
pub use summarizer::{LengthRegime, SummarizeOptions, Summarizer};
