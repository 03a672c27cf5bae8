//! Request/response DTOs for the summarization API.

use serde::{Deserialize, Serialize};

/// Body of `POST /summary` and `POST /summary_stream`.
///
/// `thread_id` is opaque client-side grouping metadata; it is logged for
/// correlation but never consulted by the orchestration logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub thread_id: String,
    pub message: String,
}

/// Non-streaming response: the full summary attributed to the machine role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub role: String,
    pub content: String,
}

impl SummaryResponse {
    pub fn machine(content: String) -> Self {
        Self {
            role: "machine".to_string(),
            content,
        }
    }
}
