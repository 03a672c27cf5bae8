//! Wire types for the text-generation inference endpoint.

use serde::{Deserialize, Serialize};

/// Sampling parameters forwarded to the generation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub repetition_penalty: f32,
    pub top_p: f32,
    pub do_sample: bool,
}

/// One generation call: the input text plus its sampling parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub inputs: String,
    pub parameters: GenerationParameters,
}

/// Body of a non-streaming `/generate` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub generated_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamToken {
    pub text: String,
}

/// One SSE event from `/generate_stream`. The endpoint's final event also
/// carries the aggregated text, but only the per-token fragment is consumed
/// here; other fields are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamChunk {
    pub token: StreamToken,
}
