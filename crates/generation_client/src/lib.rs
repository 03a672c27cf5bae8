//! HTTP client for the external text-generation capability.
//!
//! The summarization orchestrator only sees [`GenerationClientTrait`]; this
//! crate provides the wire types and an implementation that talks to a
//! text-generation inference endpoint over `POST /generate` and
//! `POST /generate_stream` (server-sent events).

pub mod api;
pub mod client;
pub mod client_trait;
pub mod config;
pub mod error;

pub use api::models::{GenerationParameters, GenerationRequest};
pub use client::HttpGenerationClient;
pub use client_trait::GenerationClientTrait;
pub use config::{load_generation_endpoint_config, GenerationEndpointConfig};
pub use error::GenerationError;
