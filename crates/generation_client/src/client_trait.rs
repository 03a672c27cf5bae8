use async_trait::async_trait;
use tokio::sync::mpsc::Sender;

use crate::api::models::GenerationRequest;
use crate::error::GenerationError;

/// The external generation capability, abstracted for the orchestrator.
///
/// Implementations must be safe to invoke from a spawned worker task while
/// the coordinating task drains fragments on the other side of a channel.
#[async_trait]
pub trait GenerationClientTrait: Send + Sync {
    /// Run one generation call to completion and return the full output.
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError>;

    /// Run one generation call in incremental mode, sending each text
    /// fragment into `tx` as it is produced. Returns once the generation is
    /// exhausted; a dropped receiver stops the call early without error.
    async fn generate_stream(
        &self,
        request: GenerationRequest,
        tx: Sender<String>,
    ) -> Result<(), GenerationError>;
}
