use async_trait::async_trait;
use eventsource_stream::Eventsource;
use futures_util::StreamExt;
use reqwest::{Client, Response};
use tokio::sync::mpsc::Sender;
use tracing::{debug, error};

use crate::api::models::{GenerationRequest, GenerationResponse, StreamChunk};
use crate::client_trait::GenerationClientTrait;
use crate::config::GenerationEndpointConfig;
use crate::error::GenerationError;

/// Generation client backed by an HTTP inference server.
#[derive(Debug, Clone)]
pub struct HttpGenerationClient {
    http: Client,
    config: GenerationEndpointConfig,
}

impl HttpGenerationClient {
    pub fn new(config: GenerationEndpointConfig) -> Result<Self, GenerationError> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { http, config })
    }

    async fn post(&self, route: &str, request: &GenerationRequest) -> Result<Response, GenerationError> {
        let url = format!("{}{route}", self.config.base_url);
        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("generation endpoint returned {status}: {message}");
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl GenerationClientTrait for HttpGenerationClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        let response = self.post("/generate", &request).await?;
        let body = response.text().await?;
        let parsed: GenerationResponse = serde_json::from_str(&body)?;
        Ok(parsed.generated_text)
    }

    async fn generate_stream(
        &self,
        request: GenerationRequest,
        tx: Sender<String>,
    ) -> Result<(), GenerationError> {
        let response = self.post("/generate_stream", &request).await?;

        let mut event_stream = response.bytes_stream().eventsource();
        while let Some(event_result) = event_stream.next().await {
            match event_result {
                Ok(event) => match serde_json::from_str::<StreamChunk>(&event.data) {
                    Ok(chunk) => {
                        if chunk.token.text.is_empty() {
                            continue;
                        }
                        if tx.send(chunk.token.text).await.is_err() {
                            debug!("fragment receiver dropped, stopping generation stream early");
                            break;
                        }
                    }
                    Err(e) => {
                        error!("failed to parse stream event: {e}, data: {}", event.data);
                    }
                },
                Err(e) => {
                    error!("error in generation SSE stream: {e}");
                    return Err(GenerationError::Stream(e.to_string()));
                }
            }
        }
        Ok(())
    }
}
