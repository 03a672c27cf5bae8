//! The summarization orchestrator.
//!
//! A single request flows through one of three length regimes: short texts
//! are passed through unchanged, mid-length texts get one generation call,
//! and long texts are split into sentence-aligned chunks that are summarized
//! strictly one after another. The streaming path runs each generation call
//! on a background worker and forwards fragments through a channel, joining
//! the worker before the next chunk starts.

use std::sync::Arc;

use generation_client::{GenerationClientTrait, GenerationParameters, GenerationRequest};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::chunk::split_into_chunks;
use crate::error::SummarizeError;
use crate::estimate::{estimate_max_length, estimate_tokens};

/// Texts estimated below this many tokens are returned unchanged.
pub const SHORT_TEXT_LIMIT: usize = 100;
/// Texts estimated above this many tokens are split into chunks.
pub const DIRECT_TEXT_LIMIT: usize = 1024;
/// Input token budget handed to the chunk planner.
pub const CHUNK_INPUT_BUDGET: usize = 1024;

const CHUNK_MAX_NEW_TOKENS: u32 = 256;
const FRAGMENT_CHANNEL_CAPACITY: usize = 32;

/// Classification of a document by its estimated token length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRegime {
    Passthrough,
    Direct,
    Chunked,
}

impl LengthRegime {
    pub fn classify(estimated_tokens: usize) -> Self {
        if estimated_tokens < SHORT_TEXT_LIMIT {
            LengthRegime::Passthrough
        } else if estimated_tokens <= DIRECT_TEXT_LIMIT {
            LengthRegime::Direct
        } else {
            LengthRegime::Chunked
        }
    }
}

/// Tunables for the single-pass (direct) regime.
#[derive(Debug, Clone, Copy)]
pub struct SummarizeOptions {
    /// Ceiling on the generated summary length, in tokens.
    pub max_cap: usize,
    /// Target output/input compression ratio.
    pub ratio: f64,
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self {
            max_cap: 512,
            ratio: 0.7,
        }
    }
}

enum StreamPlan {
    Passthrough(Vec<String>),
    Direct(GenerationRequest),
    Chunked(Vec<GenerationRequest>),
}

#[derive(Clone)]
pub struct Summarizer {
    client: Arc<dyn GenerationClientTrait>,
    options: SummarizeOptions,
}

impl Summarizer {
    pub fn new(client: Arc<dyn GenerationClientTrait>, options: SummarizeOptions) -> Self {
        Self { client, options }
    }

    fn direct_request(&self, text: &str) -> Result<GenerationRequest, SummarizeError> {
        let max_length = estimate_max_length(text, self.options.max_cap, self.options.ratio);
        if max_length == 0 {
            error!("zero output budget computed for a text in the direct regime");
            return Err(SummarizeError::InvalidMaxLength);
        }
        Ok(GenerationRequest {
            inputs: text.to_string(),
            parameters: GenerationParameters {
                // An over-sized configured cap must not wrap the wire type.
                max_new_tokens: u32::try_from(max_length).unwrap_or(u32::MAX),
                temperature: 0.3,
                repetition_penalty: 1.2,
                top_p: 0.9,
                do_sample: true,
            },
        })
    }

    fn chunk_request(chunk: String) -> GenerationRequest {
        GenerationRequest {
            inputs: chunk,
            parameters: GenerationParameters {
                max_new_tokens: CHUNK_MAX_NEW_TOKENS,
                temperature: 0.5,
                repetition_penalty: 1.2,
                top_p: 0.9,
                do_sample: true,
            },
        }
    }

    /// Summarize `text` and return the complete result.
    ///
    /// Any generation failure aborts the whole request; a failure in chunk K
    /// of a chunked run discards the summaries of chunks 1..K rather than
    /// returning a partial result.
    pub async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        match LengthRegime::classify(estimate_tokens(text)) {
            LengthRegime::Passthrough => {
                info!("text below summarization threshold, returning it unchanged");
                Ok(text.to_string())
            }
            LengthRegime::Direct => {
                info!("text within single-pass range, summarizing directly");
                let request = self.direct_request(text)?;
                Ok(self.client.generate(request).await?)
            }
            LengthRegime::Chunked => {
                info!("text too long for a single pass, splitting into chunks");
                let chunks = split_into_chunks(text, CHUNK_INPUT_BUDGET);
                let total = chunks.len();
                let mut summaries = Vec::with_capacity(total);
                for (i, chunk) in chunks.into_iter().enumerate() {
                    info!("summarizing chunk {}/{}", i + 1, total);
                    summaries.push(self.client.generate(Self::chunk_request(chunk)).await?);
                }
                Ok(summaries.join(" "))
            }
        }
    }

    /// Summarize `text` incrementally, returning a receiver of fragments.
    ///
    /// Fragments arrive in order; chunked runs emit exactly one `" "`
    /// separator fragment after each non-final chunk. A failure is delivered
    /// as the final `Err` item, after which the channel closes. Errors that
    /// are detectable before any fragment is produced (an invalid output
    /// budget) are returned eagerly instead.
    pub fn summarize_stream(
        &self,
        text: &str,
    ) -> Result<mpsc::Receiver<Result<String, SummarizeError>>, SummarizeError> {
        let plan = self.plan_stream(text)?;
        let (tx, rx) = mpsc::channel(FRAGMENT_CHANNEL_CAPACITY);
        let summarizer = self.clone();
        tokio::spawn(async move {
            if let Err(e) = summarizer.run_stream(plan, &tx).await {
                error!("streaming summarization failed: {e}");
                let _ = tx.send(Err(e)).await;
            }
        });
        Ok(rx)
    }

    fn plan_stream(&self, text: &str) -> Result<StreamPlan, SummarizeError> {
        match LengthRegime::classify(estimate_tokens(text)) {
            LengthRegime::Passthrough => {
                info!("text below summarization threshold, streaming it word by word");
                Ok(StreamPlan::Passthrough(
                    text.split_whitespace().map(str::to_string).collect(),
                ))
            }
            LengthRegime::Direct => {
                info!("text within single-pass range, streaming a direct summary");
                Ok(StreamPlan::Direct(self.direct_request(text)?))
            }
            LengthRegime::Chunked => {
                info!("text too long for a single pass, streaming chunk by chunk");
                let chunks = split_into_chunks(text, CHUNK_INPUT_BUDGET);
                Ok(StreamPlan::Chunked(
                    chunks.into_iter().map(Self::chunk_request).collect(),
                ))
            }
        }
    }

    async fn run_stream(
        &self,
        plan: StreamPlan,
        tx: &mpsc::Sender<Result<String, SummarizeError>>,
    ) -> Result<(), SummarizeError> {
        match plan {
            StreamPlan::Passthrough(words) => {
                for word in words {
                    if tx.send(Ok(format!("{word} "))).await.is_err() {
                        return Ok(());
                    }
                }
                Ok(())
            }
            StreamPlan::Direct(request) => {
                self.stream_one_generation(request, tx).await.map(|_| ())
            }
            StreamPlan::Chunked(requests) => {
                let total = requests.len();
                for (i, request) in requests.into_iter().enumerate() {
                    info!("streaming chunk {}/{}", i + 1, total);
                    let delivered = self.stream_one_generation(request, tx).await?;
                    if !delivered {
                        info!("consumer gone, skipping remaining chunks");
                        return Ok(());
                    }
                    if i + 1 < total && tx.send(Ok(" ".to_string())).await.is_err() {
                        return Ok(());
                    }
                }
                Ok(())
            }
        }
    }

    /// Run one generation call on a background worker, forwarding its
    /// fragments to `tx` in production order.
    ///
    /// The worker is always joined before this returns, even when the
    /// consumer has dropped the receiver, so a chunk is never left with a
    /// generation task still running behind it. Returns `false` when the
    /// consumer is gone.
    async fn stream_one_generation(
        &self,
        request: GenerationRequest,
        tx: &mpsc::Sender<Result<String, SummarizeError>>,
    ) -> Result<bool, SummarizeError> {
        let (frag_tx, mut frag_rx) = mpsc::channel::<String>(FRAGMENT_CHANNEL_CAPACITY);
        let client = Arc::clone(&self.client);
        let worker = tokio::spawn(async move { client.generate_stream(request, frag_tx).await });

        let mut consumer_connected = true;
        while let Some(fragment) = frag_rx.recv().await {
            if consumer_connected && tx.send(Ok(fragment)).await.is_err() {
                warn!("consumer disconnected mid-stream, draining the generation worker");
                consumer_connected = false;
            }
        }

        match worker.await {
            Ok(Ok(())) => Ok(consumer_connected),
            Ok(Err(e)) => Err(SummarizeError::Generation(e)),
            Err(e) => Err(SummarizeError::WorkerJoin(e.to_string())),
        }
    }
}
