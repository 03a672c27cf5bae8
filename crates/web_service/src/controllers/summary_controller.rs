//! Summarization endpoints.
//!
//! `POST /summary` returns the complete summary in one JSON response;
//! `POST /summary_stream` pushes the orchestrator's fragments over
//! Server-Sent Events, one fragment per `data:` event, ending when the
//! sequence is exhausted (no terminal sentinel).

use std::time::Duration;

use actix_web::{
    web::{self, Data, Json},
    HttpResponse,
};
use actix_web_lab::{sse, util::InfallibleStream};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, error, info};

use crate::dto::{SummaryRequest, SummaryResponse};
use crate::error::AppError;
use crate::server::AppState;

const SSE_CHANNEL_CAPACITY: usize = 32;
const SSE_KEEP_ALIVE: Duration = Duration::from_secs(15);

pub async fn summarize(
    app_state: Data<AppState>,
    req: Json<SummaryRequest>,
) -> Result<HttpResponse, AppError> {
    let request = req.into_inner();
    info!(thread_id = %request.thread_id, "summary requested");

    let content = app_state.summarizer.summarize(&request.message).await?;
    Ok(HttpResponse::Ok().json(SummaryResponse::machine(content)))
}

pub async fn summarize_stream(
    app_state: Data<AppState>,
    req: Json<SummaryRequest>,
) -> Result<sse::Sse<InfallibleStream<ReceiverStream<sse::Event>>>, AppError> {
    let request = req.into_inner();
    info!(thread_id = %request.thread_id, "streaming summary requested");

    // Fails here (before the SSE response is committed) on an invalid
    // output budget; everything later is reported through the stream.
    let mut fragments = app_state.summarizer.summarize_stream(&request.message)?;

    let (tx, rx) = mpsc::channel::<sse::Event>(SSE_CHANNEL_CAPACITY);
    let thread_id = request.thread_id;

    tokio::spawn(async move {
        while let Some(item) = fragments.recv().await {
            match item {
                Ok(fragment) => {
                    if tx
                        .send(sse::Event::Data(sse::Data::new(fragment)))
                        .await
                        .is_err()
                    {
                        debug!(thread_id = %thread_id, "SSE client disconnected");
                        break;
                    }
                }
                Err(e) => {
                    // Headers are already committed; the stream just ends.
                    error!(thread_id = %thread_id, error = %e, "streaming summarization failed");
                    break;
                }
            }
        }
    });

    Ok(sse::Sse::from_infallible_receiver(rx).with_keep_alive(SSE_KEEP_ALIVE))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/summary", web::post().to(summarize))
        .route("/summary_stream", web::post().to(summarize_stream));
}
