use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use anyhow::Context;
use generation_client::{
    load_generation_endpoint_config, GenerationClientTrait, HttpGenerationClient,
};
use serde_json::json;
use summarizer_core::Summarizer;
use tracing::info;

use crate::config::load_summarize_options;
use crate::controllers::summary_controller;

pub struct AppState {
    pub summarizer: Summarizer,
}

const DEFAULT_WORKER_COUNT: usize = 4;

async fn read_root() -> impl Responder {
    HttpResponse::Ok().json(json!({ "Hello": "World" }))
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(read_root))
        .configure(summary_controller::config);
}

pub async fn run(port: u16) -> anyhow::Result<()> {
    info!("Starting summarization web service...");

    let endpoint_config = load_generation_endpoint_config();
    info!("Using generation endpoint: {}", endpoint_config.base_url);

    let client: Arc<dyn GenerationClientTrait> = Arc::new(
        HttpGenerationClient::new(endpoint_config)
            .context("Failed to build generation client")?,
    );
    let summarizer = Summarizer::new(client, load_summarize_options());
    let app_state = web::Data::new(AppState { summarizer });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(("127.0.0.1", port))
    .with_context(|| format!("Failed to bind server on port {port}"))?
    .run();

    info!("Summarization service listening on http://127.0.0.1:{port}");

    server.await.context("Web server error")?;
    Ok(())
}
