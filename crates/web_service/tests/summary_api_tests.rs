use std::sync::{Arc, Mutex};

use actix_web::{test, web::Data, App};
use async_trait::async_trait;
use generation_client::{GenerationClientTrait, GenerationError, GenerationRequest};
use summarizer_core::{SummarizeOptions, Summarizer};
use tokio::sync::mpsc::Sender;
use web_service::dto::{SummaryRequest, SummaryResponse};
use web_service::server::{app_config, AppState};

struct StubGenerationClient {
    reply: String,
    stream_pieces: Vec<String>,
    calls: Mutex<Vec<GenerationRequest>>,
}

impl StubGenerationClient {
    fn new(reply: &str, pieces: &[&str]) -> Self {
        assert_eq!(pieces.concat(), reply);
        Self {
            reply: reply.to_string(),
            stream_pieces: pieces.iter().map(|p| p.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl GenerationClientTrait for StubGenerationClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(request);
        Ok(self.reply.clone())
    }

    async fn generate_stream(
        &self,
        request: GenerationRequest,
        tx: Sender<String>,
    ) -> Result<(), GenerationError> {
        self.calls.lock().unwrap().push(request);
        for piece in &self.stream_pieces {
            if tx.send(piece.clone()).await.is_err() {
                break;
            }
        }
        Ok(())
    }
}

fn summary_request(message: &str) -> SummaryRequest {
    SummaryRequest {
        thread_id: "thread-1".to_string(),
        message: message.to_string(),
    }
}

fn direct_length_message() -> String {
    // 100 words estimate to 150 tokens: squarely in the single-pass regime.
    vec!["từ"; 100].join(" ")
}

macro_rules! test_app {
    ($client:expr) => {{
        let summarizer = Summarizer::new($client, SummarizeOptions::default());
        test::init_service(
            App::new()
                .app_data(Data::new(AppState { summarizer }))
                .configure(app_config),
        )
        .await
    }};
}

#[actix_web::test]
async fn root_route_says_hello() {
    let client = Arc::new(StubGenerationClient::new("tóm tắt", &["tóm ", "tắt"]));
    let app = test_app!(client);

    let req = test::TestRequest::get().uri("/").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, serde_json::json!({ "Hello": "World" }));
}

#[actix_web::test]
async fn short_message_is_echoed_back_without_generation() {
    let client = Arc::new(StubGenerationClient::new("tóm tắt", &["tóm ", "tắt"]));
    let app = test_app!(client.clone());

    let req = test::TestRequest::post()
        .uri("/summary")
        .set_json(summary_request("Xin chào các bạn"))
        .to_request();
    let body: SummaryResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.role, "machine");
    assert_eq!(body.content, "Xin chào các bạn");
    assert!(client.calls.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn mid_length_message_returns_the_generated_summary() {
    let client = Arc::new(StubGenerationClient::new("tóm tắt", &["tóm ", "tắt"]));
    let app = test_app!(client.clone());

    let req = test::TestRequest::post()
        .uri("/summary")
        .set_json(summary_request(&direct_length_message()))
        .to_request();
    let body: SummaryResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.role, "machine");
    assert_eq!(body.content, "tóm tắt");
    assert_eq!(client.calls.lock().unwrap().len(), 1);
}

#[actix_web::test]
async fn short_message_streams_its_words_as_sse_events() {
    let client = Arc::new(StubGenerationClient::new("tóm tắt", &["tóm ", "tắt"]));
    let app = test_app!(client);

    let req = test::TestRequest::post()
        .uri("/summary_stream")
        .set_json(summary_request("Xin chào"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let content_type = resp.headers().get("content-type").unwrap();
    assert!(content_type
        .to_str()
        .unwrap()
        .starts_with("text/event-stream"));

    let body = test::read_body(resp).await;
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert_eq!(body, "data: Xin \n\ndata: chào \n\n");
}

#[actix_web::test]
async fn mid_length_message_streams_generation_fragments() {
    let client = Arc::new(StubGenerationClient::new("tóm tắt", &["tóm ", "tắt"]));
    let app = test_app!(client.clone());

    let req = test::TestRequest::post()
        .uri("/summary_stream")
        .set_json(summary_request(&direct_length_message()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert_eq!(body, "data: tóm \n\ndata: tắt\n\n");
    assert_eq!(client.calls.lock().unwrap().len(), 1);
}

#[actix_web::test]
async fn malformed_body_is_rejected() {
    let client = Arc::new(StubGenerationClient::new("tóm tắt", &["tóm ", "tắt"]));
    let app = test_app!(client);

    let req = test::TestRequest::post()
        .uri("/summary")
        .set_payload("{\"message\": 1}")
        .insert_header(("content-type", "application/json"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}
