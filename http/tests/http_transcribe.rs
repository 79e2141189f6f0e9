use std::sync::Arc;

use async_trait::async_trait;
use axum::serve;
use relay_application::TranscribeUseCaseImpl;
use relay_domain::{DomainError, RecognitionConfig, RecognitionResult, SpeechRecognitionPort};
use relay_http_server::{build_router, AppState};
use reqwest::{
    multipart::{Form, Part},
    Client, StatusCode,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

enum Scripted {
    Segments(Vec<&'static str>),
    Failure(&'static str),
}

struct ScriptedRecognizer(Scripted);

#[async_trait]
impl SpeechRecognitionPort for ScriptedRecognizer {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn recognize(
        &self,
        _audio: &[u8],
        _config: &RecognitionConfig,
    ) -> Result<Vec<RecognitionResult>, DomainError> {
        match &self.0 {
            Scripted::Segments(segments) => Ok(segments
                .iter()
                .map(|text| RecognitionResult::from_transcripts([*text]))
                .collect()),
            Scripted::Failure(message) => Err(DomainError::recognition(*message)),
        }
    }
}

struct TestServer {
    base_url: String,
    client: Client,
    handle: tokio::task::JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn start_server(script: Scripted, max_upload_bytes: usize) -> TestServer {
    let usecase = Arc::new(TranscribeUseCaseImpl::new(Arc::new(ScriptedRecognizer(
        script,
    ))));
    let app = build_router(AppState::new(usecase, max_upload_bytes));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let handle = tokio::spawn(async move {
        serve(listener, app).await.expect("server run");
    });

    TestServer {
        base_url: format!("http://{}", addr),
        client: Client::new(),
        handle,
    }
}

async fn default_server(script: Scripted) -> TestServer {
    start_server(script, 1024 * 1024).await
}

fn audio_part(file_name: Option<&str>) -> Part {
    let part = Part::bytes(vec![0u8, 1, 0, 2, 0, 3]);
    match file_name {
        Some(name) => part.file_name(name.to_string()),
        None => part,
    }
}

async fn post_form(server: &TestServer, path: &str, form: Form) -> (StatusCode, Value) {
    let response = server
        .client
        .post(format!("{}{}", server.base_url, path))
        .multipart(form)
        .send()
        .await
        .expect("request sent");
    let status = response.status();
    let body = response.json::<Value>().await.expect("json body");
    (status, body)
}

fn valid_form() -> Form {
    Form::new()
        .part("audio_file", audio_part(Some("clip.wav")))
        .text("language", "en-US")
}

#[tokio::test]
async fn missing_audio_file_is_rejected() {
    let server = default_server(Scripted::Segments(vec!["unused"])).await;

    let (status, body) =
        post_form(&server, "/transcribe", Form::new().text("language", "en-US")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No audio file provided" }));
}

#[tokio::test]
async fn empty_filename_is_rejected() {
    let server = default_server(Scripted::Segments(vec!["unused"])).await;

    let (status, body) = post_form(
        &server,
        "/transcribe",
        Form::new()
            .part("audio_file", audio_part(Some("")))
            .text("language", "en-US"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No selected file" }));
}

#[tokio::test]
async fn audio_field_without_filename_is_rejected() {
    let server = default_server(Scripted::Segments(vec!["unused"])).await;

    let (status, body) = post_form(
        &server,
        "/transcribe",
        Form::new()
            .part("audio_file", audio_part(None))
            .text("language", "en-US"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No selected file" }));
}

#[tokio::test]
async fn missing_or_empty_language_is_rejected() {
    let server = default_server(Scripted::Segments(vec!["unused"])).await;

    let missing = Form::new().part("audio_file", audio_part(Some("clip.wav")));
    let (status, body) = post_form(&server, "/transcribe", missing).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Language not specified" }));

    let empty = Form::new()
        .part("audio_file", audio_part(Some("clip.wav")))
        .text("language", "");
    let (status, body) = post_form(&server, "/transcribe", empty).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Language not specified" }));
}

#[tokio::test]
async fn successful_transcription_concatenates_segments() {
    let server = default_server(Scripted::Segments(vec!["hello ", "world"])).await;

    let (status, body) = post_form(&server, "/transcribe", valid_form()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "transcription": "hello world" }));
}

#[tokio::test]
async fn root_path_is_an_alias() {
    let server = default_server(Scripted::Segments(vec!["hello ", "world"])).await;

    let (status, body) = post_form(&server, "/", valid_form()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "transcription": "hello world" }));
}

#[tokio::test]
async fn plain_get_on_root_reports_missing_file() {
    let server = default_server(Scripted::Segments(vec!["unused"])).await;

    let response = server
        .client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .expect("request sent");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body, json!({ "error": "No audio file provided" }));
}

#[tokio::test]
async fn service_failure_passes_message_through() {
    let server = default_server(Scripted::Failure("quota exceeded")).await;

    let (status, body) = post_form(&server, "/transcribe", valid_form()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "quota exceeded" }));
}

#[tokio::test]
async fn zero_segments_is_reported_as_no_transcription() {
    let server = default_server(Scripted::Segments(Vec::new())).await;

    let (status, body) = post_form(&server, "/transcribe", valid_form()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "No transcription available" }));
}

#[tokio::test]
async fn identical_requests_get_identical_responses() {
    let server = default_server(Scripted::Segments(vec!["same ", "answer"])).await;

    let first = post_form(&server, "/transcribe", valid_form()).await;
    let second = post_form(&server, "/transcribe", valid_form()).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let server = start_server(Scripted::Segments(vec!["unused"]), 64).await;

    let form = Form::new()
        .part(
            "audio_file",
            Part::bytes(vec![0u8; 4096]).file_name("big.wav"),
        )
        .text("language", "en-US");
    let response = server
        .client
        .post(format!("{}/transcribe", server.base_url))
        .multipart(form)
        .send()
        .await
        .expect("request sent");

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn health_check_reports_ok() {
    let server = default_server(Scripted::Segments(vec!["unused"])).await;

    let response = server
        .client
        .get(format!("{}/health", server.base_url))
        .send()
        .await
        .expect("request sent");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body, json!({ "status": "ok" }));
}
