//! Integration test: serve the router on a local port and call it over HTTP.

mod common;

use phishguard_core::classify::{Classifier, LinearArtifact, LinearClassifier};
use phishguard_core::models::ModelSet;
use phishguard_core::server;
use phishguard_core::url_features::LEXICAL_FEATURE_COUNT;
use phishguard_core::vectorize::{SparseVector, TfidfArtifact, TfidfVectorizer, Vectorizer};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serves `models` on 127.0.0.1. Returns the base URL.
async fn serve_models(models: ModelSet, body_limit_kb: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = server::router(Arc::new(models), body_limit_kb);
    tokio::spawn(server::serve(listener, app, std::future::pending()));
    format!("http://{addr}")
}

/// Starts the server with fixture models and a 64 KiB body limit.
async fn start() -> (tempfile::TempDir, String) {
    let (dir, models) = common::fixture_model_set();
    let base = serve_models(models, 64).await;
    (dir, base)
}

/// Reports `dim` columns but emits rows one column wider.
struct OverwideVectorizer {
    dim: usize,
}

impl Vectorizer for OverwideVectorizer {
    fn dim(&self) -> usize {
        self.dim
    }

    fn transform(&self, _text: &str) -> SparseVector {
        SparseVector::zeros(self.dim + 1)
    }
}

fn linear(width: usize) -> Box<dyn Classifier> {
    let artifact: LinearArtifact = serde_json::from_value(json!({
        "coef": vec![0.1; width],
        "intercept": 0.0,
        "classes": [0, 1]
    }))
    .unwrap();
    Box::new(LinearClassifier::try_from(artifact).unwrap())
}

fn login_vectorizer() -> Box<dyn Vectorizer> {
    let artifact: TfidfArtifact =
        serde_json::from_value(json!({"vocabulary": {"login": 0}})).unwrap();
    Box::new(TfidfVectorizer::try_from(artifact).unwrap())
}

#[tokio::test]
async fn predict_email_endpoint() {
    let (_dir, base) = start().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/predict/email"))
        .json(&json!({"subject": "Verify your account", "body": "password reset"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"email_phishing": true}));

    let resp = client
        .post(format!("{base}/predict/email"))
        .json(&json!({"subject": "", "body": ""}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"email_phishing": false}));
}

#[tokio::test]
async fn predict_url_endpoint() {
    let (_dir, base) = start().await;
    let client = reqwest::Client::new();

    for (u, expected) in [
        ("http://192.168.10.20/login", true),
        ("https://www.example.com/about", false),
        ("???...///", false),
    ] {
        let resp = client
            .post(format!("{base}/predict/url"))
            .json(&json!({ "url": u }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200, "{u}");
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({ "url_phishing": expected }), "{u}");
    }
}

#[tokio::test]
async fn missing_fields_are_rejected_before_the_pipeline() {
    let (_dir, base) = start().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/predict/email"))
        .json(&json!({"subject": "no body"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);

    let resp = client
        .post(format!("{base}/predict/url"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let (_dir, base) = start().await;
    let client = reqwest::Client::new();
    let huge = "a".repeat(128 * 1024);
    let resp = client
        .post(format!("{base}/predict/url"))
        .json(&json!({ "url": huge }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 413);
}

#[tokio::test]
async fn health_reports_loaded_artifacts() {
    let (_dir, base) = start().await;
    let body: Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
    let models = body["models"].as_array().unwrap();
    assert_eq!(models.len(), 4);
    assert_eq!(models[3]["role"], "url_classifier");
    assert_eq!(models[3]["n_features"], 13);
}

#[tokio::test]
async fn cors_allows_extension_origin() {
    let (_dir, base) = start().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/predict/url"))
        .header("origin", "chrome-extension://abcdef")
        .json(&json!({"url": "example.com"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn prediction_error_fails_only_that_request() {
    let models = ModelSet::from_parts(
        Box::new(OverwideVectorizer { dim: 2 }),
        linear(2),
        login_vectorizer(),
        linear(1 + LEXICAL_FEATURE_COUNT),
    )
    .unwrap();
    let base = serve_models(models, 64).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/predict/email"))
        .json(&json!({"subject": "hello", "body": "world"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    let msg = body["error"].as_str().unwrap();
    assert!(msg.contains("3 columns"), "{msg}");

    // The server keeps answering after the failed request.
    let resp = client
        .post(format!("{base}/predict/url"))
        .json(&json!({"url": "example.com/login"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn body_limit_above_two_mib_is_honoured() {
    let (_dir, models) = common::fixture_model_set();
    let base = serve_models(models, 4096).await;
    let client = reqwest::Client::new();
    let big = "a".repeat(3 * 1024 * 1024);
    let resp = client
        .post(format!("{base}/predict/url"))
        .json(&json!({ "url": big }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}
