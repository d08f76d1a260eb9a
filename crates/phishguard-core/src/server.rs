//! HTTP surface: `POST /predict/email`, `POST /predict/url`, `GET /health`.
//!
//! Handlers share one immutable [`ModelSet`] through an `Arc`; no request
//! touches another's state. Malformed bodies are rejected by the `Json`
//! extractor before a pipeline runs.

use anyhow::{Context, Result};
use axum::{
    extract::{DefaultBodyLimit, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::error::PredictError;
use crate::models::{ArtifactSummary, ModelSet};
use crate::predict::{EmailInput, EmailVerdict, UrlInput, UrlVerdict};

/// Request-level failure; the process keeps serving.
#[derive(Debug)]
pub enum AppError {
    Predict(PredictError),
}

impl From<PredictError> for AppError {
    fn from(e: PredictError) -> Self {
        AppError::Predict(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::Predict(e) => {
                tracing::error!(error = %e, "prediction failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };
        (status, Json(serde_json::json!({ "error": msg }))).into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    models: Vec<ArtifactSummary>,
}

async fn predict_email_handler(
    State(models): State<Arc<ModelSet>>,
    Json(input): Json<EmailInput>,
) -> Result<Json<EmailVerdict>, AppError> {
    let verdict = models.predict_email(&input)?;
    tracing::debug!(
        subject_len = input.subject.len(),
        body_len = input.body.len(),
        email_phishing = verdict.email_phishing,
        "email prediction"
    );
    Ok(Json(verdict))
}

async fn predict_url_handler(
    State(models): State<Arc<ModelSet>>,
    Json(input): Json<UrlInput>,
) -> Result<Json<UrlVerdict>, AppError> {
    let verdict = models.predict_url(&input)?;
    tracing::debug!(
        url = %input.url,
        url_phishing = verdict.url_phishing,
        "url prediction"
    );
    Ok(Json(verdict))
}

async fn health_handler(State(models): State<Arc<ModelSet>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        models: models.summary().to_vec(),
    })
}

/// Settings for the HTTP daemon.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub body_limit_kb: usize,
}

/// Routes plus CORS (the browser extension calls from its own origin),
/// body limit and request tracing. `body_limit_kb` is the only body cap:
/// axum's built-in 2 MiB extractor limit is switched off.
pub fn router(models: Arc<ModelSet>, body_limit_kb: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/predict/email", post(predict_email_handler))
        .route("/predict/url", post(predict_url_handler))
        .route("/health", get(health_handler))
        .with_state(models)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit_kb * 1024))
        .layer(cors)
}

/// Serves `app` on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("http server")
}

/// Binds `config.bind` and serves until Ctrl-C.
pub async fn run_server(config: &ServerConfig, models: Arc<ModelSet>) -> Result<()> {
    let addr: SocketAddr = config
        .bind
        .parse()
        .with_context(|| format!("invalid bind address {:?}", config.bind))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!("phishguard listening on {}", addr);

    let app = router(models, config.body_limit_kb);
    serve(listener, app, async {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("shutting down gracefully");
    })
    .await
}
