//! `phishguard serve` – load models, then serve the HTTP API until Ctrl-C.

use anyhow::Result;
use phishguard_core::config::PhishguardConfig;
use phishguard_core::server::{self, ServerConfig};
use std::sync::Arc;

use super::load_models;

pub async fn run_serve(cfg: &PhishguardConfig) -> Result<()> {
    // Load before binding; a bad artifact aborts startup.
    let models = Arc::new(load_models(cfg)?);
    tracing::info!(
        email_features = models.email_feature_width(),
        url_features = models.url_feature_width(),
        "models ready"
    );

    let server_cfg = ServerConfig {
        bind: cfg.bind.clone(),
        body_limit_kb: cfg.body_limit_kb,
    };
    println!("phishguard listening on http://{}", server_cfg.bind);
    server::run_server(&server_cfg, models).await?;
    tracing::info!("server stopped");
    Ok(())
}
