//! `phishguard url` / `phishguard email` – one-shot classification.

use anyhow::Result;
use phishguard_core::config::PhishguardConfig;
use phishguard_core::predict::{EmailInput, UrlInput};

use super::load_models;

/// Classify one URL and print `{"url_phishing": bool}`.
pub fn run_url(cfg: &PhishguardConfig, url: &str) -> Result<()> {
    let models = load_models(cfg)?;
    let verdict = models.predict_url(&UrlInput {
        url: url.to_string(),
    })?;
    tracing::info!(url, url_phishing = verdict.url_phishing, "url classified");
    println!("{}", serde_json::to_string(&verdict)?);
    Ok(())
}

/// Classify one email and print `{"email_phishing": bool}`.
pub fn run_email(cfg: &PhishguardConfig, subject: String, body: String) -> Result<()> {
    let models = load_models(cfg)?;
    let verdict = models.predict_email(&EmailInput { subject, body })?;
    tracing::info!(email_phishing = verdict.email_phishing, "email classified");
    println!("{}", serde_json::to_string(&verdict)?);
    Ok(())
}
