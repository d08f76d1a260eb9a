use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::ModelPaths;

/// File names of the four artifacts inside `models_dir` (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelFiles {
    pub email_vectorizer: String,
    pub email_classifier: String,
    pub url_vectorizer: String,
    pub url_classifier: String,
}

impl Default for ModelFiles {
    fn default() -> Self {
        Self {
            email_vectorizer: "email_tfidf.json".to_string(),
            email_classifier: "email_model.json".to_string(),
            url_vectorizer: "url_tfidf.json".to_string(),
            url_classifier: "url_model.json".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/phishguard/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhishguardConfig {
    /// Address the HTTP daemon listens on.
    pub bind: String,
    /// Directory holding the exported model artifacts.
    pub models_dir: PathBuf,
    /// Maximum request body size in KiB.
    pub body_limit_kb: usize,
    /// Optional artifact file names; if missing, built-in defaults are used.
    #[serde(default)]
    pub models: Option<ModelFiles>,
}

impl Default for PhishguardConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
            models_dir: PathBuf::from("models"),
            body_limit_kb: 1024,
            models: None,
        }
    }
}

impl PhishguardConfig {
    /// Artifact paths under `models_dir`.
    pub fn model_paths(&self) -> ModelPaths {
        let files = self.models.clone().unwrap_or_default();
        ModelPaths::in_dir(&self.models_dir, &files)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishguard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishguardConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PhishguardConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from_path(path: &Path) -> Result<PhishguardConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: PhishguardConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = PhishguardConfig::default();
        assert_eq!(cfg.bind, "127.0.0.1:8000");
        assert_eq!(cfg.models_dir, PathBuf::from("models"));
        assert_eq!(cfg.body_limit_kb, 1024);
        assert!(cfg.models.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PhishguardConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PhishguardConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.bind, cfg.bind);
        assert_eq!(parsed.models_dir, cfg.models_dir);
        assert_eq!(parsed.body_limit_kb, cfg.body_limit_kb);
    }

    #[test]
    fn default_model_paths() {
        let paths = PhishguardConfig::default().model_paths();
        assert_eq!(paths.email_vectorizer, PathBuf::from("models/email_tfidf.json"));
        assert_eq!(paths.email_classifier, PathBuf::from("models/email_model.json"));
        assert_eq!(paths.url_vectorizer, PathBuf::from("models/url_tfidf.json"));
        assert_eq!(paths.url_classifier, PathBuf::from("models/url_model.json"));
    }

    #[test]
    fn config_toml_custom_model_files() {
        let toml = r#"
            bind = "0.0.0.0:9000"
            models_dir = "/srv/phishguard"
            body_limit_kb = 64

            [models]
            email_vectorizer = "tfidf_vectorizer.json"
            email_classifier = "email_phishing_model.json"
            url_vectorizer = "url_tfidf.json"
            url_classifier = "url_model.json"
        "#;
        let cfg: PhishguardConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.bind, "0.0.0.0:9000");
        assert_eq!(cfg.body_limit_kb, 64);
        let paths = cfg.model_paths();
        assert_eq!(
            paths.email_vectorizer,
            PathBuf::from("/srv/phishguard/tfidf_vectorizer.json")
        );
        assert_eq!(
            paths.email_classifier,
            PathBuf::from("/srv/phishguard/email_phishing_model.json")
        );
    }

    #[test]
    fn load_from_path_reads_file_and_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "bind = \"127.0.0.1:8100\"\nmodels_dir = \"m\"\nbody_limit_kb = 8\n",
        )
        .unwrap();
        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.bind, "127.0.0.1:8100");

        let missing = dir.path().join("nope.toml");
        let err = load_from_path(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("nope.toml"));
    }
}
