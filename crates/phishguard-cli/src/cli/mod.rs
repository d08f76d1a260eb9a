//! CLI for the PhishGuard classifier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use phishguard_core::config::{self, PhishguardConfig};
use std::path::PathBuf;

use commands::{run_completions, run_email, run_features, run_models, run_serve, run_url};

/// Top-level CLI for PhishGuard.
#[derive(Debug, Parser)]
#[command(name = "phishguard")]
#[command(about = "PhishGuard: phishing classifier for emails and URLs", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/phishguard/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Load the models and serve the HTTP prediction API.
    Serve {
        /// Listen address (overrides `bind` from config).
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
        /// Directory with the exported model artifacts (overrides config).
        #[arg(long, value_name = "DIR")]
        models_dir: Option<PathBuf>,
    },

    /// Classify one URL and print the verdict as JSON.
    Url {
        /// URL to classify (any string is accepted).
        url: String,
        #[arg(long, value_name = "DIR")]
        models_dir: Option<PathBuf>,
    },

    /// Classify one email and print the verdict as JSON.
    Email {
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        body: String,
        #[arg(long, value_name = "DIR")]
        models_dir: Option<PathBuf>,
    },

    /// Show the normalized URL, its domain parts and lexical features (no models needed).
    Features {
        url: String,
    },

    /// Load the model artifacts and print their digests and widths.
    Models {
        #[arg(long, value_name = "DIR")]
        models_dir: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        shell: Shell,
    },
}

/// Applies a `--models-dir` override on top of the loaded config.
fn with_models_dir(mut cfg: PhishguardConfig, models_dir: Option<PathBuf>) -> PhishguardConfig {
    if let Some(dir) = models_dir {
        cfg.models_dir = dir;
    }
    cfg
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // `features` and `completions` need neither config nor models.
        match &cli.command {
            CliCommand::Features { url } => return run_features(url),
            CliCommand::Completions { shell } => return run_completions(*shell),
            _ => {}
        }

        let cfg = match &cli.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Serve { bind, models_dir } => {
                let mut cfg = with_models_dir(cfg, models_dir);
                if let Some(bind) = bind {
                    cfg.bind = bind;
                }
                run_serve(&cfg).await?;
            }
            CliCommand::Url { url, models_dir } => {
                run_url(&with_models_dir(cfg, models_dir), &url)?;
            }
            CliCommand::Email {
                subject,
                body,
                models_dir,
            } => {
                run_email(&with_models_dir(cfg, models_dir), subject, body)?;
            }
            CliCommand::Models { models_dir } => {
                run_models(&with_models_dir(cfg, models_dir))?;
            }
            CliCommand::Features { .. } | CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
