//! CLI command handlers. Each command is in its own file.

mod classify;
mod completions;
mod features;
mod models;
mod serve;

pub use classify::{run_email, run_url};
pub use completions::run_completions;
pub use features::run_features;
pub use models::run_models;
pub use serve::run_serve;

use anyhow::{Context, Result};
use phishguard_core::config::PhishguardConfig;
use phishguard_core::models::ModelSet;

/// Loads the four artifacts named by `cfg`; any failure is fatal to the command.
fn load_models(cfg: &PhishguardConfig) -> Result<ModelSet> {
    let paths = cfg.model_paths();
    ModelSet::load(&paths)
        .with_context(|| format!("load models from {}", cfg.models_dir.display()))
}
