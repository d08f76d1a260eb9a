//! `phishguard models` – load the artifacts and print what was loaded.

use anyhow::Result;
use phishguard_core::config::PhishguardConfig;

use super::load_models;

pub fn run_models(cfg: &PhishguardConfig) -> Result<()> {
    let models = load_models(cfg)?;
    for s in models.summary() {
        println!(
            "{:<17} {:>7} features  {}  {}",
            s.role,
            s.n_features,
            s.sha256,
            s.path.display()
        );
    }
    println!("url classifier input width: {}", models.url_feature_width());
    Ok(())
}
