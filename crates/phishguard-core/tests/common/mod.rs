//! Small hand-made artifacts for integration tests.
//!
//! Email model: weights on a five-word vocabulary, phishing when
//! "verify"/"password"/"account" dominate. URL model: a four-term vocabulary
//! plus the nine lexical columns, with weight only on "login", "verify" and
//! the IPv4 marker.

#![allow(dead_code)]

use phishguard_core::config::ModelFiles;
use phishguard_core::models::{ModelPaths, ModelSet};
use serde_json::json;
use std::fs;
use std::path::Path;

pub const URL_VOCAB: usize = 4;

pub fn write_fixture_models(dir: &Path) -> ModelPaths {
    let files = ModelFiles::default();
    let write = |name: &str, v: serde_json::Value| {
        fs::write(dir.join(name), serde_json::to_vec_pretty(&v).unwrap()).unwrap();
    };

    write(
        &files.email_vectorizer,
        json!({
            "vocabulary": {"verify": 0, "account": 1, "password": 2, "meeting": 3, "lunch": 4},
            "idf": [1.5, 1.2, 1.8, 1.1, 1.3]
        }),
    );
    write(
        &files.email_classifier,
        json!({
            "kind": "linear",
            "coef": [[2.0, 1.5, 2.0, -2.0, -2.0]],
            "intercept": [-1.0],
            "classes": [0, 1]
        }),
    );
    write(
        &files.url_vectorizer,
        json!({
            "vocabulary": {"login": 0, "verify": 1, "secure": 2, "com": 3}
        }),
    );
    // Columns: 4 vocabulary terms, then length, digits, non-alnum, dots,
    // domain, subdomain, suffix, https, ipv4.
    write(
        &files.url_classifier,
        json!({
            "kind": "linear",
            "coef": [1.5, 1.5, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0],
            "intercept": -1.0,
            "classes": [0, 1]
        }),
    );

    ModelPaths::in_dir(dir, &files)
}

pub fn fixture_model_set() -> (tempfile::TempDir, ModelSet) {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_fixture_models(dir.path());
    let models = ModelSet::load(&paths).unwrap();
    (dir, models)
}
