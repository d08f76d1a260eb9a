//! Error types for artifact loading (fatal, startup-only) and prediction (per request).

use std::path::PathBuf;
use thiserror::Error;

/// An artifact parsed as JSON but its contents are unusable (shape mismatch,
/// unsupported option, bad token pattern, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvalidArtifact(pub String);

impl InvalidArtifact {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// A model or vectorizer artifact could not be loaded. The service must not
/// start serving when this is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse artifact {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid artifact {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: InvalidArtifact,
    },
    /// Classifier width does not match what its vectorizer (plus lexical
    /// features, for URLs) produces.
    #[error("{what}: classifier expects {expected} features, pipeline produces {actual}")]
    WidthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Failure of a single prediction. Never fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    #[error("feature vector has {actual} columns, classifier was fitted with {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}
