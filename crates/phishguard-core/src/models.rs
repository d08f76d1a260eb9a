//! Loading the four fitted artifacts the service runs on.
//!
//! Artifacts are JSON exports of the fitted vectorizers and classifiers.
//! Loading is synchronous, happens once before the listener is bound, and
//! any failure is fatal. The resulting [`ModelSet`] has no mutation API and
//! is shared by reference across all requests.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::checksum::{sha256_hex, short_digest};
use crate::classify::{Classifier, ClassifierArtifact};
use crate::config::ModelFiles;
use crate::error::LoadError;
use crate::url_features::LEXICAL_FEATURE_COUNT;
use crate::vectorize::{TfidfArtifact, TfidfVectorizer, Vectorizer};

/// Locations of the four artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    pub email_vectorizer: PathBuf,
    pub email_classifier: PathBuf,
    pub url_vectorizer: PathBuf,
    pub url_classifier: PathBuf,
}

impl ModelPaths {
    /// Resolves `files` relative to `dir`.
    pub fn in_dir(dir: &Path, files: &ModelFiles) -> Self {
        Self {
            email_vectorizer: dir.join(&files.email_vectorizer),
            email_classifier: dir.join(&files.email_classifier),
            url_vectorizer: dir.join(&files.url_vectorizer),
            url_classifier: dir.join(&files.url_classifier),
        }
    }
}

/// What was loaded from where; logged at startup and reported by `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSummary {
    pub role: &'static str,
    pub path: PathBuf,
    pub sha256: String,
    pub n_features: usize,
}

/// The loaded email and URL pipelines.
pub struct ModelSet {
    pub(crate) email_vectorizer: Box<dyn Vectorizer>,
    pub(crate) email_classifier: Box<dyn Classifier>,
    pub(crate) url_vectorizer: Box<dyn Vectorizer>,
    pub(crate) url_classifier: Box<dyn Classifier>,
    summary: Vec<ArtifactSummary>,
}

impl fmt::Debug for ModelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSet")
            .field("email_features", &self.email_feature_width())
            .field("url_features", &self.url_feature_width())
            .field("summary", &self.summary)
            .finish()
    }
}

impl ModelSet {
    /// Loads and cross-checks all four artifacts.
    pub fn load(paths: &ModelPaths) -> Result<Self, LoadError> {
        let (email_vectorizer, email_vec_digest) = load_vectorizer(&paths.email_vectorizer)?;
        let (email_classifier, email_clf_digest) = load_classifier(&paths.email_classifier)?;
        let (url_vectorizer, url_vec_digest) = load_vectorizer(&paths.url_vectorizer)?;
        let (url_classifier, url_clf_digest) = load_classifier(&paths.url_classifier)?;

        let summary = vec![
            ArtifactSummary {
                role: "email_vectorizer",
                path: paths.email_vectorizer.clone(),
                sha256: email_vec_digest,
                n_features: email_vectorizer.dim(),
            },
            ArtifactSummary {
                role: "email_classifier",
                path: paths.email_classifier.clone(),
                sha256: email_clf_digest,
                n_features: email_classifier.n_features(),
            },
            ArtifactSummary {
                role: "url_vectorizer",
                path: paths.url_vectorizer.clone(),
                sha256: url_vec_digest,
                n_features: url_vectorizer.dim(),
            },
            ArtifactSummary {
                role: "url_classifier",
                path: paths.url_classifier.clone(),
                sha256: url_clf_digest,
                n_features: url_classifier.n_features(),
            },
        ];

        let set = Self::from_parts(
            Box::new(email_vectorizer),
            email_classifier,
            Box::new(url_vectorizer),
            url_classifier,
        )?;
        for s in &summary {
            tracing::info!(
                role = s.role,
                path = %s.path.display(),
                sha256 = short_digest(&s.sha256),
                n_features = s.n_features,
                "loaded artifact"
            );
        }
        Ok(Self { summary, ..set })
    }

    /// Assembles a set from already-built adapters, checking that each
    /// classifier accepts exactly what its pipeline produces.
    pub fn from_parts(
        email_vectorizer: Box<dyn Vectorizer>,
        email_classifier: Box<dyn Classifier>,
        url_vectorizer: Box<dyn Vectorizer>,
        url_classifier: Box<dyn Classifier>,
    ) -> Result<Self, LoadError> {
        if email_classifier.n_features() != email_vectorizer.dim() {
            return Err(LoadError::WidthMismatch {
                what: "email",
                expected: email_classifier.n_features(),
                actual: email_vectorizer.dim(),
            });
        }
        let url_width = url_vectorizer.dim() + LEXICAL_FEATURE_COUNT;
        if url_classifier.n_features() != url_width {
            return Err(LoadError::WidthMismatch {
                what: "url",
                expected: url_classifier.n_features(),
                actual: url_width,
            });
        }
        Ok(Self {
            email_vectorizer,
            email_classifier,
            url_vectorizer,
            url_classifier,
            summary: Vec::new(),
        })
    }

    /// Per-artifact digests and widths. Empty for sets built with
    /// [`ModelSet::from_parts`].
    pub fn summary(&self) -> &[ArtifactSummary] {
        &self.summary
    }

    /// Width of the email row (email vectorizer columns).
    pub fn email_feature_width(&self) -> usize {
        self.email_vectorizer.dim()
    }

    /// Width of the combined URL row: vectorizer columns plus lexical features.
    pub fn url_feature_width(&self) -> usize {
        self.url_vectorizer.dim() + LEXICAL_FEATURE_COUNT
    }
}

/// Reads and parses one JSON artifact, returning it with its SHA-256.
fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<(T, String), LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let digest = sha256_hex(&bytes);
    let artifact = serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((artifact, digest))
}

fn load_vectorizer(path: &Path) -> Result<(TfidfVectorizer, String), LoadError> {
    let (artifact, digest) = read_artifact::<TfidfArtifact>(path)?;
    let vectorizer = TfidfVectorizer::try_from(artifact).map_err(|source| LoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((vectorizer, digest))
}

fn load_classifier(path: &Path) -> Result<(Box<dyn Classifier>, String), LoadError> {
    let (artifact, digest) = read_artifact::<ClassifierArtifact>(path)?;
    let classifier = artifact
        .into_classifier()
        .map_err(|source| LoadError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
    Ok((classifier, digest))
}
