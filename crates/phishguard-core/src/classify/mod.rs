//! Binary classifiers restored from JSON exports of fitted models.

mod label;
mod linear;
mod naive_bayes;

use serde::Deserialize;

use crate::error::{InvalidArtifact, PredictError};
use crate::vectorize::SparseVector;

pub use label::ClassLabel;
pub use linear::{LinearArtifact, LinearClassifier};
pub use naive_bayes::{MultinomialNbArtifact, MultinomialNbClassifier};

/// A fitted binary classifier. Read-only after load and shared across requests.
pub trait Classifier: Send + Sync {
    /// Width of the rows the model was fitted on.
    fn n_features(&self) -> usize;

    /// Predicted label of one row, as a phishing verdict.
    fn predict(&self, x: &SparseVector) -> Result<bool, PredictError>;
}

/// Tagged on-disk classifier; `kind` selects the adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    Linear(LinearArtifact),
    MultinomialNb(MultinomialNbArtifact),
}

impl ClassifierArtifact {
    pub fn into_classifier(self) -> Result<Box<dyn Classifier>, InvalidArtifact> {
        let classifier: Box<dyn Classifier> = match self {
            ClassifierArtifact::Linear(a) => Box::new(LinearClassifier::try_from(a)?),
            ClassifierArtifact::MultinomialNb(a) => Box::new(MultinomialNbClassifier::try_from(a)?),
        };
        Ok(classifier)
    }
}

/// Rejects rows whose width differs from the fitted width.
pub(crate) fn check_width(expected: usize, x: &SparseVector) -> Result<(), PredictError> {
    if x.dim() != expected {
        return Err(PredictError::DimensionMismatch {
            expected,
            actual: x.dim(),
        });
    }
    Ok(())
}

/// Maps a two-entry `classes` array to (negative verdict, positive verdict).
pub(crate) fn binary_classes(classes: &[ClassLabel]) -> Result<(bool, bool), InvalidArtifact> {
    match classes {
        [neg, pos] => Ok((neg.is_truthy(), pos.is_truthy())),
        _ => Err(InvalidArtifact::new(format!(
            "expected 2 classes, got {}",
            classes.len()
        ))),
    }
}
