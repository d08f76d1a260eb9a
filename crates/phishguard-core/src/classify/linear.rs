//! Linear decision-function classifiers (logistic regression, linear SVM, SGD).

use serde::Deserialize;

use super::{binary_classes, check_width, ClassLabel, Classifier};
use crate::error::{InvalidArtifact, PredictError};
use crate::vectorize::SparseVector;

/// `coef_` is accepted flat or as the single-row matrix scikit-learn stores.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Coef {
    Row(Vec<f64>),
    Matrix(Vec<Vec<f64>>),
}

/// `intercept_` is accepted as a scalar or a one-element array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Intercept {
    Scalar(f64),
    Array(Vec<f64>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinearArtifact {
    pub coef: Coef,
    pub intercept: Intercept,
    pub classes: Vec<ClassLabel>,
}

/// Predicts the second class when `w·x + b > 0`, the first otherwise.
#[derive(Debug)]
pub struct LinearClassifier {
    weights: Vec<f64>,
    intercept: f64,
    negative: bool,
    positive: bool,
}

impl TryFrom<LinearArtifact> for LinearClassifier {
    type Error = InvalidArtifact;

    fn try_from(a: LinearArtifact) -> Result<Self, Self::Error> {
        let (negative, positive) = binary_classes(&a.classes)?;
        let weights = match a.coef {
            Coef::Row(w) => w,
            Coef::Matrix(mut rows) if rows.len() == 1 => rows.remove(0),
            Coef::Matrix(rows) => {
                return Err(InvalidArtifact::new(format!(
                    "binary linear model needs 1 coef row, got {}",
                    rows.len()
                )))
            }
        };
        if weights.is_empty() {
            return Err(InvalidArtifact::new("coef is empty"));
        }
        let intercept = match a.intercept {
            Intercept::Scalar(b) => b,
            Intercept::Array(b) if b.len() == 1 => b[0],
            Intercept::Array(b) => {
                return Err(InvalidArtifact::new(format!(
                    "binary linear model needs 1 intercept, got {}",
                    b.len()
                )))
            }
        };
        Ok(Self {
            weights,
            intercept,
            negative,
            positive,
        })
    }
}

impl LinearClassifier {
    /// Signed distance to the separating hyperplane.
    pub fn decision_function(&self, x: &SparseVector) -> Result<f64, PredictError> {
        check_width(self.weights.len(), x)?;
        Ok(x.dot(&self.weights) + self.intercept)
    }
}

impl Classifier for LinearClassifier {
    fn n_features(&self) -> usize {
        self.weights.len()
    }

    fn predict(&self, x: &SparseVector) -> Result<bool, PredictError> {
        let score = self.decision_function(x)?;
        Ok(if score > 0.0 {
            self.positive
        } else {
            self.negative
        })
    }
}
