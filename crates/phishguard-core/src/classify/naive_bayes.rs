//! Multinomial naive Bayes over term weights.

use serde::Deserialize;

use super::{binary_classes, check_width, ClassLabel, Classifier};
use crate::error::{InvalidArtifact, PredictError};
use crate::vectorize::SparseVector;

#[derive(Debug, Clone, Deserialize)]
pub struct MultinomialNbArtifact {
    pub class_log_prior: Vec<f64>,
    /// One row per class, one column per feature.
    pub feature_log_prob: Vec<Vec<f64>>,
    pub classes: Vec<ClassLabel>,
}

#[derive(Debug)]
pub struct MultinomialNbClassifier {
    class_log_prior: [f64; 2],
    feature_log_prob: [Vec<f64>; 2],
    verdicts: [bool; 2],
}

impl TryFrom<MultinomialNbArtifact> for MultinomialNbClassifier {
    type Error = InvalidArtifact;

    fn try_from(a: MultinomialNbArtifact) -> Result<Self, Self::Error> {
        let (negative, positive) = binary_classes(&a.classes)?;
        let class_log_prior: [f64; 2] = a.class_log_prior.try_into().map_err(|v: Vec<f64>| {
            InvalidArtifact::new(format!("class_log_prior has {} entries, expected 2", v.len()))
        })?;
        let feature_log_prob: [Vec<f64>; 2] =
            a.feature_log_prob.try_into().map_err(|v: Vec<Vec<f64>>| {
                InvalidArtifact::new(format!("feature_log_prob has {} rows, expected 2", v.len()))
            })?;
        let (neg_width, pos_width) = (feature_log_prob[0].len(), feature_log_prob[1].len());
        if neg_width == 0 || neg_width != pos_width {
            return Err(InvalidArtifact::new(format!(
                "feature_log_prob rows have widths {neg_width} and {pos_width}"
            )));
        }
        Ok(Self {
            class_log_prior,
            feature_log_prob,
            verdicts: [negative, positive],
        })
    }
}

impl MultinomialNbClassifier {
    /// Unnormalized log posterior of each class.
    pub fn joint_log_likelihood(&self, x: &SparseVector) -> Result<[f64; 2], PredictError> {
        check_width(self.n_features(), x)?;
        Ok([
            self.class_log_prior[0] + x.dot(&self.feature_log_prob[0]),
            self.class_log_prior[1] + x.dot(&self.feature_log_prob[1]),
        ])
    }
}

impl Classifier for MultinomialNbClassifier {
    fn n_features(&self) -> usize {
        self.feature_log_prob[0].len()
    }

    fn predict(&self, x: &SparseVector) -> Result<bool, PredictError> {
        let [first, second] = self.joint_log_likelihood(x)?;
        // Ties go to the first class, as argmax does.
        Ok(if second > first {
            self.verdicts[1]
        } else {
            self.verdicts[0]
        })
    }
}
