//! URL pipeline: normalize → (vectorize ‖ lexical features) → concatenate → classifier.

use super::{UrlInput, UrlVerdict};
use crate::error::PredictError;
use crate::models::ModelSet;
use crate::url_features::{extract_lexical, normalize_url};
use crate::vectorize::SparseVector;

impl ModelSet {
    /// Combined row for one URL: vectorizer columns first, then the nine
    /// lexical features, both computed on the normalized URL.
    pub fn url_features(&self, url: &str) -> SparseVector {
        let normalized = normalize_url(url);
        let text = self.url_vectorizer.transform(&normalized);
        let lexical = extract_lexical(&normalized);
        text.hstack(&lexical.to_array())
    }

    /// Classifies one URL. Any string is accepted.
    pub fn predict_url(&self, input: &UrlInput) -> Result<UrlVerdict, PredictError> {
        let x = self.url_features(&input.url);
        let url_phishing = self.url_classifier.predict(&x)?;
        Ok(UrlVerdict { url_phishing })
    }
}
