//! Text vectorization: raw text to one sparse feature row.

mod sparse;
mod tfidf;

pub use sparse::SparseVector;
pub use tfidf::{Analyzer, Norm, TfidfArtifact, TfidfVectorizer};

/// A fitted text vectorizer. Read-only after load and shared across requests.
pub trait Vectorizer: Send + Sync {
    /// Width of every row produced by [`Vectorizer::transform`].
    fn dim(&self) -> usize;

    /// Maps one document to one sparse row. Terms outside the fitted
    /// vocabulary contribute nothing; never fails.
    fn transform(&self, text: &str) -> SparseVector;
}
