//! URL feature extraction.
//!
//! Turns a raw URL into the normalized text fed to the URL vectorizer and the
//! nine lexical statistics appended after the vectorizer columns.

mod domain;
mod lexical;
mod normalize;

pub use domain::{split_domain, DomainParts};
pub use lexical::{extract_lexical, LexicalFeatures, LEXICAL_FEATURE_COUNT};
pub use normalize::{filter_allowed, is_allowed_char, normalize_url};
