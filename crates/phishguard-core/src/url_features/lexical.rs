//! Lexical statistics over a normalized URL.

use regex::Regex;
use std::sync::OnceLock;

use super::domain::split_domain;

/// Number of lexical columns appended after the vectorizer columns.
pub const LEXICAL_FEATURE_COUNT: usize = 9;

fn dotted_quad_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+\.\d+\.\d+\.\d+").expect("static regex"))
}

/// Surface statistics of one normalized URL, in model column order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexicalFeatures {
    pub length: usize,
    pub digits: usize,
    pub non_alphanumeric: usize,
    pub dots: usize,
    pub domain_len: usize,
    pub subdomain_len: usize,
    pub suffix_len: usize,
    /// "https" appears somewhere in the text. Normalization already removed
    /// `https://`, so this only fires for "https" left in the path or query.
    pub has_https: bool,
    /// Four dot-separated digit runs appear somewhere (no octet range check).
    pub has_ipv4: bool,
}

impl LexicalFeatures {
    pub fn to_array(&self) -> [f64; LEXICAL_FEATURE_COUNT] {
        [
            self.length as f64,
            self.digits as f64,
            self.non_alphanumeric as f64,
            self.dots as f64,
            self.domain_len as f64,
            self.subdomain_len as f64,
            self.suffix_len as f64,
            if self.has_https { 1.0 } else { 0.0 },
            if self.has_ipv4 { 1.0 } else { 0.0 },
        ]
    }
}

/// Computes the nine lexical features of an already-normalized URL.
///
/// Total over all strings: unparseable hosts give empty domain parts, which
/// count as length 0.
pub fn extract_lexical(normalized: &str) -> LexicalFeatures {
    let parts = split_domain(normalized);
    let mut features = LexicalFeatures {
        domain_len: parts.domain.chars().count(),
        subdomain_len: parts.subdomain.chars().count(),
        suffix_len: parts.suffix.chars().count(),
        has_https: normalized.contains("https"),
        has_ipv4: dotted_quad_re().is_match(normalized),
        ..LexicalFeatures::default()
    };
    for c in normalized.chars() {
        features.length += 1;
        if c.is_ascii_digit() {
            features.digits += 1;
        }
        if !c.is_alphanumeric() {
            features.non_alphanumeric += 1;
        }
        if c == '.' {
            features.dots += 1;
        }
    }
    features
}
