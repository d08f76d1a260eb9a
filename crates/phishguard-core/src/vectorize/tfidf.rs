//! TF-IDF vectorizer restored from a JSON export of a fitted model.
//!
//! Transform semantics follow scikit-learn's `TfidfVectorizer` (and
//! `CountVectorizer` when no `idf` is exported): lowercase, analyze into
//! word or character n-grams, count in-vocabulary terms, optional binary or
//! sublinear tf, idf weighting, row normalization.

use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use super::{SparseVector, Vectorizer};
use crate::error::InvalidArtifact;

const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

fn collapse_whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s\s+").expect("static regex"))
}

/// How a document is split into terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Analyzer {
    /// Token-pattern words, joined into space-separated n-grams.
    #[default]
    Word,
    /// Character n-grams over the whole (whitespace-collapsed) text.
    Char,
    /// Character n-grams inside space-padded words.
    CharWb,
}

/// Row normalization applied after idf weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

fn default_true() -> bool {
    true
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_token_pattern() -> String {
    DEFAULT_TOKEN_PATTERN.to_string()
}

/// Distinguishes an explicit `"norm": null` from an absent field.
fn explicit_norm<'de, D>(d: D) -> Result<Option<Option<Norm>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Norm>::deserialize(d).map(Some)
}

/// On-disk form of a fitted vectorizer. Field names and defaults match the
/// scikit-learn constructor parameters; `vocabulary` and `idf` are the fitted
/// `vocabulary_` and `idf_`.
///
/// A `CountVectorizer` export has no `idf` and no `norm`: rows are raw
/// counts. When `norm` is absent but `idf` is present, `l2` applies.
#[derive(Debug, Clone, Deserialize)]
pub struct TfidfArtifact {
    pub vocabulary: HashMap<String, usize>,
    #[serde(default)]
    pub idf: Option<Vec<f64>>,
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default)]
    pub analyzer: Analyzer,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,
    #[serde(default)]
    pub stop_words: Option<Vec<String>>,
    #[serde(default)]
    pub strip_accents: Option<String>,
    #[serde(default)]
    pub binary: bool,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default, deserialize_with = "explicit_norm")]
    pub norm: Option<Option<Norm>>,
}

/// Fitted TF-IDF vectorizer. Immutable after construction.
#[derive(Debug)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Option<Vec<f64>>,
    lowercase: bool,
    analyzer: Analyzer,
    min_n: usize,
    max_n: usize,
    token_re: Regex,
    /// Capture group holding the token: 0 for the whole match, 1 when the
    /// pattern has exactly one group.
    token_group: usize,
    stop_words: HashSet<String>,
    binary: bool,
    sublinear_tf: bool,
    norm: Option<Norm>,
}

impl TryFrom<TfidfArtifact> for TfidfVectorizer {
    type Error = InvalidArtifact;

    fn try_from(a: TfidfArtifact) -> Result<Self, Self::Error> {
        let dim = a.vocabulary.len();
        if dim == 0 {
            return Err(InvalidArtifact::new("vocabulary is empty"));
        }
        let mut seen = vec![false; dim];
        for (term, &col) in &a.vocabulary {
            if col >= dim {
                return Err(InvalidArtifact::new(format!(
                    "term {term:?} maps to column {col}, vocabulary has {dim} columns"
                )));
            }
            if std::mem::replace(&mut seen[col], true) {
                return Err(InvalidArtifact::new(format!(
                    "column {col} is assigned to more than one term"
                )));
            }
        }
        if let Some(idf) = &a.idf {
            if idf.len() != dim {
                return Err(InvalidArtifact::new(format!(
                    "idf has {} entries, vocabulary has {dim}",
                    idf.len()
                )));
            }
        }
        let (min_n, max_n) = a.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(InvalidArtifact::new(format!(
                "invalid ngram_range ({min_n}, {max_n})"
            )));
        }
        if let Some(mode) = &a.strip_accents {
            return Err(InvalidArtifact::new(format!(
                "strip_accents={mode:?} is not supported"
            )));
        }
        let norm = match a.norm {
            Some(explicit) => explicit,
            None if a.idf.is_some() => Some(Norm::L2),
            None => None,
        };
        let token_re = Regex::new(&a.token_pattern).map_err(|e| {
            InvalidArtifact::new(format!("token_pattern {:?}: {e}", a.token_pattern))
        })?;
        let token_group = match token_re.captures_len() {
            1 => 0,
            2 => 1,
            n => {
                return Err(InvalidArtifact::new(format!(
                    "token_pattern has {} capture groups, at most 1 allowed",
                    n - 1
                )))
            }
        };

        Ok(Self {
            vocabulary: a.vocabulary,
            idf: a.idf,
            lowercase: a.lowercase,
            analyzer: a.analyzer,
            min_n,
            max_n,
            token_re,
            token_group,
            stop_words: a.stop_words.unwrap_or_default().into_iter().collect(),
            binary: a.binary,
            sublinear_tf: a.sublinear_tf,
            norm,
        })
    }
}

impl TfidfVectorizer {
    /// Terms of an already-preprocessed document, in scikit-learn order.
    pub fn analyze(&self, doc: &str) -> Vec<String> {
        match self.analyzer {
            Analyzer::Word => self.word_ngrams(doc),
            Analyzer::Char => self.char_ngrams(doc),
            Analyzer::CharWb => self.char_wb_ngrams(doc),
        }
    }

    fn word_ngrams(&self, doc: &str) -> Vec<String> {
        let tokens: Vec<&str> = self
            .token_re
            .captures_iter(doc)
            .filter_map(|c| c.get(self.token_group))
            .map(|m| m.as_str())
            .filter(|t| !self.stop_words.contains(*t))
            .collect();

        let mut terms = Vec::new();
        for n in self.min_n..=self.max_n {
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }
        terms
    }

    fn char_ngrams(&self, doc: &str) -> Vec<String> {
        let text = collapse_whitespace_re().replace_all(doc, " ");
        let chars: Vec<char> = text.chars().collect();
        let mut terms = Vec::new();
        for n in self.min_n..=self.max_n {
            for window in chars.windows(n) {
                terms.push(window.iter().collect());
            }
        }
        terms
    }

    fn char_wb_ngrams(&self, doc: &str) -> Vec<String> {
        let text = collapse_whitespace_re().replace_all(doc, " ");
        let mut terms = Vec::new();
        for word in text.split_whitespace() {
            let padded: Vec<char> = std::iter::once(' ')
                .chain(word.chars())
                .chain(std::iter::once(' '))
                .collect();
            let len = padded.len();
            for n in self.min_n..=self.max_n {
                let mut offset = 0;
                terms.push(padded[offset..(offset + n).min(len)].iter().collect());
                while offset + n < len {
                    offset += 1;
                    terms.push(padded[offset..offset + n].iter().collect());
                }
                // Word no longer than n: the whole padded word was the only gram.
                if offset == 0 {
                    break;
                }
            }
        }
        terms
    }
}

impl Vectorizer for TfidfVectorizer {
    fn dim(&self) -> usize {
        self.vocabulary.len()
    }

    fn transform(&self, text: &str) -> SparseVector {
        let doc: Cow<'_, str> = if self.lowercase {
            Cow::Owned(text.to_lowercase())
        } else {
            Cow::Borrowed(text)
        };

        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in self.analyze(&doc) {
            if let Some(&col) = self.vocabulary.get(&term) {
                *counts.entry(col).or_insert(0.0) += 1.0;
            }
        }

        let weighted = counts.into_iter().map(|(col, count)| {
            let mut tf = if self.binary { 1.0 } else { count };
            if self.sublinear_tf {
                tf = tf.ln() + 1.0;
            }
            let idf = self.idf.as_ref().map_or(1.0, |idf| idf[col]);
            (col, tf * idf)
        });
        let mut row = SparseVector::from_pairs(self.dim(), weighted);

        let norm = match self.norm {
            Some(Norm::L2) => row.values().iter().map(|v| v * v).sum::<f64>().sqrt(),
            Some(Norm::L1) => row.values().iter().map(|v| v.abs()).sum::<f64>(),
            None => 0.0,
        };
        if norm > 0.0 {
            row.scale(1.0 / norm);
        }
        row
    }
}
