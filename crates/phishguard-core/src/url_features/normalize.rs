//! URL text normalization.

use regex::Regex;
use std::sync::OnceLock;

fn protocol_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://").expect("static regex"))
}

fn www_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"www\.").expect("static regex"))
}

/// True for characters that survive normalization: `a-z`, `0-9` and `./:?=&%-`.
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || matches!(c, '.' | '/' | ':' | '?' | '=' | '&' | '%' | '-')
}

/// Drops every character outside the allow-set.
pub fn filter_allowed(s: &str) -> String {
    s.chars().filter(|&c| is_allowed_char(c)).collect()
}

/// Normalizes a URL for vectorization and lexical feature extraction.
///
/// Lowercases, removes every `http://`/`https://` and `www.` (anywhere, not
/// only as a prefix), then drops characters outside the allow-set. Each
/// removal is a single left-to-right pass, so text spliced together by a
/// removal is not rescanned.
///
/// - `normalize_url("HTTPS://WWW.Example.co.uk/path?x=1")` → `"example.co.uk/path?x=1"`
pub fn normalize_url(url: &str) -> String {
    let lowered = url.to_lowercase();
    let no_protocol = protocol_re().replace_all(&lowered, "");
    let no_www = www_re().replace_all(&no_protocol, "");
    filter_allowed(&no_www)
}
