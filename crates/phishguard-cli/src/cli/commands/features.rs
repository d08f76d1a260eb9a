//! `phishguard features` – show what the URL model sees, without loading it.

use anyhow::Result;
use phishguard_core::url_features::{extract_lexical, normalize_url, split_domain};

const LEXICAL_NAMES: [&str; 9] = [
    "length",
    "digits",
    "non_alphanumeric",
    "dots",
    "domain_len",
    "subdomain_len",
    "suffix_len",
    "has_https",
    "has_ipv4",
];

pub fn run_features(url: &str) -> Result<()> {
    let normalized = normalize_url(url);
    let parts = split_domain(&normalized);
    let features = extract_lexical(&normalized).to_array();

    println!("normalized: {}", normalized);
    println!(
        "subdomain: {:?}  domain: {:?}  suffix: {:?}",
        parts.subdomain, parts.domain, parts.suffix
    );
    for (name, value) in LEXICAL_NAMES.iter().zip(features) {
        println!("  {:<17} {}", name, value);
    }
    Ok(())
}
