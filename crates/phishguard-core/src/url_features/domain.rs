//! Registrable-domain decomposition backed by the public suffix list.

use regex::Regex;
use std::sync::OnceLock;

/// Subdomain / domain / public suffix of a URL's host. Components that cannot
/// be determined are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainParts {
    pub subdomain: String,
    pub domain: String,
    pub suffix: String,
}

fn scheme_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-Za-z0-9+.-]+:)?//").expect("static regex"))
}

/// Dotted quad, octets 0-255; leading zeros allowed.
fn ipv4_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let octet = "(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";
        Regex::new(&format!(r"^(?:{octet}\.){{3}}{octet}$")).expect("static regex")
    })
}

/// Host part of a URL-ish string: scheme, path, query, fragment, userinfo and
/// port are cut away, as are trailing dots.
fn host_of(url: &str) -> &str {
    let rest = match scheme_re().find(url) {
        Some(m) => &url[m.end()..],
        None => url,
    };
    let rest = rest.split('/').next().unwrap_or("");
    let rest = rest.split('?').next().unwrap_or("");
    let rest = rest.split('#').next().unwrap_or("");
    let rest = rest.rsplit('@').next().unwrap_or("");
    let rest = rest.split(':').next().unwrap_or("");
    rest.trim().trim_end_matches('.')
}

/// Number of trailing labels of `host` that form its ICANN public suffix.
///
/// Private-section entries (e.g. `blogspot.com`) are walked back to their
/// ICANN parent. Hosts under an unlisted TLD have no suffix.
fn icann_suffix_labels(host: &str) -> usize {
    let mut candidate = host;
    loop {
        if candidate.is_empty() {
            return 0;
        }
        let suffix = match psl::suffix(candidate.as_bytes()) {
            Some(s) if s.is_known() => s,
            _ => return 0,
        };
        let len = suffix.as_bytes().len().min(candidate.len());
        let matched = &candidate[candidate.len() - len..];
        match suffix.typ() {
            Some(psl::Type::Private) => match matched.split_once('.') {
                Some((_, parent)) => candidate = parent,
                None => return 0,
            },
            _ => return matched.split('.').count(),
        }
    }
}

/// Splits the host of a (normalized) URL into subdomain, domain and suffix.
///
/// - `"news.example.co.uk/x"` → `news` / `example` / `co.uk`
/// - `"192.168.1.1/login"` → domain `192.168.1.1`, no subdomain or suffix
/// - `"localhost"` → domain `localhost` (unlisted TLD, empty suffix)
pub fn split_domain(url: &str) -> DomainParts {
    let host = host_of(url);
    if ipv4_re().is_match(host) {
        return DomainParts {
            domain: host.to_string(),
            ..DomainParts::default()
        };
    }

    let labels: Vec<&str> = host.split('.').collect();
    let suffix_labels = icann_suffix_labels(host).min(labels.len());
    let suffix_index = labels.len() - suffix_labels;

    let suffix = labels[suffix_index..].join(".");
    let (subdomain, domain) = if suffix_index == 0 {
        (String::new(), String::new())
    } else {
        (
            labels[..suffix_index - 1].join("."),
            labels[suffix_index - 1].to_string(),
        )
    };

    DomainParts {
        subdomain,
        domain,
        suffix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(sub: &str, domain: &str, suffix: &str) -> DomainParts {
        DomainParts {
            subdomain: sub.to_string(),
            domain: domain.to_string(),
            suffix: suffix.to_string(),
        }
    }

    #[test]
    fn simple_and_multi_label_suffixes() {
        assert_eq!(split_domain("example.com"), parts("", "example", "com"));
        assert_eq!(
            split_domain("news.example.co.uk/path?x=1"),
            parts("news", "example", "co.uk")
        );
        assert_eq!(
            split_domain("a.b.example.com.au"),
            parts("a.b", "example", "com.au")
        );
    }

    #[test]
    fn strips_scheme_userinfo_and_port() {
        assert_eq!(
            split_domain("ftp://user@files.example.org:2121/pub"),
            parts("files", "example", "org")
        );
        assert_eq!(split_domain("example.com:8080"), parts("", "example", "com"));
    }

    #[test]
    fn ipv4_host_is_the_domain() {
        assert_eq!(
            split_domain("192.168.1.1/login"),
            parts("", "192.168.1.1", "")
        );
        // Not a valid address: treated as labels under an unlisted TLD.
        assert_eq!(split_domain("999.1.1.1"), parts("999.1.1", "1", ""));
        assert_eq!(split_domain("010.0.0.1/login"), parts("", "010.0.0.1", ""));
        assert_eq!(split_domain("1.2.3"), parts("1.2", "3", ""));
    }

    #[test]
    fn unlisted_tld_has_empty_suffix() {
        assert_eq!(split_domain("localhost"), parts("", "localhost", ""));
        assert_eq!(
            split_domain("login.paypal.notarealtld"),
            parts("login.paypal", "notarealtld", "")
        );
    }

    #[test]
    fn private_suffix_falls_back_to_icann() {
        assert_eq!(
            split_domain("phish.blogspot.com"),
            parts("phish", "blogspot", "com")
        );
    }

    #[test]
    fn bare_suffix_and_garbage() {
        assert_eq!(split_domain("co.uk"), parts("", "", "co.uk"));
        assert_eq!(split_domain(""), DomainParts::default());
        assert_eq!(split_domain("???...///"), DomainParts::default());
        assert_eq!(split_domain("example.com."), parts("", "example", "com"));
        // An empty scheme is not a scheme: the host is what precedes the `/`.
        assert_eq!(split_domain("://evil.com"), DomainParts::default());
    }
}
