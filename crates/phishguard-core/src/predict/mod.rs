//! Request/response types and the two prediction pipelines.

mod email;
mod url;

use serde::{Deserialize, Serialize};

pub use email::email_text;

/// Body of `POST /predict/email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailInput {
    pub subject: String,
    pub body: String,
}

/// Body of `POST /predict/url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlInput {
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailVerdict {
    pub email_phishing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlVerdict {
    pub url_phishing: bool,
}
