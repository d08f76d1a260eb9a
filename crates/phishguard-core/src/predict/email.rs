//! Email pipeline: subject + body → vectorizer → classifier.

use super::{EmailInput, EmailVerdict};
use crate::error::PredictError;
use crate::models::ModelSet;

/// Text the email vectorizer sees: subject and body joined by one space.
pub fn email_text(input: &EmailInput) -> String {
    format!("{} {}", input.subject, input.body)
}

impl ModelSet {
    /// Classifies one email. Empty subject and body are accepted.
    pub fn predict_email(&self, input: &EmailInput) -> Result<EmailVerdict, PredictError> {
        let x = self.email_vectorizer.transform(&email_text(input));
        let email_phishing = self.email_classifier.predict(&x)?;
        Ok(EmailVerdict { email_phishing })
    }
}
