//! Tests for url, email and features.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_url() {
    match parse(&["phishguard", "url", "http://192.168.1.1/login"]) {
        CliCommand::Url { url, models_dir } => {
            assert_eq!(url, "http://192.168.1.1/login");
            assert!(models_dir.is_none());
        }
        _ => panic!("expected Url"),
    }
}

#[test]
fn cli_parse_email() {
    match parse(&[
        "phishguard",
        "email",
        "--subject",
        "Verify your account",
        "--body",
        "Click here",
    ]) {
        CliCommand::Email { subject, body, .. } => {
            assert_eq!(subject, "Verify your account");
            assert_eq!(body, "Click here");
        }
        _ => panic!("expected Email"),
    }
}

#[test]
fn cli_parse_email_defaults_to_empty_fields() {
    match parse(&["phishguard", "email"]) {
        CliCommand::Email { subject, body, .. } => {
            assert_eq!(subject, "");
            assert_eq!(body, "");
        }
        _ => panic!("expected Email"),
    }
}

#[test]
fn cli_parse_features() {
    match parse(&["phishguard", "features", "example.co.uk"]) {
        CliCommand::Features { url } => assert_eq!(url, "example.co.uk"),
        _ => panic!("expected Features"),
    }
}
