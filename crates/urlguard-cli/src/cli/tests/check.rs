//! Tests for check.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_check_defaults() {
    match parse(&["urlguard", "check", "http://example.com"]) {
        CliCommand::Check {
            urls,
            model,
            threshold,
            json,
        } => {
            assert_eq!(urls, vec!["http://example.com"]);
            assert!(model.is_none());
            assert!(threshold.is_none());
            assert!(!json);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_all_flags() {
    match parse(&[
        "urlguard",
        "check",
        "--model",
        "/tmp/nb.json",
        "--threshold",
        "0.35",
        "--json",
        "http://a.example",
        "http://b.example",
    ]) {
        CliCommand::Check {
            urls,
            model,
            threshold,
            json,
        } => {
            assert_eq!(urls.len(), 2);
            assert_eq!(model.as_deref(), Some(Path::new("/tmp/nb.json")));
            assert_eq!(threshold, Some(0.35));
            assert!(json);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_check_threshold_must_be_probability() {
    for bad in ["1.5", "-0.1", "abc"] {
        assert!(
            Cli::try_parse_from(["urlguard", "check", "--threshold", bad, "http://x"]).is_err(),
            "{bad} accepted"
        );
    }
    for ok in ["0", "1", "0.5"] {
        assert!(Cli::try_parse_from(["urlguard", "check", "--threshold", ok, "http://x"]).is_ok());
    }
}

#[test]
fn cli_check_requires_url() {
    assert!(Cli::try_parse_from(["urlguard", "check", "--model", "m.json"]).is_err());
}
