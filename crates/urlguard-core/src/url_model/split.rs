//! Generic-syntax URL splitting over the raw input text.
//!
//! Components are slices of what the user typed: no percent-encoding, no
//! dot-segment removal, no backslash rewriting. `scheme:` is recognised only
//! when the text before the first `:` is a valid scheme, the authority only
//! after `//`, and the path runs up to the first `?` or `#`.

use std::borrow::Cow;
use std::net::Ipv6Addr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("unbalanced brackets in authority {0:?}")]
    UnbalancedBrackets(String),
    #[error("bracketed host {0:?} is not an IPv6 address")]
    BracketedHost(String),
}

/// Authority and path of a URL, borrowed from the cleaned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Split<'a> {
    pub netloc: &'a str,
    pub path: &'a str,
}

/// Drops leading C0 controls and spaces, and every tab, CR and LF.
pub(super) fn clean(input: &str) -> Cow<'_, str> {
    let trimmed = input.trim_start_matches(|c: char| c <= ' ');
    if trimmed.contains(['\t', '\r', '\n']) {
        Cow::Owned(
            trimmed
                .chars()
                .filter(|&c| !matches!(c, '\t' | '\r' | '\n'))
                .collect(),
        )
    } else {
        Cow::Borrowed(trimmed)
    }
}

fn is_scheme_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Strips a leading `scheme:` if the prefix is a valid scheme.
fn strip_scheme(url: &str) -> &str {
    match url.find(':') {
        Some(i)
            if i > 0
                && url.as_bytes()[0].is_ascii_alphabetic()
                && url.as_bytes()[..i].iter().copied().all(is_scheme_byte) =>
        {
            &url[i + 1..]
        }
        _ => url,
    }
}

/// Brackets must pair up and enclose an IPv6 address with nothing before `[`.
fn check_brackets(netloc: &str) -> Result<(), SplitError> {
    let open = netloc.contains('[');
    if open != netloc.contains(']') {
        return Err(SplitError::UnbalancedBrackets(netloc.to_string()));
    }
    if !open {
        return Ok(());
    }
    let hostinfo = netloc.rsplit_once('@').map_or(netloc, |(_, h)| h);
    let bad = || SplitError::BracketedHost(netloc.to_string());
    let (before, bracketed) = hostinfo.split_once('[').ok_or_else(bad)?;
    if !before.is_empty() {
        return Err(bad());
    }
    let (host, port) = bracketed.split_once(']').unwrap_or((bracketed, ""));
    if !port.is_empty() && !port.starts_with(':') {
        return Err(bad());
    }
    host.parse::<Ipv6Addr>().map(|_| ()).map_err(|_| bad())
}

pub(super) fn split(url: &str) -> Result<Split<'_>, SplitError> {
    let rest = strip_scheme(url);
    let (netloc, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after
                .find(|c: char| matches!(c, '/' | '?' | '#'))
                .unwrap_or(after.len());
            after.split_at(end)
        }
        None => ("", rest),
    };
    check_brackets(netloc)?;

    let path = rest.split_once('#').map_or(rest, |(p, _)| p);
    let path = path.split_once('?').map_or(path, |(p, _)| p);
    Ok(Split { netloc, path })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(url: &str) -> (&str, &str) {
        let s = split(url).unwrap();
        (s.netloc, s.path)
    }

    #[test]
    fn full_url() {
        assert_eq!(
            parts("https://u:p@host:8443/a/b?q=/x#/frag"),
            ("u:p@host:8443", "/a/b")
        );
    }

    #[test]
    fn no_path() {
        assert_eq!(parts("http://example.com"), ("example.com", ""));
        assert_eq!(parts("http://example.com?x=1"), ("example.com", ""));
    }

    #[test]
    fn no_scheme_is_all_path() {
        assert_eq!(parts("example.com/login"), ("", "example.com/login"));
        assert_eq!(parts("192.168.1.1"), ("", "192.168.1.1"));
        assert_eq!(parts("//example.com/p"), ("example.com", "/p"));
    }

    #[test]
    fn scheme_needs_valid_prefix() {
        assert_eq!(parts("1http://x/p"), ("", "1http://x/p"));
        assert_eq!(parts(":foo"), ("", ":foo"));
        assert_eq!(parts("a b:c"), ("", "a b:c"));
        assert_eq!(parts("localhost:8080/x"), ("", "8080/x"));
        assert_eq!(parts("mailto:a@b.example"), ("", "a@b.example"));
    }

    #[test]
    fn path_kept_as_typed() {
        assert_eq!(parts("http://x.com/a b").1, "/a b");
        assert_eq!(parts("http://x.com/a/../b").1, "/a/../b");
        assert_eq!(parts("http://x.com/%2e%2e/").1, "/%2e%2e/");
        assert_eq!(parts("http://x.com\\a\\b"), ("x.com\\a\\b", ""));
    }

    #[test]
    fn brackets() {
        assert_eq!(parts("http://[::1]:80/x"), ("[::1]:80", "/x"));
        assert!(matches!(
            split("http://[::1/x"),
            Err(SplitError::UnbalancedBrackets(_))
        ));
        assert!(matches!(
            split("http://]x/"),
            Err(SplitError::UnbalancedBrackets(_))
        ));
        assert!(split("http://[example.com]/").is_err());
        assert!(split("http://a[::1]/").is_err());
        assert!(split("http://[::1]x/").is_err());
        assert!(split("http://[127.0.0.1]/").is_err());
    }

    #[test]
    fn clean_strips_controls() {
        assert_eq!(clean("  \u{1}http://x/a"), "http://x/a");
        assert_eq!(clean("http://x/a\tb\r\nc"), "http://x/abc");
        assert!(matches!(clean("http://x/"), Cow::Borrowed(_)));
    }
}
