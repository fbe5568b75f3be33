//! Best-effort URL decomposition.
//!
//! Feature extraction only needs the hostname and the path, both taken from
//! the raw text rather than a normalized URL. Text without `scheme://` has no
//! hostname and is all path, so `example.com/login` has path
//! `example.com/login`. Parsing never fails from the caller's point of view:
//! a malformed authority (unbalanced or misused IPv6 brackets) decomposes into
//! an empty hostname and an empty path.

mod host;
mod split;

pub use host::{https_in_hostname, is_ip_literal};
pub use split::SplitError;

/// Hostname and path of a URL. Both may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    pub hostname: String,
    pub path: String,
}

impl ParsedUrl {
    /// Decomposes `input`; parse failures yield the empty decomposition.
    pub fn parse(input: &str) -> Self {
        match Self::try_parse(input) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::trace!(error = %err, "unparseable url, using empty host and path");
                Self::default()
            }
        }
    }

    pub fn try_parse(input: &str) -> Result<Self, SplitError> {
        let cleaned = split::clean(input);
        let parts = split::split(&cleaned)?;
        Ok(Self {
            hostname: host::hostname_from_netloc(parts.netloc),
            path: parts.path.to_string(),
        })
    }
}
