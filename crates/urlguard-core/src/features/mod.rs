//! URL → feature vector.
//!
//! [`extract`] is a total function: every input string, however malformed,
//! produces a full 11-slot vector, the raw values behind it and the
//! categorical labels shown to users. Missing URL components count as empty
//! strings and so contribute zeros.

mod lexical;

pub use lexical::{has_suspicious_keyword, SUSPICIOUS_KEYWORDS};

use crate::categorize::{categorize_feature, Category};
use crate::schema::{FeatureName, FeatureVector, FEATURE_SCHEMA};
use crate::url_model::{https_in_hostname, is_ip_literal, ParsedUrl};
use lexical::{char_len, count_char, count_decimal_digits};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw integer value of every non-placeholder feature, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawValues(BTreeMap<FeatureName, u64>);

impl RawValues {
    /// Value of `name`; `None` only for the placeholder.
    pub fn get(&self, name: FeatureName) -> Option<u64> {
        self.0.get(&name).copied()
    }

    /// Values in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureName, u64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Binary label for the keyword flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

impl From<bool> for YesNo {
    fn from(b: bool) -> Self {
        if b {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

/// Human-readable labels for the headline features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categories {
    #[serde(rename = "NumDots")]
    pub num_dots: Category,
    #[serde(rename = "UrlLength")]
    pub url_length: Category,
    #[serde(rename = "NumDash")]
    pub num_dash: Category,
    #[serde(rename = "SuspiciousKeyword")]
    pub suspicious_keyword: YesNo,
}

impl Categories {
    /// Label for `name`, if it is one of the labelled features.
    pub fn get(&self, name: FeatureName) -> Option<&'static str> {
        match name {
            FeatureName::NumDots => Some(self.num_dots.as_str()),
            FeatureName::UrlLength => Some(self.url_length.as_str()),
            FeatureName::NumDash => Some(self.num_dash.as_str()),
            FeatureName::SuspiciousKeyword => Some(self.suspicious_keyword.as_str()),
            _ => None,
        }
    }
}

/// Everything derived from one URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    pub vector: FeatureVector,
    pub categories: Categories,
    pub raw: RawValues,
}

/// Computes one feature from the full URL text and its decomposition.
fn compute(name: FeatureName, url: &str, parsed: &ParsedUrl) -> u64 {
    match name {
        FeatureName::Placeholder => 0,
        FeatureName::NumDots => count_char(url, '.'),
        FeatureName::UrlLength => char_len(url),
        FeatureName::NumDash => count_char(url, '-'),
        FeatureName::AtSymbol => count_char(url, '@'),
        FeatureName::IpAddress => is_ip_literal(&parsed.hostname) as u64,
        FeatureName::HttpsInHostname => https_in_hostname(&parsed.hostname) as u64,
        FeatureName::PathLevel => count_char(&parsed.path, '/'),
        FeatureName::PathLength => char_len(&parsed.path),
        FeatureName::NumNumericChars => count_decimal_digits(url),
        FeatureName::SuspiciousKeyword => has_suspicious_keyword(url) as u64,
    }
}

/// Extracts the feature vector, categories and raw values for `url`.
pub fn extract(url: &str) -> Extraction {
    let parsed = ParsedUrl::parse(url);

    let mut vector = FeatureVector::zeroed();
    let mut raw = BTreeMap::new();
    for (name, _) in FEATURE_SCHEMA.iter().skip(1) {
        let value = compute(*name, url, &parsed);
        vector.set(*name, value as f64);
        raw.insert(*name, value);
    }
    let raw = RawValues(raw);

    let bucket = |name: FeatureName| categorize_feature(name, vector.get(name));
    let categories = Categories {
        num_dots: bucket(FeatureName::NumDots),
        url_length: bucket(FeatureName::UrlLength),
        num_dash: bucket(FeatureName::NumDash),
        suspicious_keyword: YesNo::from(vector.get(FeatureName::SuspiciousKeyword) == 1.0),
    };

    tracing::trace!(url_len = url.len(), raw = ?raw, "extracted url features");

    Extraction {
        vector,
        categories,
        raw,
    }
}
