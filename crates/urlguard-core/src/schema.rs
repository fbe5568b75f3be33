//! Named feature schema shared by the extractor and every classifier adapter.
//!
//! The trained model consumes an 11-slot vector whose column order is fixed
//! at training time. The order lives here, once; both sides index through it
//! and classifier adapters validate their column list against it when built.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of slots in a [`FeatureVector`].
pub const FEATURE_COUNT: usize = 11;

/// Schema columns, declared in vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FeatureName {
    /// Training-time index column; always 0. Drop at the next retrain.
    #[serde(rename = "Unnamed: 0")]
    Placeholder,
    NumDots,
    UrlLength,
    NumDash,
    AtSymbol,
    IpAddress,
    HttpsInHostname,
    PathLevel,
    PathLength,
    NumNumericChars,
    SuspiciousKeyword,
}

/// How a column's value is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Fixed value, carries no signal.
    Constant,
    /// Non-negative occurrence count or length.
    Count,
    /// 0 or 1.
    Flag,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValueKind::Constant => "constant",
            ValueKind::Count => "count",
            ValueKind::Flag => "flag",
        };
        f.write_str(s)
    }
}

/// The ordered (name, kind) schema. Index in this table == index in the vector.
pub const FEATURE_SCHEMA: [(FeatureName, ValueKind); FEATURE_COUNT] = [
    (FeatureName::Placeholder, ValueKind::Constant),
    (FeatureName::NumDots, ValueKind::Count),
    (FeatureName::UrlLength, ValueKind::Count),
    (FeatureName::NumDash, ValueKind::Count),
    (FeatureName::AtSymbol, ValueKind::Count),
    (FeatureName::IpAddress, ValueKind::Flag),
    (FeatureName::HttpsInHostname, ValueKind::Flag),
    (FeatureName::PathLevel, ValueKind::Count),
    (FeatureName::PathLength, ValueKind::Count),
    (FeatureName::NumNumericChars, ValueKind::Count),
    (FeatureName::SuspiciousKeyword, ValueKind::Flag),
];

impl FeatureName {
    /// Column name as the trained model knows it.
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureName::Placeholder => "Unnamed: 0",
            FeatureName::NumDots => "NumDots",
            FeatureName::UrlLength => "UrlLength",
            FeatureName::NumDash => "NumDash",
            FeatureName::AtSymbol => "AtSymbol",
            FeatureName::IpAddress => "IpAddress",
            FeatureName::HttpsInHostname => "HttpsInHostname",
            FeatureName::PathLevel => "PathLevel",
            FeatureName::PathLength => "PathLength",
            FeatureName::NumNumericChars => "NumNumericChars",
            FeatureName::SuspiciousKeyword => "SuspiciousKeyword",
        }
    }

    /// Position of this column in the vector.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no schema column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown feature name: {0:?}")]
pub struct UnknownFeature(pub String);

impl FromStr for FeatureName {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FEATURE_SCHEMA
            .iter()
            .map(|(name, _)| *name)
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownFeature(s.to_string()))
    }
}

/// Classifier column list disagrees with [`FEATURE_SCHEMA`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("expected {expected} feature columns, model declares {actual}")]
    Count { expected: usize, actual: usize },
    #[error("feature column {index}: expected {expected:?}, model declares {actual:?}")]
    Column {
        index: usize,
        expected: &'static str,
        actual: String,
    },
}

/// Checks that `names` is exactly the schema's column list, in order.
pub fn check_schema<S: AsRef<str>>(names: &[S]) -> Result<(), SchemaError> {
    if names.len() != FEATURE_COUNT {
        return Err(SchemaError::Count {
            expected: FEATURE_COUNT,
            actual: names.len(),
        });
    }
    for (index, ((expected, _), actual)) in FEATURE_SCHEMA.iter().zip(names).enumerate() {
        if expected.as_str() != actual.as_ref() {
            return Err(SchemaError::Column {
                index,
                expected: expected.as_str(),
                actual: actual.as_ref().to_string(),
            });
        }
    }
    Ok(())
}

/// Column names in schema order.
pub fn column_names() -> Vec<&'static str> {
    FEATURE_SCHEMA.iter().map(|(name, _)| name.as_str()).collect()
}

/// Model input: one value per schema column, in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// All-zero vector (placeholder included).
    pub fn zeroed() -> Self {
        Self([0.0; FEATURE_COUNT])
    }

    pub fn get(&self, name: FeatureName) -> f64 {
        self.0[name.index()]
    }

    pub fn set(&mut self, name: FeatureName, value: f64) {
        if name != FeatureName::Placeholder {
            self.0[name.index()] = value;
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_order_matches_enum_discriminants() {
        for (i, (name, _)) in FEATURE_SCHEMA.iter().enumerate() {
            assert_eq!(name.index(), i, "{name} out of place");
        }
    }

    #[test]
    fn column_names_in_training_order() {
        assert_eq!(
            column_names(),
            vec![
                "Unnamed: 0",
                "NumDots",
                "UrlLength",
                "NumDash",
                "AtSymbol",
                "IpAddress",
                "HttpsInHostname",
                "PathLevel",
                "PathLength",
                "NumNumericChars",
                "SuspiciousKeyword",
            ]
        );
    }

    #[test]
    fn parse_feature_names() {
        assert_eq!("NumDash".parse::<FeatureName>(), Ok(FeatureName::NumDash));
        assert_eq!(
            "Unnamed: 0".parse::<FeatureName>(),
            Ok(FeatureName::Placeholder)
        );
        assert!("numdash".parse::<FeatureName>().is_err());
        assert!("".parse::<FeatureName>().is_err());
    }

    #[test]
    fn check_schema_accepts_exact_order() {
        assert!(check_schema(&column_names()).is_ok());
    }

    #[test]
    fn check_schema_rejects_wrong_count() {
        let mut names = column_names();
        names.pop();
        assert_eq!(
            check_schema(&names),
            Err(SchemaError::Count {
                expected: 11,
                actual: 10
            })
        );
    }

    #[test]
    fn check_schema_rejects_reordering() {
        let mut names = column_names();
        names.swap(1, 2);
        match check_schema(&names) {
            Err(SchemaError::Column {
                index,
                expected,
                actual,
            }) => {
                assert_eq!(index, 1);
                assert_eq!(expected, "NumDots");
                assert_eq!(actual, "UrlLength");
            }
            other => panic!("expected column mismatch, got {other:?}"),
        }
    }

    #[test]
    fn placeholder_slot_cannot_be_set() {
        let mut v = FeatureVector::zeroed();
        v.set(FeatureName::Placeholder, 7.0);
        v.set(FeatureName::AtSymbol, 2.0);
        assert_eq!(v.get(FeatureName::Placeholder), 0.0);
        assert_eq!(v.get(FeatureName::AtSymbol), 2.0);
        assert_eq!(v.as_slice().len(), FEATURE_COUNT);
    }

    #[test]
    fn vector_serializes_as_plain_array() {
        let v = FeatureVector::zeroed();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0]");
    }
}
