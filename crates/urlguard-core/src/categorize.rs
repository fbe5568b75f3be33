//! Ordinal risk buckets for raw feature values.
//!
//! Buckets come from a threshold table rather than per-feature branches: each
//! bucketed feature lists its (bound, category) rows in order, the first row
//! whose bound admits the value wins, and values past every row are `High`.

use crate::schema::FeatureName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-level ordinal bucket, plus the answer for features that have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Low,
    Medium,
    High,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Low => "Low",
            Category::Medium => "Medium",
            Category::High => "High",
            Category::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Admission test for one threshold row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// value <= limit
    AtMost(f64),
    /// value == limit
    Exactly(f64),
}

impl Bound {
    fn admits(self, value: f64) -> bool {
        match self {
            Bound::AtMost(limit) => value <= limit,
            Bound::Exactly(limit) => value == limit,
        }
    }
}

/// Feature → ordered threshold rows. Fallthrough is [`Category::High`].
pub const THRESHOLDS: &[(FeatureName, &[(Bound, Category)])] = &[
    (
        FeatureName::NumDots,
        &[
            (Bound::AtMost(0.0), Category::Low),
            (Bound::AtMost(2.0), Category::Medium),
        ],
    ),
    (
        FeatureName::UrlLength,
        &[
            (Bound::AtMost(50.0), Category::Low),
            (Bound::AtMost(100.0), Category::Medium),
        ],
    ),
    (
        FeatureName::NumDash,
        &[
            (Bound::Exactly(0.0), Category::Low),
            (Bound::AtMost(3.0), Category::Medium),
        ],
    ),
];

/// Buckets `value` for a feature given by column name.
///
/// Total over all inputs: names outside the threshold table, including
/// strings that name no feature at all, give [`Category::NotApplicable`].
pub fn categorize(feature_name: &str, value: f64) -> Category {
    match feature_name.parse::<FeatureName>() {
        Ok(name) => categorize_feature(name, value),
        Err(_) => Category::NotApplicable,
    }
}

/// Typed form of [`categorize`].
pub fn categorize_feature(name: FeatureName, value: f64) -> Category {
    let Some((_, rows)) = THRESHOLDS.iter().find(|(n, _)| *n == name) else {
        return Category::NotApplicable;
    };
    rows.iter()
        .find(|(bound, _)| bound.admits(value))
        .map(|(_, category)| *category)
        .unwrap_or(Category::High)
}
