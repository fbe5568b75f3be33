//! Extraction followed by classification, for one URL.

use crate::classifier::{Classifier, Prediction};
use crate::features::{extract, Extraction};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque failure shown to users; the cause goes to the log only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to process URL")]
pub struct ProcessingError;

/// Outcome for one URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub url: String,
    pub prediction: Prediction,
    #[serde(flatten)]
    pub extraction: Extraction,
}

/// Extracts features from `url` and asks `classifier` for a verdict.
pub fn analyze(url: &str, classifier: &dyn Classifier) -> Result<Report, ProcessingError> {
    let extraction = extract(url);
    let prediction = classifier.predict(&extraction.vector).map_err(|err| {
        tracing::warn!(error = %err, "classifier failed");
        ProcessingError
    })?;
    tracing::debug!(
        verdict = %prediction.verdict,
        probability = prediction.probability,
        "classified url"
    );
    Ok(Report {
        url: url.to_string(),
        prediction,
        extraction,
    })
}
