//! Classifier boundary.
//!
//! A classifier consumes a [`FeatureVector`] and answers with a verdict and
//! the probability of the phishing class. Adapters declare the column list
//! they were trained on; [`crate::schema::check_schema`] runs against it when
//! an adapter is built, so a model exported with a different column order is
//! rejected up front instead of silently mis-scoring.

mod artifact;
mod naive_bayes;

pub use artifact::{ModelArtifact, ModelError, ModelMetadata};
pub use naive_bayes::{GaussianNb, GaussianNbParams, ParamError};

#[cfg(test)]
pub(crate) use naive_bayes::tests::params as test_params;

use crate::schema::FeatureVector;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Binary model output. Discriminants match the trained labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Benign = 0,
    Phishing = 1,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Benign => f.write_str("benign"),
            Verdict::Phishing => f.write_str("phishing"),
        }
    }
}

/// Verdict plus phishing-class probability in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub verdict: Verdict,
    pub probability: f64,
}

impl Prediction {
    /// Re-decides the verdict with a probability cut-off instead of argmax.
    pub fn with_threshold(self, threshold: f64) -> Self {
        let verdict = if self.probability >= threshold {
            Verdict::Phishing
        } else {
            Verdict::Benign
        };
        Self { verdict, ..self }
    }
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("feature {index} is not finite ({value})")]
    NonFiniteInput { index: usize, value: f64 },
    #[error("model produced no usable probability")]
    Degenerate,
}

/// `predict(feature_vector) -> {label, probability}`.
pub trait Classifier {
    /// Column names the model was trained on, in input order.
    fn feature_names(&self) -> &[String];

    fn predict(&self, vector: &FeatureVector) -> Result<Prediction, ClassifierError>;
}

/// Wraps a classifier with a fixed decision threshold on the phishing probability.
pub struct Thresholded<C> {
    inner: C,
    threshold: f64,
}

impl<C: Classifier> Thresholded<C> {
    pub fn new(inner: C, threshold: f64) -> Self {
        Self { inner, threshold }
    }
}

impl<C: Classifier> Classifier for Thresholded<C> {
    fn feature_names(&self) -> &[String] {
        self.inner.feature_names()
    }

    fn predict(&self, vector: &FeatureVector) -> Result<Prediction, ClassifierError> {
        self.inner
            .predict(vector)
            .map(|p| p.with_threshold(self.threshold))
    }
}
