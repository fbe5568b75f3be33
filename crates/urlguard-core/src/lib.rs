//! Lexical phishing-URL detection.
//!
//! [`features::extract`] turns any string into the 11-slot vector the trained
//! model expects, along with raw values and display categories;
//! [`analysis::analyze`] feeds that vector to a [`classifier::Classifier`].

pub mod config;
pub mod logging;

pub mod analysis;
pub mod categorize;
pub mod classifier;
pub mod features;
pub mod schema;
pub mod url_model;

pub use analysis::{analyze, ProcessingError, Report};
pub use categorize::{categorize, Category};
pub use features::{extract, Extraction};
pub use schema::{FeatureName, FeatureVector, FEATURE_COUNT, FEATURE_SCHEMA};
