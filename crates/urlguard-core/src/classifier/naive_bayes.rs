//! Gaussian Naive Bayes evaluator over exported parameters.
//!
//! Parameter names follow scikit-learn's `GaussianNB` attributes
//! (`classes_`, `class_prior_`, `theta_`, `var_`, `feature_names_in_`
//! without the trailing underscores), so an export is a straight dump of the
//! fitted estimator.

use super::{Classifier, ClassifierError, Prediction, Verdict};
use crate::schema::{check_schema, FeatureVector, SchemaError, FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

/// Fitted parameters, rows indexed by class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianNbParams {
    pub feature_names: Vec<String>,
    pub classes: Vec<i64>,
    pub class_prior: Vec<f64>,
    pub theta: Vec<Vec<f64>>,
    pub var: Vec<Vec<f64>>,
}

#[derive(Debug, Error)]
pub enum ParamError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("classes must be [0, 1], got {0:?}")]
    Classes(Vec<i64>),
    #[error("{field}: expected {expected} entries, got {actual}")]
    Shape {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("theta[{class}][{index}] is not finite")]
    Mean { class: usize, index: usize },
    #[error("var[{class}][{index}] must be positive and finite, got {value}")]
    Variance {
        class: usize,
        index: usize,
        value: f64,
    },
    #[error("class priors must lie in [0, 1] and sum to 1, got {0:?}")]
    Prior(Vec<f64>),
}

const PRIOR_SUM_TOLERANCE: f64 = 1e-6;

/// Validated two-class Gaussian NB model.
#[derive(Debug, Clone)]
pub struct GaussianNb {
    feature_names: Vec<String>,
    log_prior: [f64; 2],
    theta: [[f64; FEATURE_COUNT]; 2],
    var: [[f64; FEATURE_COUNT]; 2],
}

fn shape(field: &'static str, expected: usize, actual: usize) -> Result<(), ParamError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ParamError::Shape {
            field,
            expected,
            actual,
        })
    }
}

fn to_rows(
    field: &'static str,
    rows: &[Vec<f64>],
) -> Result<[[f64; FEATURE_COUNT]; 2], ParamError> {
    shape(field, 2, rows.len())?;
    let mut out = [[0.0; FEATURE_COUNT]; 2];
    for (class, row) in rows.iter().enumerate() {
        shape(field, FEATURE_COUNT, row.len())?;
        out[class].copy_from_slice(row);
    }
    Ok(out)
}

impl GaussianNb {
    pub fn from_params(params: GaussianNbParams) -> Result<Self, ParamError> {
        check_schema(&params.feature_names)?;
        if params.classes != [0, 1] {
            return Err(ParamError::Classes(params.classes));
        }

        shape("class_prior", 2, params.class_prior.len())?;
        let prior_ok = params
            .class_prior
            .iter()
            .all(|p| p.is_finite() && (0.0..=1.0).contains(p))
            && (params.class_prior.iter().sum::<f64>() - 1.0).abs() < PRIOR_SUM_TOLERANCE;
        if !prior_ok {
            return Err(ParamError::Prior(params.class_prior));
        }

        let theta = to_rows("theta", &params.theta)?;
        let var = to_rows("var", &params.var)?;
        for class in 0..2 {
            for index in 0..FEATURE_COUNT {
                if !theta[class][index].is_finite() {
                    return Err(ParamError::Mean { class, index });
                }
                let value = var[class][index];
                if !(value.is_finite() && value > 0.0) {
                    return Err(ParamError::Variance {
                        class,
                        index,
                        value,
                    });
                }
            }
        }

        Ok(Self {
            feature_names: params.feature_names,
            log_prior: [params.class_prior[0].ln(), params.class_prior[1].ln()],
            theta,
            var,
        })
    }

    /// Per-class joint log likelihood of `x`.
    fn joint_log_likelihood(&self, x: &[f64; FEATURE_COUNT]) -> [f64; 2] {
        let mut jll = self.log_prior;
        for (class, acc) in jll.iter_mut().enumerate() {
            for i in 0..FEATURE_COUNT {
                let var = self.var[class][i];
                let diff = x[i] - self.theta[class][i];
                *acc += -0.5 * (2.0 * PI * var).ln() - diff * diff / (2.0 * var);
            }
        }
        jll
    }
}

impl Classifier for GaussianNb {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, vector: &FeatureVector) -> Result<Prediction, ClassifierError> {
        let x = vector.as_array();
        if let Some((index, &value)) = x.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ClassifierError::NonFiniteInput { index, value });
        }

        let [benign, phishing] = self.joint_log_likelihood(x);
        let max = benign.max(phishing);
        if !max.is_finite() {
            return Err(ClassifierError::Degenerate);
        }
        // log-sum-exp
        let b = (benign - max).exp();
        let p = (phishing - max).exp();
        let probability = p / (b + p);
        if !probability.is_finite() {
            return Err(ClassifierError::Degenerate);
        }

        // Ties go to the first class, as argmax does.
        let verdict = if phishing > benign {
            Verdict::Phishing
        } else {
            Verdict::Benign
        };
        Ok(Prediction {
            verdict,
            probability,
        })
    }
}
