//! `urlguard check` – classify URLs with a trained model.

use crate::cli::render;
use anyhow::{bail, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use urlguard_core::analyze;
use urlguard_core::classifier::{Classifier, ModelArtifact, Thresholded};
use urlguard_core::config;

/// Resolved options: CLI flags already merged over config.toml.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub model_path: Option<PathBuf>,
    pub threshold: Option<f64>,
    pub json: bool,
}

fn load_classifier(opts: &CheckOptions) -> Result<Box<dyn Classifier>> {
    let Some(path) = opts.model_path.as_deref() else {
        let cfg_path = config::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "config.toml".to_string());
        bail!("no model configured; pass --model or set model_path in {cfg_path}");
    };
    let artifact = ModelArtifact::load(path)?;
    Ok(match opts.threshold {
        Some(t) => {
            tracing::debug!(threshold = t, "using fixed decision threshold");
            Box::new(Thresholded::new(artifact.model, t))
        }
        None => Box::new(artifact.model),
    })
}

pub fn run_check(urls: &[String], opts: &CheckOptions) -> Result<()> {
    let classifier = load_classifier(opts)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut failed = 0usize;
    for (i, url) in urls.iter().enumerate() {
        if url.is_empty() {
            eprintln!("warning: skipping empty URL");
            continue;
        }
        let report = match analyze(url, classifier.as_ref()) {
            Ok(r) => r,
            Err(err) => {
                eprintln!("{url}: {err}");
                failed += 1;
                continue;
            }
        };
        if opts.json {
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            if i > 0 {
                writeln!(out)?;
            }
            render::write_report(&mut out, &report)?;
        }
    }

    if failed > 0 {
        bail!("{failed} URL(s) could not be processed");
    }
    Ok(())
}
