//! CLI for the urlguard phishing URL detector.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlguard_core::config::{self, OutputFormat};

use commands::{run_check, run_completions, run_features, run_schema, CheckOptions};

/// Top-level CLI for urlguard.
#[derive(Debug, Parser)]
#[command(name = "urlguard")]
#[command(about = "urlguard: lexical phishing URL detector", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show the feature vector, raw values and categories extracted from URLs.
    Features {
        /// URLs to inspect (any string is accepted).
        #[arg(required = true)]
        urls: Vec<String>,
        /// Print one JSON object per URL.
        #[arg(long)]
        json: bool,
    },

    /// Classify URLs as phishing or benign with a trained model.
    Check {
        /// URLs to classify.
        #[arg(required = true)]
        urls: Vec<String>,
        /// Model artifact (JSON). Defaults to `model_path` from config.toml.
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
        /// Flag URLs whose phishing probability is at least P instead of using the model's argmax.
        #[arg(long, value_name = "P", value_parser = parse_probability)]
        threshold: Option<f64>,
        /// Print one JSON report per URL.
        #[arg(long)]
        json: bool,
    },

    /// Print the feature schema in model input order.
    Schema,

    /// Generate shell completion scripts.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn parse_probability(s: &str) -> Result<f64, String> {
    let p: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{p} is not within [0, 1]"))
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let json_default = cfg.output == OutputFormat::Json;

        match cli.command {
            CliCommand::Features { urls, json } => run_features(&urls, json || json_default)?,
            CliCommand::Check {
                urls,
                model,
                threshold,
                json,
            } => {
                let opts = CheckOptions {
                    model_path: model.or(cfg.model_path),
                    threshold: threshold.or(cfg.decision_threshold),
                    json: json || json_default,
                };
                run_check(&urls, &opts)?;
            }
            CliCommand::Schema => run_schema()?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
