//! `urlguard features` – show what the extractor sees in each URL.

use crate::cli::render;
use anyhow::Result;
use std::io::{self, Write};
use urlguard_core::extract;

pub fn run_features(urls: &[String], json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for url in urls {
        if url.is_empty() {
            eprintln!("warning: skipping empty URL");
            continue;
        }
        let extraction = extract(url);
        if json {
            let value = serde_json::json!({ "url": url, "features": extraction });
            writeln!(out, "{}", serde_json::to_string(&value)?)?;
        } else {
            render::write_extraction(&mut out, url, &extraction)?;
        }
    }
    Ok(())
}
