//! `urlguard schema` – print the model input columns in order.

use crate::cli::render;
use anyhow::Result;
use std::io;

pub fn run_schema() -> Result<()> {
    render::write_schema(&mut io::stdout().lock())?;
    Ok(())
}
