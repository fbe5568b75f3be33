//! CLI command handlers. Each command is in its own file.

mod check;
mod completions;
mod features;
mod schema;

pub use check::{run_check, CheckOptions};
pub use completions::run_completions;
pub use features::run_features;
pub use schema::run_schema;
