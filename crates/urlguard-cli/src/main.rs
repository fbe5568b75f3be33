use urlguard_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    let sink = logging::init();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), log = %sink, "urlguard starting");

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("urlguard error: {:#}", err);
        std::process::exit(1);
    }
}
