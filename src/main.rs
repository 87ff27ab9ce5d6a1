use anyhow::Context;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Log filter variable, e.g. `HALLWAY_LOG=hallway=debug`.
const LOG_ENV: &str = "HALLWAY_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    hallway::run().context("hallway failed")
}
