use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, prelude::*};

/// Set up the global subscriber.
///
/// Output goes to stdout alongside everything else the tool prints. The
/// default level is `warn`, `--verbose` raises it to `info`, and `RUST_LOG`
/// overrides both. Colour is only used when stdout is a terminal.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "info" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging initialization failed: {e}"))?;

    Ok(())
}
