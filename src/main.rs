//! sentinel — a terminal console for storage-infrastructure monitoring.
//!
//! Run with:  `RUST_LOG=info API_KEY=<key> sentinel`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    // Logs go to stderr so they never fight the alternate-screen UI.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("sentinel v{} starting", env!("CARGO_PKG_VERSION"));

    let config = sentinel_config::load(sentinel_config::default_path())?;
    sentinel_tui::run(config).map_err(Into::into)
}
