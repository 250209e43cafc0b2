//! pcbview-cli
//!
//! Runs hit tests and drags against the demo scene, without a window.

// Modules
pub(crate) mod cli;
pub(crate) mod drag;
pub(crate) mod hit;
pub(crate) mod inspect;
pub(crate) mod thicken;

// Renames
extern crate nalgebra as na;

fn main() -> anyhow::Result<()> {
    if let Err(e) = setup_logging() {
        eprintln!("failed to setup logging, Err: {e:?}");
    }

    cli::run()
}

fn setup_logging() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    tracing::debug!("... tracing subscriber initialized");
    Ok(())
}
