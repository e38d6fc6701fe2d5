//! Smart light daemon binary.
//!
//! Reads commands from stdin until it closes, writes directive groups to
//! stdout and logs to stderr.

use clap::Parser;
use smartlight_app::Runtime;
use smartlight_core::Engine;
use smartlight_daemon::{Args, StdioDriver};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    // RUST_LOG wins over --log
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&args.log))?;
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init()?;

    let config = args.engine_config();
    info!(debounce = ?config.debounce, ambient = %config.palette.ambient, "starting smartlight");

    let driver = StdioDriver::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    let mut runtime = Runtime::new(driver, Engine::new(config));
    runtime.run().await?;

    Ok(())
}
