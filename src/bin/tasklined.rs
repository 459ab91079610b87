//! Taskline server daemon.
//!
//! Usage:
//!
//! ```text
//! tasklined [config.json]
//! ```
//!
//! Without an argument the configuration comes from the environment
//! (`TASKLINE_ADDR`, default `127.0.0.1:7433`). The optional JSON config
//! file has the shape:
//!
//! ```json
//! {
//!   "bind_addr": "127.0.0.1:7433"
//! }
//! ```

use mockable::DefaultClock;
use std::path::Path;
use std::sync::Arc;
use taskline::protocol::CommandInterpreter;
use taskline::server::{self, ConfigError, ServerConfig, ServerError};
use taskline::store::adapters::memory::InMemoryTaskStore;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Fatal startup failures.
#[derive(Debug, Error)]
enum MainError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The server could not start.
    #[error(transparent)]
    Server(#[from] ServerError),
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = std::env::args().nth(1).map_or_else(
        || Ok(ServerConfig::from_env()),
        |path| ServerConfig::from_json_file(Path::new(&path)),
    )?;

    let store = Arc::new(InMemoryTaskStore::new(Arc::new(DefaultClock)));
    let interpreter = Arc::new(CommandInterpreter::new(store));
    server::run(&config, interpreter).await?;
    Ok(())
}
