//! TCP transport for the line protocol.
//!
//! The transport is deliberately thin: it accepts connections, frames
//! request lines, hands each complete line to the command interpreter, and
//! writes the single response line back. All protocol and store logic
//! lives behind the interpreter; a connection failure affects only that
//! connection.

pub mod config;

pub use config::{ConfigError, ServerConfig};

#[cfg(test)]
mod tests;

use crate::protocol::CommandInterpreter;
use crate::store::ports::TaskStore;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Errors that terminate the serve loop.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound to the configured address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address the bind was attempted on.
        addr: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}

/// Binds the configured listener and serves connections until ctrl-c.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] when the listener cannot be bound.
pub async fn run<S>(
    config: &ServerConfig,
    interpreter: Arc<CommandInterpreter<S>>,
) -> Result<(), ServerError>
where
    S: TaskStore + 'static,
{
    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_addr.clone(),
            source,
        })?;
    info!(addr = %config.bind_addr, "taskline listening");
    serve(listener, interpreter).await;
    Ok(())
}

/// Serves connections on an already-bound listener until ctrl-c.
///
/// Each connection runs on its own spawned task; connections share the
/// interpreter and, through it, the single task store. Accept failures
/// are logged and the loop continues.
pub async fn serve<S>(listener: TcpListener, interpreter: Arc<CommandInterpreter<S>>)
where
    S: TaskStore + 'static,
{
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("shutdown signal received, stopping listener");
                break;
            }

            conn = listener.accept() => {
                let (stream, peer) = match conn {
                    Ok(accepted) => accepted,
                    Err(err) => {
                        error!(err = %err, "accept error");
                        continue;
                    }
                };
                let connection_id = Uuid::new_v4();
                debug!(peer = %peer, %connection_id, "client connected");
                let handler = Arc::clone(&interpreter);
                tokio::spawn(async move {
                    if let Err(err) = serve_connection(stream, handler).await {
                        warn!(%connection_id, err = %err, "connection error");
                    }
                    debug!(%connection_id, "client disconnected");
                });
            }
        }
    }
}

/// Reads request lines from one connection until EOF.
///
/// Each complete line yields exactly one response line; the response is
/// written atomically before the next request is read.
async fn serve_connection<S>(
    stream: TcpStream,
    interpreter: Arc<CommandInterpreter<S>>,
) -> std::io::Result<()>
where
    S: TaskStore,
{
    let (reader, mut writer) = stream.into_split();
    let mut lines = BufReader::new(reader).lines();
    while let Some(line) = lines.next_line().await? {
        let response = interpreter.handle_line(&line).await;
        writer.write_all(response.to_string().as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }
    Ok(())
}
