//! OS signal handling.
//!
//! # Responsibilities
//! - Register signal handlers (SIGTERM, SIGINT)
//! - Translate the first signal into the internal shutdown broadcast
//!
//! Uses Tokio's async-safe signal handling; on non-Unix targets only
//! Ctrl-C is wired.

use tracing::info;

use crate::lifecycle::Shutdown;

/// Wait for a termination signal, then trigger shutdown.
///
/// Consumes the coordinator so this path can fire at most once.
pub async fn listen(shutdown: Shutdown) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result?,
            _ = sigterm.recv() => {}
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c().await?;

    info!("termination signal received, shutting down");
    shutdown.trigger();
    Ok(())
}
