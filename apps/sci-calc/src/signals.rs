//! Shutdown trigger for `sci-calc serve`.

use std::future::Future;
use std::io;

use tokio_util::sync::CancellationToken;

/// What ended the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl ShutdownSignal {
    fn name(self) -> &'static str {
        match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        }
    }
}

/// Cancel `cancel` on Ctrl-C or SIGTERM.
pub async fn shutdown_signal(cancel: CancellationToken) {
    cancel_on(cancel, next_signal()).await;
}

/// Cancel `cancel` once `signal` resolves.
///
/// Returns early when the token is cancelled elsewhere. If the handler could
/// not be installed the token is left alone and the server runs until killed.
pub async fn cancel_on<F>(cancel: CancellationToken, signal: F)
where
    F: Future<Output = io::Result<ShutdownSignal>>,
{
    let received = tokio::select! {
        () = cancel.cancelled() => return,
        received = signal => received,
    };
    match received {
        Ok(signal) => {
            tracing::info!(signal = signal.name(), "shutting down HTTP server");
            cancel.cancel();
        }
        Err(e) => {
            tracing::error!(error = %e, "cannot listen for shutdown signals");
        }
    }
}

#[cfg(unix)]
async fn next_signal() -> io::Result<ShutdownSignal> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result.map(|()| ShutdownSignal::Interrupt),
        _ = terminate.recv() => Ok(ShutdownSignal::Terminate),
    }
}

#[cfg(not(unix))]
async fn next_signal() -> io::Result<ShutdownSignal> {
    tokio::signal::ctrl_c().await?;
    Ok(ShutdownSignal::Interrupt)
}
