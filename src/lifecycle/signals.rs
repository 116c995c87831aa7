//! OS signal handling.
//!
//! # Responsibilities
//! - Wait for SIGINT/SIGTERM (Ctrl-C on other platforms)
//! - Translate the first signal into a [`CancelSignal`] trigger

use tokio::task::JoinHandle;

use crate::lifecycle::cancel::CancelSignal;

#[cfg(unix)]
pub async fn wait_for_interrupt() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = sigint.recv() => {},
        _ = sigterm.recv() => {},
    }
    Ok(())
}

#[cfg(not(unix))]
pub async fn wait_for_interrupt() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}

/// Spawn a task that fires `cancel` on the first interrupt.
///
/// The task exits on its own if `cancel` fires for another reason.
pub fn spawn_interrupt_handler(cancel: CancelSignal) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            result = wait_for_interrupt() => match result {
                Ok(()) => {
                    tracing::info!("Interrupt received, cancelling");
                    cancel.trigger();
                }
                Err(e) => tracing::warn!(error = %e, "Failed to install signal handlers"),
            },
            _ = cancel.cancelled() => {}
        }
    })
}
