//! Shutdown on SIGINT / SIGTERM (Ctrl+C on Windows)
//!
//! Raw mode turns Ctrl+C into a key event, so in the TUI these mostly come
//! from `kill` or a closing terminal. Headless runs rely on them to abandon
//! a generation that is still in flight.

use std::fmt;
use std::future::Future;

use tokio::sync::mpsc;

use pyarch_core::prelude::*;

use crate::message::Message;

/// The OS request that ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => write!(f, "SIGINT"),
            ShutdownSignal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// Turn the first shutdown signal into a [`Message::Quit`]
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(forward_shutdown(wait_for_shutdown(), tx));
}

async fn forward_shutdown<F>(signal: F, tx: mpsc::Sender<Message>)
where
    F: Future<Output = Result<ShutdownSignal>>,
{
    match signal.await {
        Ok(signal) => {
            info!("{} received, quitting", signal);
            if tx.send(Message::Quit).await.is_err() {
                debug!("Engine already stopped, {} ignored", signal);
            }
        }
        Err(e) => warn!("Shutdown signals unavailable: {}", e),
    }
}

#[cfg(unix)]
async fn wait_for_shutdown() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| Error::terminal(format!("Cannot listen for SIGINT: {}", e)))?;
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("Cannot listen for SIGTERM: {}", e)))?;

    let received = tokio::select! {
        _ = sigint.recv() => ShutdownSignal::Interrupt,
        _ = sigterm.recv() => ShutdownSignal::Terminate,
    };
    Ok(received)
}

#[cfg(not(unix))]
async fn wait_for_shutdown() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Cannot listen for Ctrl+C: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signal_becomes_quit_message() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        forward_shutdown(async { Ok(ShutdownSignal::Terminate) }, tx).await;

        assert!(matches!(rx.recv().await, Some(Message::Quit)));
    }

    #[tokio::test]
    async fn test_unavailable_signals_send_nothing() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        forward_shutdown(async { Err(Error::terminal("no signal support")) }, tx).await;

        // Sender dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_signal_after_engine_stopped_is_ignored() {
        let (tx, rx) = mpsc::channel::<Message>(1);
        drop(rx);

        forward_shutdown(async { Ok(ShutdownSignal::Interrupt) }, tx).await;
    }

    #[tokio::test]
    async fn test_spawned_handler_waits_for_a_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        spawn_signal_handler(tx);
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_signal_names() {
        assert_eq!(ShutdownSignal::Interrupt.to_string(), "SIGINT");
        assert_eq!(ShutdownSignal::Terminate.to_string(), "SIGTERM");
    }
}
