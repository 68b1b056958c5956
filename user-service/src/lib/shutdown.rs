//! Process termination fan-out.
//!
//! One [`ShutdownTrigger`] fires once; every cloned [`Shutdown`] handed to a
//! server resolves when it does, so in-flight requests are drained before exit.

use tokio::signal;
use tokio::sync::watch;

pub struct ShutdownTrigger {
    sender: watch::Sender<bool>,
}

#[derive(Clone)]
pub struct Shutdown {
    receiver: watch::Receiver<bool>,
}

pub fn channel() -> (ShutdownTrigger, Shutdown) {
    let (sender, receiver) = watch::channel(false);
    (ShutdownTrigger { sender }, Shutdown { receiver })
}

impl ShutdownTrigger {
    pub fn trigger(&self) {
        self.sender.send_replace(true);
    }

    /// Wait for SIGINT or SIGTERM, then fire.
    pub async fn trigger_on_signal(self) {
        wait_for_signal().await;
        tracing::info!("Shutdown signal received, draining connections");
        self.trigger();
    }
}

impl Shutdown {
    /// Resolves once the trigger fires or is dropped.
    pub async fn recv(mut self) {
        let _ = self.receiver.wait_for(|stopping| *stopping).await;
    }
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
