// Graceful Shutdown Channel

use tokio::sync::watch;

/// Receiver half; the serve loop drains and exits once signalled.
#[derive(Clone)]
pub struct ShutdownToken {
    rx: watch::Receiver<bool>,
}

impl ShutdownToken {
    /// Resolve when shutdown is requested (immediately if it already was).
    pub async fn wait(mut self) {
        if *self.rx.borrow() {
            return;
        }
        let _ = self.rx.changed().await;
    }

    pub fn is_shutdown(&self) -> bool {
        *self.rx.borrow()
    }
}

/// Sender half, held by the process entry point.
pub struct ShutdownSender {
    tx: watch::Sender<bool>,
}

impl ShutdownSender {
    /// Ask the server to stop accepting and drain in-flight requests.
    pub fn shutdown(&self) {
        let _ = self.tx.send(true);
    }
}

pub fn shutdown_channel() -> (ShutdownSender, ShutdownToken) {
    let (tx, rx) = watch::channel(false);
    (ShutdownSender { tx }, ShutdownToken { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn wait_resolves_after_signal() {
        let (tx, token) = shutdown_channel();
        assert!(!token.is_shutdown());

        let waiter = tokio::spawn(token.wait());
        tx.shutdown();
        tokio::time::timeout(std::time::Duration::from_secs(1), waiter)
            .await
            .expect("wait should resolve promptly")
            .expect("waiter task panicked");
    }

    #[tokio::test]
    async fn wait_resolves_immediately_when_already_signalled() {
        let (tx, token) = shutdown_channel();
        tx.shutdown();
        assert!(token.is_shutdown());
        token.wait().await;
    }
}
