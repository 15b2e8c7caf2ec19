use std::fmt;
use std::io;

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

/// Process signal that ends a session early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interruption {
    Terminate,
    Interrupt,
    Hangup,
}

impl fmt::Display for Interruption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interruption::Terminate => write!(f, "SIGTERM"),
            Interruption::Interrupt => write!(f, "SIGINT"),
            Interruption::Hangup => write!(f, "SIGHUP"),
        }
    }
}

/// Listens for terminate, interrupt and hangup.
///
/// Install it before the quiz starts so a signal arriving during startup
/// is not lost. Must be created inside a tokio runtime.
pub struct ShutdownSignals {
    #[cfg(unix)]
    terminate: Signal,
    #[cfg(unix)]
    interrupt: Signal,
    #[cfg(unix)]
    hangup: Signal,
}

impl ShutdownSignals {
    #[cfg(unix)]
    pub fn install() -> io::Result<Self> {
        Ok(Self {
            terminate: signal(SignalKind::terminate())?,
            interrupt: signal(SignalKind::interrupt())?,
            hangup: signal(SignalKind::hangup())?,
        })
    }

    #[cfg(not(unix))]
    pub fn install() -> io::Result<Self> {
        Ok(Self {})
    }

    /// Wait for the first signal
    #[cfg(unix)]
    pub async fn recv(&mut self) -> Interruption {
        tokio::select! {
            _ = self.terminate.recv() => Interruption::Terminate,
            _ = self.interrupt.recv() => Interruption::Interrupt,
            _ = self.hangup.recv() => Interruption::Hangup,
        }
    }

    /// Wait for Ctrl-C, the only interruption available here
    #[cfg(not(unix))]
    pub async fn recv(&mut self) -> Interruption {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Ctrl-C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
        Interruption::Interrupt
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::process::Command;
    use std::time::Duration;

    #[tokio::test]
    async fn test_hangup_is_received() {
        let mut signals = ShutdownSignals::install().unwrap();

        let status = Command::new("kill")
            .args(["-HUP", &std::process::id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());

        let received = tokio::time::timeout(Duration::from_secs(5), signals.recv())
            .await
            .unwrap();
        assert_eq!(received, Interruption::Hangup);
    }

    #[test]
    fn test_display() {
        assert_eq!(Interruption::Terminate.to_string(), "SIGTERM");
        assert_eq!(Interruption::Interrupt.to_string(), "SIGINT");
        assert_eq!(Interruption::Hangup.to_string(), "SIGHUP");
    }
}
