//! Session lifecycle: one or more spawned pacat children paired with the
//! relay task that moves bytes between them and a stream or file.

use anyhow::Result;
use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use tokio::process::Child;
use tokio::task::JoinHandle;

/// Transfer direction of a pacat invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Record,
    Playback,
}

impl Direction {
    /// The pacat command-line flag selecting this direction.
    pub fn flag(&self) -> &'static str {
        match self {
            Direction::Record => "-r",
            Direction::Playback => "-p",
        }
    }
}

/// Send SIGTERM to a child so pacat can drain and exit cleanly.
/// tokio's `kill` sends SIGKILL, which would cut playback short.
pub(crate) fn send_sigterm(child: &Child) {
    if let Some(id) = child.id() {
        // ESRCH just means the child is already gone
        let _ = kill(Pid::from_raw(id as i32), Signal::SIGTERM);
    }
}

/// One record or playback operation: the spawned pacat children plus the
/// relay task pairing them with a consumer or producer stream.
///
/// Dropping a session without closing it still delivers SIGTERM, so the
/// subprocess never outlives its stream.
pub struct Session {
    children: Vec<Child>,
    relay: Option<JoinHandle<std::io::Result<u64>>>,
    terminated: bool,
}

impl Session {
    pub(crate) fn new(children: Vec<Child>, relay: JoinHandle<std::io::Result<u64>>) -> Self {
        Self {
            children,
            relay: Some(relay),
            terminated: false,
        }
    }

    /// Send SIGTERM to every still-running child. Idempotent: the signal is
    /// delivered at most once per child.
    pub fn terminate(&mut self) {
        if self.terminated {
            return;
        }
        self.terminated = true;
        for child in &self.children {
            send_sigterm(child);
        }
    }

    /// Terminate the children, then wait for the relay and the children to
    /// finish.
    pub async fn close(mut self) -> Result<()> {
        self.terminate();
        self.shutdown().await
    }

    /// Wait for the relay to finish on its own (e.g. playback reaching end
    /// of file), then reap the children.
    pub async fn join(mut self) -> Result<()> {
        self.shutdown().await
    }

    async fn shutdown(&mut self) -> Result<()> {
        if let Some(relay) = self.relay.take() {
            match relay.await {
                Ok(Ok(bytes)) => log::debug!("Relay finished after {} bytes", bytes),
                Ok(Err(e)) => log::warn!("Relay stream error: {}", e),
                Err(e) => log::warn!("Relay task failed: {}", e),
            }
        }
        for child in &mut self.children {
            let status = child.wait().await?;
            log::debug!("pacat exited: {}", status);
        }
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.terminate();
    }
}
