//! The `Pacat` handle: spawns pacat subprocesses and wires their standard
//! streams to files or caller-supplied async streams.

use std::path::Path;
use std::pin::Pin;
use std::process::Stdio;
use std::task::{Context, Poll};

use anyhow::{Context as _, Result};
use tokio::fs::File;
use tokio::io::{self, AsyncRead, AsyncWrite, AsyncWriteExt, ReadBuf};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};

use crate::config::PacatConfig;
use crate::session::{Direction, Session, send_sigterm};

/// Entry point for record and playback operations.
///
/// Each operation spawns its own `pacat` subprocess; the handle itself only
/// carries the invocation configuration and can be reused freely.
pub struct Pacat {
    config: PacatConfig,
}

impl Pacat {
    pub fn new(config: PacatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PacatConfig {
        &self.config
    }

    fn spawn(&self, direction: Direction) -> Result<Child> {
        let args = self.config.args(direction);
        let mut command = Command::new(&self.config.binary);
        command.args(&args);
        match direction {
            Direction::Record => command.stdin(Stdio::null()).stdout(Stdio::piped()),
            Direction::Playback => command.stdin(Stdio::piped()).stdout(Stdio::null()),
        };
        // stderr is inherited: pacat's own errors go straight to the caller
        let child = command
            .spawn()
            .with_context(|| format!("Failed to spawn {}", self.config.binary))?;
        log::info!("Spawned {} {}", self.config.binary, args.join(" "));
        Ok(child)
    }

    /// Raw PCM from the microphone (`pacat -r`). Dropping the stream
    /// terminates the subprocess.
    pub fn record_stream(&self) -> Result<RecordStream> {
        let mut child = self.spawn(Direction::Record)?;
        let stdout = child.stdout.take().context("pacat stdout not captured")?;
        Ok(RecordStream { child, stdout })
    }

    /// Raw PCM into the speakers (`pacat -p`). Dropping the stream
    /// terminates the subprocess.
    pub fn playback_stream(&self) -> Result<PlaybackStream> {
        let mut child = self.spawn(Direction::Playback)?;
        let stdin = child.stdin.take().context("pacat stdin not captured")?;
        Ok(PlaybackStream { child, stdin })
    }

    /// Relay microphone bytes into `writer` until the session is closed.
    pub fn record_to_writer<W>(&self, mut writer: W) -> Result<Session>
    where
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let mut child = self.spawn(Direction::Record)?;
        let mut stdout = child.stdout.take().context("pacat stdout not captured")?;
        let relay = tokio::spawn(async move {
            let bytes = io::copy(&mut stdout, &mut writer).await?;
            writer.shutdown().await?;
            Ok(bytes)
        });
        Ok(Session::new(vec![child], relay))
    }

    /// Relay `reader` into the speakers until it is exhausted or the
    /// session is closed.
    pub fn play_from_reader<R>(&self, mut reader: R) -> Result<Session>
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let mut child = self.spawn(Direction::Playback)?;
        let mut stdin = child.stdin.take().context("pacat stdin not captured")?;
        let relay = tokio::spawn(async move {
            let bytes = io::copy(&mut reader, &mut stdin).await?;
            // Closing the pipe lets pacat drain its buffer and exit
            stdin.shutdown().await?;
            Ok(bytes)
        });
        Ok(Session::new(vec![child], relay))
    }

    /// Record a raw audio file.
    pub async fn record_to_file<P: AsRef<Path>>(&self, path: P) -> Result<Session> {
        let file = File::create(path.as_ref())
            .await
            .with_context(|| format!("Failed to create {}", path.as_ref().display()))?;
        self.record_to_writer(file)
    }

    /// Play a raw audio file.
    pub async fn play_file<P: AsRef<Path>>(&self, path: P) -> Result<Session> {
        let file = File::open(path.as_ref())
            .await
            .with_context(|| format!("Failed to open {}", path.as_ref().display()))?;
        self.play_from_reader(file)
    }

    /// Microphone straight into the speakers. Strictly a debugging aid.
    pub fn feedback(&self) -> Result<Session> {
        let mut record = self.spawn(Direction::Record)?;
        let mut playback = self.spawn(Direction::Playback)?;
        let mut stdout = record.stdout.take().context("pacat stdout not captured")?;
        let mut stdin = playback.stdin.take().context("pacat stdin not captured")?;
        let relay = tokio::spawn(async move {
            let bytes = io::copy(&mut stdout, &mut stdin).await?;
            stdin.shutdown().await?;
            Ok(bytes)
        });
        Ok(Session::new(vec![record, playback], relay))
    }
}

impl Default for Pacat {
    fn default() -> Self {
        Self::new(PacatConfig::default())
    }
}

/// A readable stream of raw microphone input backed by a `pacat -r` child.
pub struct RecordStream {
    child: Child,
    stdout: ChildStdout,
}

impl AsyncRead for RecordStream {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
        Pin::new(&mut self.get_mut().stdout).poll_read(cx, buf)
    }
}

impl Drop for RecordStream {
    fn drop(&mut self) {
        send_sigterm(&self.child);
    }
}

/// A writable stream into the speakers backed by a `pacat -p` child.
pub struct PlaybackStream {
    child: Child,
    stdin: ChildStdin,
}

impl AsyncWrite for PlaybackStream {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<std::io::Result<usize>> {
        Pin::new(&mut self.get_mut().stdin).poll_write(cx, buf)
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
        Pin::new(&mut self.get_mut().stdin).poll_flush(cx)
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
        Pin::new(&mut self.get_mut().stdin).poll_shutdown(cx)
    }
}

impl Drop for PlaybackStream {
    fn drop(&mut self) {
        send_sigterm(&self.child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    // `cat` rejects pacat's flags and exits immediately, which is enough to
    // exercise spawn, relay wiring, and teardown without a PulseAudio daemon.
    fn stand_in() -> Pacat {
        Pacat::new(PacatConfig {
            binary: "cat".to_string(),
            ..PacatConfig::default()
        })
    }

    fn tmp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("pacat_io_{}_{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn missing_binary_fails_to_spawn() {
        let pacat = Pacat::new(PacatConfig {
            binary: "pacat-io-no-such-binary".to_string(),
            ..PacatConfig::default()
        });
        assert!(pacat.record_stream().is_err());
        assert!(pacat.playback_stream().is_err());
    }

    #[tokio::test]
    async fn record_to_file_creates_target() {
        let path = tmp_path("capture.raw");
        let session = stand_in().record_to_file(&path).await.unwrap();
        session.close().await.unwrap();
        assert!(path.exists());
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn play_file_requires_source() {
        let path = tmp_path("no-such-source.raw");
        assert!(stand_in().play_file(&path).await.is_err());
    }

    #[tokio::test]
    async fn play_file_reads_source_to_end() {
        let path = tmp_path("playback.raw");
        std::fs::write(&path, [0u8; 256]).unwrap();
        let session = stand_in().play_file(&path).await.unwrap();
        // The stand-in exits at once, so the relay ends with EOF or EPIPE;
        // either way join must reap the child.
        session.join().await.unwrap();
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn record_stream_terminates_child_on_drop() {
        let stream = stand_in().record_stream().unwrap();
        drop(stream);
    }

    #[tokio::test]
    async fn record_stream_is_readable() {
        let mut stream = stand_in().record_stream().unwrap();
        let mut buf = Vec::new();
        // The stand-in produces no audio, only EOF
        stream.read_to_end(&mut buf).await.unwrap();
        assert!(buf.is_empty());
    }

    #[tokio::test]
    async fn feedback_pairs_two_children() {
        let session = stand_in().feedback().unwrap();
        session.close().await.unwrap();
    }
}
