//! pacat_io - microphone capture and speaker playback via the PulseAudio
//! `pacat` utility.
//!
//! All audio I/O is delegated to `pacat` subprocesses. This crate only builds
//! the invocation (direction flag plus `--format=`), wires the subprocess's
//! standard streams to files or caller-supplied async streams, and guarantees
//! the subprocess receives SIGTERM when a session or stream is dropped.

pub mod config;
pub mod format;
pub mod microphone;
pub mod pacat;
pub mod session;
pub mod speaker;

pub use config::PacatConfig;
pub use format::SampleFormat;
pub use microphone::Microphone;
pub use pacat::{Pacat, PlaybackStream, RecordStream};
pub use session::{Direction, Session};
pub use speaker::Speaker;
