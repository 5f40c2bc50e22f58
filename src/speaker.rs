//! A device used to play audio output to the user.

use anyhow::Result;

use crate::config::PacatConfig;
use crate::pacat::{Pacat, PlaybackStream};

/// Speaker entry point with default pacat configuration.
#[derive(Default)]
pub struct Speaker {
    pacat: Pacat,
}

impl Speaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PacatConfig) -> Self {
        Self {
            pacat: Pacat::new(config),
        }
    }

    /// A writable stream of raw audio into the speakers.
    pub fn sink(&self) -> Result<PlaybackStream> {
        self.pacat.playback_stream()
    }
}
