//! A device used to receive audio input from the user.

use anyhow::Result;

use crate::config::PacatConfig;
use crate::pacat::{Pacat, RecordStream};

/// Microphone entry point with default pacat configuration.
#[derive(Default)]
pub struct Microphone {
    pacat: Pacat,
}

impl Microphone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PacatConfig) -> Self {
        Self {
            pacat: Pacat::new(config),
        }
    }

    /// A readable stream of raw microphone input.
    pub fn stream(&self) -> Result<RecordStream> {
        self.pacat.record_stream()
    }
}
