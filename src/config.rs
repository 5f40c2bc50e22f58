use serde::{Deserialize, Serialize};

use crate::format::SampleFormat;
use crate::session::Direction;

/// pacat invocation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PacatConfig {
    /// Executable to spawn. Overridable so tests can substitute a stand-in.
    pub binary: String,
    /// Sample format passed as `--format=`.
    pub format: SampleFormat,
    /// PulseAudio source/sink name (`--device=`), None = server default.
    pub device: Option<String>,
    /// Sample rate in Hz (`--rate=`), None = pacat default.
    pub rate: Option<u32>,
    /// Channel count (`--channels=`), None = pacat default.
    pub channels: Option<u8>,
}

impl Default for PacatConfig {
    fn default() -> Self {
        Self {
            binary: "pacat".to_string(),
            format: SampleFormat::default(),
            device: None,
            rate: None,
            channels: None,
        }
    }
}

impl PacatConfig {
    pub fn with_format(format: SampleFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Build the argument vector for one invocation: direction flag first,
    /// then the format, then any optional selectors.
    pub fn args(&self, direction: Direction) -> Vec<String> {
        let mut args = vec![
            direction.flag().to_string(),
            format!("--format={}", self.format),
        ];
        if let Some(device) = &self.device {
            args.push(format!("--device={}", device));
        }
        if let Some(rate) = self.rate {
            args.push(format!("--rate={}", rate));
        }
        if let Some(channels) = self.channels {
            args.push(format!("--channels={}", channels));
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_args() {
        let config = PacatConfig::default();
        assert_eq!(config.args(Direction::Record), ["-r", "--format=float32le"]);
    }

    #[test]
    fn default_playback_args() {
        let config = PacatConfig::default();
        assert_eq!(
            config.args(Direction::Playback),
            ["-p", "--format=float32le"]
        );
    }

    #[test]
    fn optional_selectors_are_appended() {
        let config = PacatConfig {
            format: SampleFormat::S16Le,
            device: Some("alsa_output.pci-0000_00_1b.0.analog-stereo".to_string()),
            rate: Some(44100),
            channels: Some(2),
            ..PacatConfig::default()
        };
        assert_eq!(
            config.args(Direction::Playback),
            [
                "-p",
                "--format=s16le",
                "--device=alsa_output.pci-0000_00_1b.0.analog-stereo",
                "--rate=44100",
                "--channels=2",
            ]
        );
    }
}
