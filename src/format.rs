//! Sample formats accepted by `pacat --format=`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A raw PCM sample encoding, named exactly as `pacat --format=` expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleFormat {
    U8,
    ALaw,
    ULaw,
    S16Le,
    S16Be,
    S24Le,
    S24Be,
    S32Le,
    S32Be,
    #[default]
    Float32Le,
    Float32Be,
}

impl SampleFormat {
    /// The token passed on the pacat command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleFormat::U8 => "u8",
            SampleFormat::ALaw => "alaw",
            SampleFormat::ULaw => "ulaw",
            SampleFormat::S16Le => "s16le",
            SampleFormat::S16Be => "s16be",
            SampleFormat::S24Le => "s24le",
            SampleFormat::S24Be => "s24be",
            SampleFormat::S32Le => "s32le",
            SampleFormat::S32Be => "s32be",
            SampleFormat::Float32Le => "float32le",
            SampleFormat::Float32Be => "float32be",
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "u8" => Ok(SampleFormat::U8),
            "alaw" => Ok(SampleFormat::ALaw),
            "ulaw" => Ok(SampleFormat::ULaw),
            "s16le" => Ok(SampleFormat::S16Le),
            "s16be" => Ok(SampleFormat::S16Be),
            "s24le" => Ok(SampleFormat::S24Le),
            "s24be" => Ok(SampleFormat::S24Be),
            "s32le" => Ok(SampleFormat::S32Le),
            "s32be" => Ok(SampleFormat::S32Be),
            "float32le" => Ok(SampleFormat::Float32Le),
            "float32be" => Ok(SampleFormat::Float32Be),
            other => anyhow::bail!("Unsupported sample format: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_float32le() {
        assert_eq!(SampleFormat::default(), SampleFormat::Float32Le);
        assert_eq!(SampleFormat::default().as_str(), "float32le");
    }

    #[test]
    fn tokens_round_trip() {
        for format in [
            SampleFormat::U8,
            SampleFormat::ALaw,
            SampleFormat::ULaw,
            SampleFormat::S16Le,
            SampleFormat::S16Be,
            SampleFormat::S24Le,
            SampleFormat::S24Be,
            SampleFormat::S32Le,
            SampleFormat::S32Be,
            SampleFormat::Float32Le,
            SampleFormat::Float32Be,
        ] {
            assert_eq!(format.as_str().parse::<SampleFormat>().unwrap(), format);
        }
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert!("mp3".parse::<SampleFormat>().is_err());
        assert!("".parse::<SampleFormat>().is_err());
    }
}
