use std::path::PathBuf;
use thiserror::Error;

/// Failure of a deep copy. There is no partial success: when any variant is
/// returned the destination was not written.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CopyError {
    #[error("{codec} could not encode the source value: {message}")]
    Encoding { codec: &'static str, message: String },

    #[error("{codec} could not decode into the destination shape: {message}")]
    Decoding { codec: &'static str, message: String },

    #[error("{codec} round-trip lost data: the copy differs from the source")]
    Lossy { codec: &'static str },
}

impl CopyError {
    pub fn encoding(codec: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Encoding {
            codec,
            message: err.to_string(),
        }
    }

    pub fn decoding(codec: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Decoding {
            codec,
            message: err.to_string(),
        }
    }

    pub fn is_encoding(&self) -> bool {
        matches!(self, Self::Encoding { .. })
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self, Self::Decoding { .. })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
