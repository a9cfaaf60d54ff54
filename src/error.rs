use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: enforced minimums require {required} characters but the minimum length is {min_length}")]
    InsufficientLength { required: usize, min_length: usize },
}

#[derive(Debug, Error)]
pub enum RandomSourceError {
    #[error("Failed to seed from the operating system random source: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read configuration file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse configuration '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    RandomSource(#[from] RandomSourceError),

    #[error(transparent)]
    ConfigFile(#[from] ConfigFileError),

    #[error("Password length {length} exceeds the limit of {max} characters")]
    LengthLimit { length: usize, max: usize },

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
