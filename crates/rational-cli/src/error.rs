//! Error types for the command-line front end.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Model(#[from] rational_core::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
