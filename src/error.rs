//! Error types
//!
//! Startup errors are fatal (the binary exits before the game loop).
//! Nothing in here is raised per frame.

use std::path::PathBuf;

use thiserror::Error;

use crate::sim::Tier;

/// Errors from loading or querying the word bank.
#[derive(Error, Debug)]
pub enum WordBankError {
    /// The word data source could not be read.
    #[error("failed to read word file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every tier came out empty.
    #[error("no valid words loaded from the word data source")]
    NoWordsLoaded,

    /// A spawn asked for a tier with no words.
    #[error("tier '{0}' has no words")]
    EmptyTier(Tier),
}

/// Errors from loading a settings or tuning file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Parsed fine but holds a value the game cannot run with.
    #[error("invalid value in {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}
