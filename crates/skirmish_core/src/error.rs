//! # Simulation Error Types
//!
//! Failures happen only while setting a run up. Once ticking starts no
//! operation can fail.

use std::path::PathBuf;

use thiserror::Error;

use crate::invariants::InvariantViolation;

/// Errors raised while configuring a simulation.
#[derive(Error, Debug)]
pub enum SimError {
    /// A configuration value is out of range or unrecognised.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read.
    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`SimConfig`](crate::SimConfig).
    #[error("malformed config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A hand-built population has a different size than the config names.
    #[error("config expects {expected} actors but {actual} were given")]
    PopulationMismatch {
        /// `SimConfig::population`.
        expected: usize,
        /// Actors handed over.
        actual: usize,
    },

    /// A hand-built population breaks an invariant before the first tick.
    #[error("invalid population: {0}")]
    InvalidPopulation(#[from] InvariantViolation),
}

/// Result type for simulation setup.
pub type SimResult<T> = Result<T, SimError>;
