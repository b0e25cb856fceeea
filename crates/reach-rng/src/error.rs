//! Error types for random source configuration.

use std::error::Error;
use std::fmt;

/// Errors arising from configuring the shared default random source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RngError {
    /// [`init_default_source`](crate::init_default_source) was called after
    /// the default source already existed (explicitly seeded or lazily
    /// created by a prior draw).
    AlreadyInitialized {
        /// Seed of the source that is already in use.
        seed: u64,
    },
}

impl fmt::Display for RngError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized { seed } => {
                write!(f, "default random source already initialized with seed {seed}")
            }
        }
    }
}

impl Error for RngError {}
