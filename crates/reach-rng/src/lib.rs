//! Random sources for Reach radius metrics.
//!
//! Metric sampling consumes randomness only through the [`RandomSource`]
//! trait. This crate defines that trait, a [`RngSource`] adapter for any
//! `rand` generator (with [`ChaChaSource`] as the deterministic default),
//! and the guarded process-wide default source used by convenience
//! entry points that take no explicit source.
//!
//! # Determinism
//!
//! A [`ChaChaSource`] built with [`ChaChaSource::seeded`] yields the same
//! sequence on every platform, so seeded simulations replay exactly.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
mod log;
pub mod shared;
pub mod source;

pub use error::RngError;
pub use shared::{default_source_seed, init_default_source, with_default_source};
pub use source::{ChaChaSource, RandomSource, RngSource};
