//! Process-wide default random source.
//!
//! Backs the convenience sampling entry points that take no explicit
//! source. This is the crate's single piece of global mutable state:
//! creation is guarded by a `OnceLock` and every draw is serialized
//! behind a `Mutex`. Draws from several threads are therefore safe but
//! interleave in scheduling order, so sequences are only reproducible
//! from a single thread. Callers needing reproducibility across threads
//! should own a [`ChaChaSource`] per thread instead.

use crate::error::RngError;
use crate::log::{debug, warn};
use crate::source::ChaChaSource;
use std::sync::{Mutex, OnceLock};

struct DefaultSource {
    seed: u64,
    source: Mutex<ChaChaSource>,
}

impl DefaultSource {
    fn new(seed: u64) -> Self {
        Self {
            seed,
            source: Mutex::new(ChaChaSource::seeded(seed)),
        }
    }
}

static DEFAULT_SOURCE: OnceLock<DefaultSource> = OnceLock::new();

fn default_source() -> &'static DefaultSource {
    DEFAULT_SOURCE.get_or_init(|| {
        let seed: u64 = rand::random();
        debug!(seed, "default random source seeded from entropy");
        DefaultSource::new(seed)
    })
}

/// Seed the shared default source explicitly.
///
/// Must run before the first draw from the default source; afterwards
/// the seed is fixed for the life of the process.
///
/// # Errors
///
/// Returns [`RngError::AlreadyInitialized`] carrying the seed in use if
/// the source was already created, either by an earlier call or lazily
/// by [`with_default_source`].
pub fn init_default_source(seed: u64) -> Result<(), RngError> {
    let mut created = false;
    let current = DEFAULT_SOURCE.get_or_init(|| {
        created = true;
        DefaultSource::new(seed)
    });
    if created {
        debug!(seed, "default random source seeded explicitly");
        Ok(())
    } else {
        Err(RngError::AlreadyInitialized { seed: current.seed })
    }
}

/// Run `f` with exclusive access to the shared default source.
///
/// Creates the source on first use, seeded from OS entropy unless
/// [`init_default_source`] ran first. Calling this again from inside `f`
/// deadlocks.
pub fn with_default_source<T>(f: impl FnOnce(&mut ChaChaSource) -> T) -> T {
    let shared = default_source();
    let mut guard = shared.source.lock().unwrap_or_else(|poisoned| {
        // A panic inside `f` cannot leave the generator half-advanced.
        warn!("recovering poisoned default random source");
        poisoned.into_inner()
    });
    f(&mut guard)
}

/// Seed of the default source, or `None` if it has not been created yet.
pub fn default_source_seed() -> Option<u64> {
    DEFAULT_SOURCE.get().map(|s| s.seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RandomSource;

    // The default source is process-global; keep every assertion that
    // touches it inside this one test.
    #[test]
    fn lazy_creation_then_init_is_rejected() {
        let first = with_default_source(|s| s.uniform_int(0, 100));
        assert!((0..=100).contains(&first));

        let seed = default_source_seed().expect("draw must create the source");
        assert_eq!(
            init_default_source(seed.wrapping_add(1)),
            Err(RngError::AlreadyInitialized { seed })
        );

        let result = std::panic::catch_unwind(|| {
            with_default_source(|_| panic!("poison the lock"));
        });
        assert!(result.is_err());
        let after = with_default_source(|s| s.uniform_double(0.0, 1.0));
        assert!((0.0..1.0).contains(&after));
    }
}
