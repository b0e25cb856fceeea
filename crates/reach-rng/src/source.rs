//! The [`RandomSource`] trait and its `rand` adapter.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Injectable source of uniform random numbers.
///
/// This is the only randomness contract metric sampling depends on.
/// Implementations must be deterministic relative to their own prior
/// draws: the same source state always yields the same next value.
///
/// # Object Safety
///
/// The trait is object safe, so samplers accept `&mut dyn RandomSource`
/// as readily as a concrete generator.
pub trait RandomSource {
    /// Uniform integer in the closed interval `[low, high_inclusive]`.
    ///
    /// Callers must pass `low <= high_inclusive`. Implementations return
    /// `low` for a degenerate or inverted range rather than panicking.
    fn uniform_int(&mut self, low: i32, high_inclusive: i32) -> i32;

    /// Uniform real in the half-open interval `[low, high)`.
    ///
    /// Implementations return `low` when the range is empty, inverted,
    /// or not finite.
    fn uniform_double(&mut self, low: f64, high: f64) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn uniform_int(&mut self, low: i32, high_inclusive: i32) -> i32 {
        (**self).uniform_int(low, high_inclusive)
    }

    fn uniform_double(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform_double(low, high)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn uniform_int(&mut self, low: i32, high_inclusive: i32) -> i32 {
        (**self).uniform_int(low, high_inclusive)
    }

    fn uniform_double(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform_double(low, high)
    }
}

/// Adapter exposing any [`rand::Rng`] as a [`RandomSource`].
///
/// ```
/// use reach_rng::{ChaChaSource, RandomSource};
///
/// let mut a = ChaChaSource::seeded(7);
/// let mut b = ChaChaSource::seeded(7);
/// assert_eq!(a.uniform_int(-5, 5), b.uniform_int(-5, 5));
/// ```
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

/// Deterministic ChaCha8-backed source.
pub type ChaChaSource = RngSource<ChaCha8Rng>;

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Mutable access to the wrapped generator.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Unwrap the adapter, returning the generator in its current state.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl ChaChaSource {
    /// ChaCha8 source seeded from a `u64`. Identical seeds produce
    /// identical draw sequences on every platform.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform_int(&mut self, low: i32, high_inclusive: i32) -> i32 {
        if high_inclusive <= low {
            return low;
        }
        self.rng.random_range(low..=high_inclusive)
    }

    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn uniform_double(&mut self, low: f64, high: f64) -> f64 {
        // Negated comparison also rejects NaN bounds.
        if !(high > low) || !(high - low).is_finite() {
            return low;
        }
        self.rng.random_range(low..high)
    }
}
