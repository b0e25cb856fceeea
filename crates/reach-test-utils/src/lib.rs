//! Test utilities and mock random sources for Reach development.
//!
//! Provides [`RandomSource`] implementations that make sampling code
//! inspectable: [`ScriptedSource`] replays fixed draws and
//! [`CountingSource`] counts how many draws a call consumed. Statistical
//! helpers and extreme-value sources live in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::VecDeque;

use reach_rng::RandomSource;

pub use fixtures::{chi_square, ExtremeSource};

/// Replays a fixed script of integer and real draws.
///
/// Integer and real draws come from separate queues so a test can
/// script exactly the values a sampler will see. Panics when a queue runs
/// dry or when a scripted value falls outside the requested range, since
/// either means the test script no longer matches the code under test.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    ints: VecDeque<i32>,
    doubles: VecDeque<f64>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue integer draws, returned in order by `uniform_int`.
    pub fn with_ints(mut self, ints: impl IntoIterator<Item = i32>) -> Self {
        self.ints.extend(ints);
        self
    }

    /// Queue real draws, returned in order by `uniform_double`.
    pub fn with_doubles(mut self, doubles: impl IntoIterator<Item = f64>) -> Self {
        self.doubles.extend(doubles);
        self
    }

    pub fn push_int(&mut self, v: i32) {
        self.ints.push_back(v);
    }

    pub fn push_double(&mut self, v: f64) {
        self.doubles.push_back(v);
    }

    /// Number of integer draws not yet consumed.
    pub fn remaining_ints(&self) -> usize {
        self.ints.len()
    }

    /// Number of real draws not yet consumed.
    pub fn remaining_doubles(&self) -> usize {
        self.doubles.len()
    }

    /// `true` once every scripted draw has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.ints.is_empty() && self.doubles.is_empty()
    }
}

impl RandomSource for ScriptedSource {
    fn uniform_int(&mut self, low: i32, high_inclusive: i32) -> i32 {
        let v = self
            .ints
            .pop_front()
            .expect("ScriptedSource: integer script exhausted");
        assert!(
            (low..=high_inclusive).contains(&v),
            "ScriptedSource: scripted int {v} outside [{low}, {high_inclusive}]"
        );
        v
    }

    fn uniform_double(&mut self, low: f64, high: f64) -> f64 {
        let v = self
            .doubles
            .pop_front()
            .expect("ScriptedSource: real script exhausted");
        assert!(
            v >= low && v < high,
            "ScriptedSource: scripted real {v} outside [{low}, {high})"
        );
        v
    }
}

/// Wraps a source and counts the draws made through it.
#[derive(Debug, Clone)]
pub struct CountingSource<S> {
    inner: S,
    int_draws: usize,
    double_draws: usize,
}

impl<S: RandomSource> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            int_draws: 0,
            double_draws: 0,
        }
    }

    pub fn int_draws(&self) -> usize {
        self.int_draws
    }

    pub fn double_draws(&self) -> usize {
        self.double_draws
    }

    /// Total draws of either kind.
    pub fn total_draws(&self) -> usize {
        self.int_draws + self.double_draws
    }

    pub fn reset(&mut self) {
        self.int_draws = 0;
        self.double_draws = 0;
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: RandomSource> RandomSource for CountingSource<S> {
    fn uniform_int(&mut self, low: i32, high_inclusive: i32) -> i32 {
        self.int_draws += 1;
        self.inner.uniform_int(low, high_inclusive)
    }

    fn uniform_double(&mut self, low: f64, high: f64) -> f64 {
        self.double_draws += 1;
        self.inner.uniform_double(low, high)
    }
}
