//! Injectable sources of randomness.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform draws.
pub trait RandomSource {
    /// Draw a value uniformly from `0..upper`. `upper` is never zero.
    fn draw(&mut self, upper: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn draw(&mut self, upper: u32) -> u32 {
        (**self).draw(upper)
    }
}

/// Thread-local OS-seeded generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn draw(&mut self, upper: u32) -> u32 {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Reproducible generator seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl RandomSource for SeededRandom {
    fn draw(&mut self, upper: u32) -> u32 {
        self.rng.gen_range(0..upper)
    }
}

/// Replays a fixed list of values in order, wrapping around at the end.
///
/// Values are returned as-is, even when they exceed `upper`.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<u32>,
    next: usize,
}

impl FixedSequence {
    /// `None` when `values` is empty.
    pub fn new(values: Vec<u32>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        Some(Self { values, next: 0 })
    }

    /// Always draws `value`.
    pub fn always(value: u32) -> Self {
        Self { values: vec![value], next: 0 }
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for FixedSequence {
    fn draw(&mut self, _upper: u32) -> u32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
