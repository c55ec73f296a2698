//! Injectable randomness for maze generation.
//!
//! Generators never talk to `rand` directly, they draw from a `RandomSource` so that tests can
//! replay a fixed sequence of values and get back exactly the same maze.

use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::*;
use error_chain::bail;

pub trait RandomSource {
    /// A value uniformly distributed in `[0, bound)`. `bound` is always greater than 0.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<'a, S: RandomSource + ?Sized> RandomSource for &'a mut S {
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }
}

/// Adapts any `rand::Rng` into a `RandomSource`.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> RngSource<R> {
        RngSource { rng }
    }
}

impl RngSource<StdRng> {
    /// A reproducible source: the same seed always generates the same mazes.
    pub fn seeded(seed: u64) -> RngSource<StdRng> {
        RngSource::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_below(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Replays a fixed list of values, starting again from the front once exhausted.
///
/// The values are returned as is, whatever bound is asked for. An empty list always yields 0.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: Vec<usize>,
    position: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<usize>) -> SequenceSource {
        SequenceSource { values, position: 0 }
    }

    /// How many values have been handed out so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceSource {
    fn next_below(&mut self, _: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

/// Draw a value in `[0, bound)`, failing if the source breaks its contract.
pub fn draw_below<S: RandomSource + ?Sized>(source: &mut S, bound: usize) -> Result<usize> {
    let value = source.next_below(bound);
    if value >= bound {
        warn!("random source returned {} for a draw below {}", value, bound);
        bail!(ErrorKind::InvalidRandomSource(value, bound));
    }
    Ok(value)
}

/// Fisher–Yates shuffle in place.
///
/// Walks from the last index down to 1, swapping each element with one at a uniformly chosen index
/// no greater than its own.
pub fn shuffle<T, S: RandomSource + ?Sized>(items: &mut [T], source: &mut S) -> Result<()> {
    for i in (1..items.len()).rev() {
        let j = draw_below(source, i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}
