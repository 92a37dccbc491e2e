//! Random horizontal offsets for sprite placements.
//!
//! The compositor only sees [`JitterSource`], so tests can swap the RNG for a fixed
//! sequence or for no jitter at all.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of per-placement horizontal offsets.
pub trait JitterSource {
    /// Next integer in the inclusive range `lo..=hi`.
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32;
}

/// Uniform jitter from a seedable `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl JitterSource for SeededJitter {
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        if lo >= hi {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }
}

/// No jitter: every placement sits exactly on its column.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroJitter;

impl JitterSource for ZeroJitter {
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        0i32.clamp(lo, hi.max(lo))
    }
}

/// Replays a fixed list of offsets (cycling), clamped into the requested range.
#[derive(Debug, Clone)]
pub struct ScriptedJitter {
    values: Vec<i32>,
    pos: usize,
}

impl ScriptedJitter {
    pub fn new(values: Vec<i32>) -> Self {
        Self { values, pos: 0 }
    }
}

impl JitterSource for ScriptedJitter {
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        let Some(&v) = self.values.get(self.pos % self.values.len().max(1)) else {
            return 0i32.clamp(lo, hi.max(lo));
        };
        self.pos += 1;
        v.clamp(lo, hi.max(lo))
    }
}
