//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! All randomness flows through KeyedRng instances derived from
//! a composite string key. Same key = same stream, across process
//! restarts and platforms.
//!
//! Every generator starts its own stream from its own (sub-)key.
//! There is no shared generator instance anywhere, so two dashboards
//! being built at the same time can never interfere.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Map an arbitrary string key to a non-negative 31-bit seed.
///
/// Classic rolling hash over the key bytes with wrapping i32
/// arithmetic. Total over any input; the empty string hashes to 0.
pub fn seed_from_key(key: &str) -> u32 {
    let mut h: i32 = 0;
    for b in key.bytes() {
        h = h.wrapping_mul(31).wrapping_add(b as i32);
    }
    h.unsigned_abs()
}

/// A deterministic stream of values in [0, 1).
///
/// Backed by Pcg64Mcg (an MCG with a 2^126 period). The stream owns
/// its seed state; draws mutate only this instance.
pub struct KeyedRng {
    inner: Pcg64Mcg,
}

impl KeyedRng {
    /// Start a stream directly from an integer seed.
    pub fn from_seed(seed: u32) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed as u64),
        }
    }

    /// Hash the key, then start a stream from the resulting seed.
    pub fn from_key(key: &str) -> Self {
        Self::from_seed(seed_from_key(key))
    }

    /// Draw a float in [0.0, 1.0).
    pub fn draw(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a float in [lo, hi).
    pub fn in_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.draw() * (hi - lo)
    }

    /// Stable category selection: floor(draw * len).
    ///
    /// The mapping from draw value to index never changes, so the
    /// same sub-key always lands on the same category.
    pub fn index(&mut self, len: usize) -> usize {
        assert!(len > 0, "len must be > 0");
        let i = (self.draw() * len as f64) as usize;
        i.min(len - 1)
    }

    /// Pick one element from a fixed ordered slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.index(items.len())]
    }
}
