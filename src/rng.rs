//! Small deterministic random source for effects.
//!
//! Wraps `rand::SmallRng` with the byte-sized helpers the effects actually
//! use. Seeding is explicit so frames are reproducible in tests; firmware
//! seeds from whatever entropy the board has (a floating ADC read is enough).

use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Byte-oriented random generator used by the fire, strobe, and twinkle
/// effects.
#[derive(Debug, Clone)]
pub struct Rand8 {
    inner: SmallRng,
}

impl Rand8 {
    #[must_use]
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Uniform random byte in 0..=255.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn next8(&mut self) -> u8 {
        (self.inner.next_u32() & 0xFF) as u8
    }

    /// Uniform random byte in `0..limit`. Returns 0 when `limit` is 0.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn below(&mut self, limit: u8) -> u8 {
        if limit == 0 {
            return 0;
        }
        (self.inner.next_u32() % u32::from(limit)) as u8
    }

    /// Uniform random byte in `lo..hi`. Returns `lo` when the range is empty.
    #[inline]
    pub fn range(&mut self, lo: u8, hi: u8) -> u8 {
        if hi <= lo {
            return lo;
        }
        lo + self.below(hi - lo)
    }

    /// Bernoulli trial: true with probability `chance / 256`.
    #[inline]
    pub fn chance(&mut self, chance: u8) -> bool {
        self.next8() < chance
    }
}
