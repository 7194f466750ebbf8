//! Heat-diffusion fire simulation.
//!
//! A cellular automaton drives a per-cell heat field which is mapped through
//! the fixed fire palette each frame. On a folded staff the fire burns from
//! the grip (both logical ends of the strip) toward the tip (the middle of
//! the strip), with the two halves simulated independently.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Effect;
use crate::{
    color::{Rgb, heat_color},
    rng::Rand8,
    topology::Topology,
};

// Tuned on the real staff; faster cooling and restrained sparking read
// better on a 200-pixel run than the stock campfire values.
const DEFAULT_COOLING: u8 = 85;
const DEFAULT_SPARKING: u8 = 90;

/// Cells near a grip-side root that are eligible for a new spark.
const SPARK_ZONE: u8 = 7;

/// Fire effect over a fixed-capacity heat field.
///
/// `MAX_LEDS` bounds the heat field; the live strip length is set at
/// construction and never changes afterwards.
#[derive(Debug, Clone)]
pub struct FireEffect<const MAX_LEDS: usize> {
    heat: [u8; MAX_LEDS],
    len: usize,
    cooling: u8,
    sparking: u8,
    reversed: bool,
    topology: Topology,
    rng: Rand8,
    initialized: bool,
}

impl<const MAX_LEDS: usize> FireEffect<MAX_LEDS> {
    /// Create a fire simulation for a strip of `len` pixels.
    ///
    /// A zero length or one beyond the heat-field capacity yields a disabled
    /// instance whose `render` is a no-op; check [`Effect::is_initialized`].
    pub fn new(len: usize, topology: Topology, reversed: bool, seed: u64) -> Self {
        let initialized = len > 0 && len <= MAX_LEDS;
        if !initialized {
            #[cfg(feature = "esp32-log")]
            println!("fire effect disabled: invalid strip length {}", len);
        }

        Self {
            heat: [0; MAX_LEDS],
            len: if initialized { len } else { 0 },
            cooling: DEFAULT_COOLING,
            sparking: DEFAULT_SPARKING,
            reversed,
            topology,
            rng: Rand8::seed_from_u64(seed),
            initialized,
        }
    }

    /// How fast cells shed heat (higher = shorter flames).
    pub fn set_cooling(&mut self, cooling: u8) {
        self.cooling = cooling;
    }

    /// Chance (out of 255) of a new spark per root per frame.
    pub fn set_sparking(&mut self, sparking: u8) {
        self.sparking = sparking;
    }

    fn cool(&mut self) {
        let max_loss = (usize::from(self.cooling) * 10 / self.len + 2).min(255);
        #[allow(clippy::cast_possible_truncation)]
        let max_loss = max_loss as u8;
        for cell in &mut self.heat[..self.len] {
            *cell = cell.saturating_sub(self.rng.below(max_loss));
        }
    }

    /// Drift heat away from the grip. The two halves of a folded strip never
    /// read each other's cells.
    fn diffuse(&mut self) {
        let n = self.len;
        match self.topology {
            Topology::Folded => {
                let midpoint = n / 2;
                // First half: grip at index 0, tip at midpoint-1.
                // Empty when midpoint < 3, which is fine for degenerate strips.
                for k in (2..midpoint).rev() {
                    self.heat[k] = Self::drift(self.heat[k - 1], self.heat[k - 2]);
                }
                // Second half: grip at index n-1, tip at midpoint.
                for k in midpoint..n.saturating_sub(2) {
                    self.heat[k] = Self::drift(self.heat[k + 1], self.heat[k + 2]);
                }
            }
            Topology::Linear => {
                for k in (2..n).rev() {
                    self.heat[k] = Self::drift(self.heat[k - 1], self.heat[k - 2]);
                }
            }
        }
    }

    /// Weighted average of the two cells closer to the grip (the farther one
    /// counts twice).
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    const fn drift(near: u8, far: u8) -> u8 {
        ((near as u16 + far as u16 + far as u16) / 3) as u8
    }

    fn ignite(&mut self) {
        let n = self.len;
        if self.rng.chance(self.sparking) {
            let y = usize::from(self.rng.below(SPARK_ZONE));
            if y < n {
                self.heat[y] = self.heat[y].saturating_add(self.rng.range(160, 255));
            }
        }

        // Folded strips have a second grip-side root at the other end.
        if self.topology == Topology::Folded && self.rng.chance(self.sparking) {
            let offset = usize::from(self.rng.below(SPARK_ZONE));
            if offset < n {
                let y = n - 1 - offset;
                self.heat[y] = self.heat[y].saturating_add(self.rng.range(160, 255));
            }
        }
    }
}

impl<const MAX_LEDS: usize> Effect for FireEffect<MAX_LEDS> {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        if !self.initialized || leds.is_empty() {
            return;
        }
        let n = self.len.min(leds.len());

        self.cool();
        self.diffuse();
        self.ignite();

        for (j, &cell) in self.heat[..n].iter().enumerate() {
            let pixel = if self.reversed { n - 1 - j } else { j };
            leds[pixel] = heat_color(cell);
        }
    }

    fn reset(&mut self) {
        self.heat = [0; MAX_LEDS];
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }
}
