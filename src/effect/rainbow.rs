//! Rainbow effects: uniform cycle, moving gradient, twinkle.
//!
//! The moving variant is fold-aware: the first half of the strip covers hue
//! 0..128 and the second half continues onto 128..255, so the gradient runs
//! unbroken from grip to tip and back instead of mirroring at the fold.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Effect;
use crate::{
    color::{Rgb, fade_to_black_by, fill_solid, hsv},
    rng::Rand8,
    topology::Topology,
};

const DEFAULT_SATURATION: u8 = 240;
const DEFAULT_SPEED: u8 = 30;
const DEFAULT_DENSITY: u8 = 50;

/// Hue span covered by one half of a folded strip.
const HALF_HUE_SPREAD: usize = 128;

/// Per-frame fade applied to every pixel in twinkle mode.
const TWINKLE_FADE: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainbowMode {
    /// Whole strip is one color, cycling through the wheel.
    Cycle,
    /// Gradient travels along the strip.
    Moving,
    /// Random pixels flare up and fade out.
    Twinkle,
}

impl RainbowMode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Cycle,
            1 => Self::Moving,
            2 => Self::Twinkle,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct RainbowEffect {
    len: usize,
    mode: RainbowMode,
    hue: u8,
    saturation: u8,
    speed: u8,
    density: u8,
    topology: Topology,
    rng: Rand8,
    initialized: bool,
}

impl RainbowEffect {
    pub fn new(len: usize, topology: Topology, seed: u64) -> Self {
        let initialized = len > 0;
        if !initialized {
            #[cfg(feature = "esp32-log")]
            println!("rainbow effect disabled: invalid strip length {}", len);
        }

        Self {
            len,
            mode: RainbowMode::Cycle,
            hue: 0,
            saturation: DEFAULT_SATURATION,
            speed: DEFAULT_SPEED,
            density: DEFAULT_DENSITY,
            topology,
            rng: Rand8::seed_from_u64(seed),
            initialized,
        }
    }

    pub fn set_mode(&mut self, mode: RainbowMode) {
        self.mode = mode;
    }

    /// Set the sub-mode from a raw value; out-of-range values are ignored.
    pub fn set_mode_raw(&mut self, value: u8) {
        if let Some(mode) = RainbowMode::from_raw(value) {
            self.mode = mode;
        }
    }

    pub fn set_saturation(&mut self, saturation: u8) {
        self.saturation = saturation;
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed;
    }

    pub fn set_density(&mut self, density: u8) {
        self.density = density;
    }

    fn render_cycle(&mut self, leds: &mut [Rgb]) {
        fill_solid(leds, hsv(self.hue, self.saturation, 255));
    }

    fn render_moving(&mut self, leds: &mut [Rgb]) {
        let n = leds.len();
        let midpoint = self.topology.midpoint(n);

        match self.topology {
            Topology::Folded => {
                if midpoint == 0 {
                    return;
                }
                for (i, led) in leds.iter_mut().enumerate() {
                    // First half climbs 0..128, second half continues
                    // 128..255; the fold point lands one quantization step
                    // past the end of the first half.
                    let offset = if i < midpoint {
                        i * HALF_HUE_SPREAD / midpoint
                    } else {
                        HALF_HUE_SPREAD + (i - midpoint) * (255 - HALF_HUE_SPREAD) / midpoint
                    };
                    #[allow(clippy::cast_possible_truncation)]
                    let hue_val = self.hue.wrapping_add(offset as u8);
                    *led = hsv(hue_val, self.saturation, 255);
                }
            }
            Topology::Linear => {
                #[allow(clippy::cast_possible_truncation)]
                let delta = (255 / n.max(1)) as u8;
                for (i, led) in leds.iter_mut().enumerate() {
                    #[allow(clippy::cast_possible_truncation)]
                    let hue_val = self.hue.wrapping_add((i as u8).wrapping_mul(delta));
                    *led = hsv(hue_val, self.saturation, 255);
                }
            }
        }
    }

    fn render_twinkle(&mut self, leds: &mut [Rgb]) {
        let n = leds.len();
        fade_to_black_by(leds, TWINKLE_FADE);

        for i in 0..n {
            // density/10 out of 256 per pixel per frame
            if !self.rng.chance(self.density / 10) {
                continue;
            }

            // Bias hue by distance from the grip so flares near the grip
            // sit low on the wheel and the tip runs half a wheel ahead.
            let position_hue = match self.topology {
                Topology::Folded => {
                    let midpoint = self.topology.midpoint(n).max(1);
                    let d = self.topology.distance_from_root(i, n);
                    #[allow(clippy::cast_possible_truncation)]
                    {
                        (d * HALF_HUE_SPREAD / midpoint) as u8
                    }
                }
                Topology::Linear => 0,
            };

            let hue_val = self
                .hue
                .wrapping_add(position_hue)
                .wrapping_add(self.rng.below(64));
            leds[i] = hsv(hue_val, self.saturation, 255);
        }
    }
}

impl Effect for RainbowEffect {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        if !self.initialized || leds.is_empty() {
            return;
        }
        let n = self.len.min(leds.len());
        let leds = &mut leds[..n];

        match self.mode {
            RainbowMode::Cycle => self.render_cycle(leds),
            RainbowMode::Moving => self.render_moving(leds),
            RainbowMode::Twinkle => self.render_twinkle(leds),
        }

        self.hue = self.hue.wrapping_add(self.speed / 4);
    }

    fn reset(&mut self) {
        self.hue = 0;
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }
}
