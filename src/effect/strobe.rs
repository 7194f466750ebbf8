//! Strobe and lightning effects.
//!
//! Classic and colored strobe are a square wave over the frame counter.
//! Lightning picks a strike zone per frame from three weighted policies and
//! follows each strike frame with a single blue-tinted afterglow frame.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Effect;
use crate::{
    color::{Rgb, fill_solid},
    math8::scale8,
    rng::Rand8,
    topology::Topology,
};

const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

const DEFAULT_SPEED: u8 = 50;
const DEFAULT_DUTY: u8 = 10;
const DEFAULT_CHANCE: u8 = 5;

/// Colored strobe never drives the LEDs at full white; the flash brightness
/// is capped so two 200-pixel strips stay inside the supply budget.
const FLASH_BRIGHTNESS_CAP: u8 = 200;

/// Stride of a full-length strike: every 3rd pixel, again to bound draw.
const FULL_STRIKE_STRIDE: usize = 3;

/// Per-pixel chance (out of 255) of glowing in the afterglow frame.
const AFTERGLOW_CHANCE: u8 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrobeMode {
    /// Full-white square wave.
    Classic,
    /// Square wave in the configured color at capped brightness.
    Colored,
    /// Random strikes with afterglow.
    Lightning,
}

impl StrobeMode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Classic,
            1 => Self::Colored,
            2 => Self::Lightning,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct StrobeEffect {
    len: usize,
    mode: StrobeMode,
    speed: u8,
    duty: u8,
    color: Rgb,
    count: u16,
    chance: u8,
    afterglow: bool,
    topology: Topology,
    rng: Rand8,
    initialized: bool,
}

impl StrobeEffect {
    pub fn new(len: usize, topology: Topology, seed: u64) -> Self {
        let initialized = len > 0;
        if !initialized {
            #[cfg(feature = "esp32-log")]
            println!("strobe effect disabled: invalid strip length {}", len);
        }

        Self {
            len,
            mode: StrobeMode::Classic,
            speed: DEFAULT_SPEED,
            duty: DEFAULT_DUTY,
            color: WHITE,
            count: 0,
            chance: DEFAULT_CHANCE,
            afterglow: false,
            topology,
            rng: Rand8::seed_from_u64(seed),
            initialized,
        }
    }

    pub fn set_mode(&mut self, mode: StrobeMode) {
        self.mode = mode;
    }

    /// Set the sub-mode from a raw value; out-of-range values are ignored.
    pub fn set_mode_raw(&mut self, value: u8) {
        if let Some(mode) = StrobeMode::from_raw(value) {
            self.mode = mode;
        }
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed;
    }

    /// Duty cycle in percent, clamped to 1..=99 so the strobe never locks
    /// fully on or fully off.
    pub fn set_duty(&mut self, duty: u8) {
        self.duty = duty.clamp(1, 99);
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Lightning strike chance out of 255 per frame.
    pub fn set_chance(&mut self, chance: u8) {
        self.chance = chance;
    }

    /// Flash period in frames for the current speed.
    fn period(&self) -> u16 {
        (255 - u16::from(self.speed)).max(10)
    }

    fn render_strobe(&mut self, flash: Rgb, leds: &mut [Rgb]) {
        let period = self.period();
        let on_time = period * u16::from(self.duty) / 100;
        let is_on = self.count % period < on_time;
        fill_solid(leds, if is_on { flash } else { BLACK });
    }

    fn render_lightning(&mut self, leds: &mut [Rgb]) {
        fill_solid(leds, BLACK);

        let n = leds.len();
        let midpoint = self.topology.midpoint(n);

        if self.rng.chance(self.chance) {
            if self.topology == Topology::Folded {
                #[allow(clippy::cast_possible_truncation)]
                let max_run = (midpoint / 3).min(255) as u8;
                if self.rng.chance(85) {
                    // Short symmetric run out of both grip-side roots.
                    let run = usize::from(self.rng.below(max_run));
                    for i in 0..run {
                        leds[i] = WHITE;
                        leds[n - 1 - i] = WHITE;
                    }
                } else if self.rng.chance(128) {
                    // Short symmetric run straddling the tip.
                    let run = usize::from(self.rng.below(max_run));
                    for i in 0..run {
                        leds[midpoint - 1 - i] = WHITE;
                        leds[midpoint + i] = WHITE;
                    }
                } else {
                    Self::sparse_full_strike(leds);
                }
            } else {
                Self::sparse_full_strike(leds);
            }

            self.afterglow = true;
        } else if self.afterglow {
            // One decaying frame: scattered faint pixels with a blue tint.
            let fade = self.rng.range(2, 7);
            for led in leds {
                if self.rng.chance(AFTERGLOW_CHANCE) {
                    *led = Rgb {
                        r: fade,
                        g: fade,
                        b: fade + self.rng.range(1, 2),
                    };
                }
            }
            self.afterglow = false;
        }
    }

    /// Every 3rd pixel lit, keeping a full-length strike inside the power
    /// budget.
    fn sparse_full_strike(leds: &mut [Rgb]) {
        for led in leds.iter_mut().step_by(FULL_STRIKE_STRIDE) {
            *led = WHITE;
        }
    }
}

impl Effect for StrobeEffect {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        if !self.initialized || leds.is_empty() {
            return;
        }
        let n = self.len.min(leds.len());
        let leds = &mut leds[..n];

        match self.mode {
            StrobeMode::Classic => self.render_strobe(WHITE, leds),
            StrobeMode::Colored => {
                let flash = Rgb {
                    r: scale8(self.color.r, FLASH_BRIGHTNESS_CAP),
                    g: scale8(self.color.g, FLASH_BRIGHTNESS_CAP),
                    b: scale8(self.color.b, FLASH_BRIGHTNESS_CAP),
                };
                self.render_strobe(flash, leds);
            }
            StrobeMode::Lightning => self.render_lightning(leds),
        }

        self.count = self.count.wrapping_add(1);
    }

    fn reset(&mut self) {
        self.count = 0;
        self.afterglow = false;
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }
}
