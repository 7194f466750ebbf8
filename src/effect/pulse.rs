//! Energy pulse radiating outward from the grip.
//!
//! Brightness at each pixel is the saturating sum of several sine waves
//! whose frequency grows with the wave index and whose phase is offset by
//! the pixel's distance from the grip, so crests travel from grip to tip.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Effect;
use crate::{
    color::{Rgb, hsv},
    math8::beatsin8,
    topology::Topology,
};

const MIN_WAVES: u8 = 1;
const MAX_WAVES: u8 = 5;

/// Base hue drifts one step per this many wall-clock milliseconds,
/// independent of frame rate.
const HUE_DRIFT_MS: u64 = 50;

#[derive(Debug, Clone)]
pub struct PulseEffect {
    len: usize,
    base_hue: u8,
    hue_step: u8,
    wave_count: u8,
    topology: Topology,
    /// Wall-clock ms of the last hue drift step, set on first render.
    hue_clock: Option<u64>,
    initialized: bool,
}

impl PulseEffect {
    pub fn new(len: usize, topology: Topology) -> Self {
        let initialized = len > 0;
        if !initialized {
            #[cfg(feature = "esp32-log")]
            println!("pulse effect disabled: invalid strip length {}", len);
        }

        Self {
            len,
            base_hue: 0,
            hue_step: 1,
            wave_count: 1,
            topology,
            hue_clock: None,
            initialized,
        }
    }

    pub fn set_hue(&mut self, hue: u8) {
        self.base_hue = hue;
    }

    pub fn set_hue_step(&mut self, step: u8) {
        self.hue_step = step;
    }

    /// Number of superimposed waves, clamped to 1..=5.
    pub fn set_wave_count(&mut self, count: u8) {
        self.wave_count = count.clamp(MIN_WAVES, MAX_WAVES);
    }

    /// Current base hue (drifts with wall-clock time).
    #[must_use]
    pub const fn base_hue(&self) -> u8 {
        self.base_hue
    }

    /// Advance the base hue by one step per elapsed 50 ms window.
    fn drift_hue(&mut self, now_ms: u64) {
        let last = *self.hue_clock.get_or_insert(now_ms);
        let steps = (now_ms.saturating_sub(last)) / HUE_DRIFT_MS;
        if steps > 0 {
            #[allow(clippy::cast_possible_truncation)]
            let advance = (u64::from(self.hue_step) * steps) as u8;
            self.base_hue = self.base_hue.wrapping_add(advance);
            self.hue_clock = Some(last + steps * HUE_DRIFT_MS);
        }
    }
}

impl Effect for PulseEffect {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        if !self.initialized || leds.is_empty() {
            return;
        }
        let n = self.len.min(leds.len());
        let now_ms = now.as_millis();

        for i in 0..n {
            #[allow(clippy::cast_possible_truncation)]
            let d = self.topology.distance_from_root(i, n) as u8;

            // Sum of bounded waves; each wave's amplitude is capped at 255/w
            // so the saturating total stays meaningful even with five waves.
            let mut brightness: u16 = 0;
            for w in MIN_WAVES..=self.wave_count {
                brightness += u16::from(beatsin8(
                    10 * w,
                    0,
                    255 / w,
                    now_ms,
                    d.wrapping_mul(8),
                ));
            }
            #[allow(clippy::cast_possible_truncation)]
            let brightness = brightness.min(255) as u8;

            leds[i] = hsv(self.base_hue.wrapping_add(d), 255, brightness);
        }

        self.drift_hue(now_ms);
    }

    fn reset(&mut self) {
        self.base_hue = 0;
        self.hue_clock = None;
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }
}
