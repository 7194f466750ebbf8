//! Solid color effect: the whole strip at one slowly drifting hue.

use embassy_time::Instant;

use super::Effect;
use crate::color::{Rgb, fill_solid, hsv};

#[derive(Debug, Clone, Default)]
pub struct SolidColorEffect {
    step: u16,
}

impl SolidColorEffect {
    #[must_use]
    pub const fn new() -> Self {
        Self { step: 0 }
    }
}

impl Effect for SolidColorEffect {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        // Half a hue step per frame keeps the drift slow enough to read as
        // a steady color.
        #[allow(clippy::cast_possible_truncation)]
        let hue = (self.step / 2) as u8;
        fill_solid(leds, hsv(hue, 255, 255));

        self.step = self.step.wrapping_add(1);
    }

    fn reset(&mut self) {
        self.step = 0;
    }
}
