//! Post-render frame filters: brightness scaling and color correction.
//!
//! Applied to the frame buffer after the active effect renders, in that
//! order. These replace what the strip driver would otherwise do globally:
//! a master brightness and a fixed per-channel correction for the usual
//! green/blue-heavy WS2812 strips.

use crate::color::Rgb;
use crate::math8::scale8;

/// Per-channel correction for a typical 5050 LED strip.
pub const TYPICAL_STRIP_CORRECTION: Rgb = Rgb {
    r: 255,
    g: 176,
    b: 240,
};

/// Master brightness, 0-255.
#[derive(Debug, Clone, Copy)]
pub struct BrightnessFilter {
    level: u8,
}

impl BrightnessFilter {
    #[must_use]
    pub const fn new(level: u8) -> Self {
        Self { level }
    }

    pub fn set(&mut self, level: u8) {
        self.level = level;
    }

    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    pub fn apply(&self, frame: &mut [Rgb]) {
        if self.level == 255 {
            return;
        }
        for led in frame {
            led.r = scale8(led.r, self.level);
            led.g = scale8(led.g, self.level);
            led.b = scale8(led.b, self.level);
        }
    }
}

/// Fixed per-channel color correction.
#[derive(Debug, Clone, Copy)]
pub struct ColorCorrection {
    correction: Rgb,
}

impl ColorCorrection {
    #[must_use]
    pub const fn new(correction: Rgb) -> Self {
        Self { correction }
    }

    pub fn apply(&self, frame: &mut [Rgb]) {
        for led in frame {
            led.r = scale8(led.r, self.correction.r);
            led.g = scale8(led.g, self.correction.g);
            led.b = scale8(led.b, self.correction.b);
        }
    }
}

/// The engine's output filter chain.
#[derive(Debug, Clone, Copy)]
pub struct FrameFilters {
    pub brightness: BrightnessFilter,
    pub correction: ColorCorrection,
}

impl FrameFilters {
    #[must_use]
    pub const fn new(brightness: u8, correction: Rgb) -> Self {
        Self {
            brightness: BrightnessFilter::new(brightness),
            correction: ColorCorrection::new(correction),
        }
    }

    pub fn apply(&self, frame: &mut [Rgb]) {
        self.correction.apply(frame);
        self.brightness.apply(frame);
    }
}
