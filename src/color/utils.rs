use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};
use crate::math8::scale8;

/// Build an RGB color from hue/saturation/value on the 0-255 wheel.
#[inline]
pub fn hsv(hue: u8, sat: u8, val: u8) -> Rgb {
    hsv2rgb(Hsv { hue, sat, val })
}

/// Fill a whole slice with one color.
#[inline]
pub fn fill_solid(leds: &mut [Rgb], color: Rgb) {
    leds.fill(color);
}

/// Dim every pixel toward black by `amount` (0 = untouched, 255 = black).
pub fn fade_to_black_by(leds: &mut [Rgb], amount: u8) {
    let keep = 255 - amount;
    for led in leds {
        led.r = scale8(led.r, keep);
        led.g = scale8(led.g, keep);
        led.b = scale8(led.b, keep);
    }
}
