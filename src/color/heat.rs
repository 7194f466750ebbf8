//! Heat-to-color palette for the fire effect.

use crate::color::Rgb;
use crate::math8::scale8_video;

/// Map a heat intensity (0-255) onto the classic black -> red -> yellow ->
/// white fire palette. Monotonic in intensity.
#[must_use]
pub fn heat_color(temperature: u8) -> Rgb {
    // Scale down to 0..=191, split into three 64-step ramps.
    let t192 = scale8_video(temperature, 191);

    let mut heatramp = t192 & 0x3F; // 0..63 within the ramp
    heatramp <<= 2; // scale up to 0..252

    if t192 & 0x80 != 0 {
        // Hottest third: full red and green, ramp blue
        Rgb {
            r: 255,
            g: 255,
            b: heatramp,
        }
    } else if t192 & 0x40 != 0 {
        // Middle third: full red, ramp green
        Rgb {
            r: 255,
            g: heatramp,
            b: 0,
        }
    } else {
        // Coolest third: ramp red only
        Rgb {
            r: heatramp,
            g: 0,
            b: 0,
        }
    }
}
