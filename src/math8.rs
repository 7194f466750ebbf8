//! 8-bit fixed-point math helpers.
//!
//! Integer ports of the usual LED-strip math primitives. Everything here is
//! branch-light and allocation-free so it stays cheap on small targets.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Video-legal variant of [`scale8`]: never drops a non-zero value to zero.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8_video(value: u8, scale: u8) -> u8 {
    let scaled = ((value as u16 * scale as u16) >> 8) as u8;
    if value != 0 && scale != 0 {
        scaled + 1
    } else {
        scaled
    }
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

// Interleaved base/slope table for the piecewise-linear sine approximation.
const SIN8_INTERLEAVE: [u8; 8] = [0, 49, 49, 41, 90, 27, 117, 10];

/// Sine of `theta` where a full turn is 256 units; output is 0-255
/// centered on 128.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn sin8(theta: u8) -> u8 {
    let mut offset = theta;
    if theta & 0x40 != 0 {
        offset = 255 - offset;
    }
    offset &= 0x3F; // 0..63

    let mut secoffset = offset & 0x0F; // 0..15
    if theta & 0x40 != 0 {
        secoffset += 1;
    }

    let section = offset >> 4; // 0..3
    let s2 = (section * 2) as usize;
    let base = SIN8_INTERLEAVE[s2];
    let slope = SIN8_INTERLEAVE[s2 + 1];

    let mx = ((slope as u16 * secoffset as u16) >> 4) as u8;
    let mut y = mx as i16 + base as i16;
    if theta & 0x80 != 0 {
        y = -y;
    }
    (y + 128) as u8
}

/// Free-running sawtooth at `bpm` beats per minute, one beat per 256 units.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn beat8(bpm: u8, now_ms: u64) -> u8 {
    ((now_ms.wrapping_mul(bpm as u64).wrapping_mul(280)) >> 16) as u8
}

/// Sine wave oscillating between `lowest` and `highest` at `bpm` beats per
/// minute, with an additional phase offset in 1/256ths of a turn.
///
/// Driven by wall-clock milliseconds so the wave speed is independent of the
/// caller's frame rate.
#[inline]
pub const fn beatsin8(bpm: u8, lowest: u8, highest: u8, now_ms: u64, phase_offset: u8) -> u8 {
    let beat = beat8(bpm, now_ms);
    let wave = sin8(beat.wrapping_add(phase_offset));
    lowest + scale8(wave, highest - lowest)
}
