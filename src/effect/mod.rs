//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.

mod fire;
mod pulse;
mod rainbow;
mod solid;
mod strobe;

use embassy_time::Instant;
pub use fire::FireEffect;
pub use pulse::PulseEffect;
pub use rainbow::{RainbowEffect, RainbowMode};
pub use solid::SolidColorEffect;
pub use strobe::{StrobeEffect, StrobeMode};

use crate::{color::Rgb, topology::Topology};

const EFFECT_ID_SOLID: u8 = 0;
const EFFECT_ID_FIRE: u8 = 1;
const EFFECT_ID_PULSE: u8 = 2;
const EFFECT_ID_RAINBOW: u8 = 3;
const EFFECT_ID_STROBE: u8 = 4;

pub trait Effect {
    /// Render a single frame
    fn render(&mut self, now: Instant, leds: &mut [Rgb]);

    /// Reset effect state
    fn reset(&mut self) {}

    /// Whether construction succeeded. Disabled effects render nothing.
    fn is_initialized(&self) -> bool {
        true
    }
}

/// Shared construction inputs for every effect variant.
///
/// One value of this lives in the engine; effects are rebuilt from it on
/// every mode switch instead of being kept alive behind nullable pointers.
#[derive(Debug, Clone, Copy)]
pub struct EffectContext {
    /// Number of pixels on the strip this effect renders to.
    pub strip_len: usize,
    /// Physical arrangement of the strip.
    pub topology: Topology,
    /// Render back-to-front so a mirrored second strip matches the first.
    pub reversed: bool,
    /// Seed for the effect's random source.
    pub rng_seed: u64,
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot<const MAX_LEDS: usize> {
    /// Whole strip at one slowly drifting hue
    Solid(SolidColorEffect),
    /// Heat-diffusion fire simulation
    Fire(FireEffect<MAX_LEDS>),
    /// Outward-radiating multi-wave pulse
    Pulse(PulseEffect),
    /// Rainbow cycle / moving gradient / twinkle
    Rainbow(RainbowEffect),
    /// Strobe and lightning
    Strobe(StrobeEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Solid = EFFECT_ID_SOLID,
    Fire = EFFECT_ID_FIRE,
    Pulse = EFFECT_ID_PULSE,
    Rainbow = EFFECT_ID_RAINBOW,
    Strobe = EFFECT_ID_STROBE,
}

impl EffectId {
    /// Number of selectable effects, for mode cycling.
    pub const COUNT: u8 = 5;

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_SOLID => Self::Solid,
            EFFECT_ID_FIRE => Self::Fire,
            EFFECT_ID_PULSE => Self::Pulse,
            EFFECT_ID_RAINBOW => Self::Rainbow,
            EFFECT_ID_STROBE => Self::Strobe,
            _ => return None,
        })
    }

    /// The effect after this one in the mode cycle.
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_raw((self as u8 + 1) % Self::COUNT).unwrap_or(Self::Solid)
    }

    pub fn to_slot<const MAX_LEDS: usize>(self, ctx: &EffectContext) -> EffectSlot<MAX_LEDS> {
        match self {
            Self::Solid => EffectSlot::Solid(SolidColorEffect::new()),
            Self::Fire => EffectSlot::Fire(FireEffect::new(
                ctx.strip_len,
                ctx.topology,
                ctx.reversed,
                ctx.rng_seed,
            )),
            Self::Pulse => EffectSlot::Pulse(PulseEffect::new(ctx.strip_len, ctx.topology)),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::new(
                ctx.strip_len,
                ctx.topology,
                ctx.rng_seed,
            )),
            Self::Strobe => EffectSlot::Strobe(StrobeEffect::new(
                ctx.strip_len,
                ctx.topology,
                ctx.rng_seed,
            )),
        }
    }
}

impl<const MAX_LEDS: usize> EffectSlot<MAX_LEDS> {
    /// Render the current effect
    pub fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        match self {
            Self::Solid(effect) => effect.render(now, leds),
            Self::Fire(effect) => effect.render(now, leds),
            Self::Pulse(effect) => effect.render(now, leds),
            Self::Rainbow(effect) => effect.render(now, leds),
            Self::Strobe(effect) => effect.render(now, leds),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Solid(effect) => Effect::reset(effect),
            Self::Fire(effect) => Effect::reset(effect),
            Self::Pulse(effect) => Effect::reset(effect),
            Self::Rainbow(effect) => Effect::reset(effect),
            Self::Strobe(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Solid(_) => EffectId::Solid,
            Self::Fire(_) => EffectId::Fire,
            Self::Pulse(_) => EffectId::Pulse,
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::Strobe(_) => EffectId::Strobe,
        }
    }

    /// Whether the underlying effect constructed successfully.
    pub fn is_initialized(&self) -> bool {
        match self {
            Self::Solid(effect) => effect.is_initialized(),
            Self::Fire(effect) => effect.is_initialized(),
            Self::Pulse(effect) => effect.is_initialized(),
            Self::Rainbow(effect) => effect.is_initialized(),
            Self::Strobe(effect) => effect.is_initialized(),
        }
    }
}
