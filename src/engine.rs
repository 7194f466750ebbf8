//! The per-strip light engine.
//!
//! Owns the frame buffer and the single active effect, drains the control
//! queue, and overlays the impact flash. Effects are rebuilt from
//! [`EffectContext`] on every mode switch; the buffer is fully cleared first
//! so no stale pixels from the previous effect survive the handover.

use embassy_time::{Duration, Instant};

use crate::color::{Rgb, fill_solid};
use crate::command::{CommandReceiver, ControlCommand};
use crate::config::StaffConfig;
use crate::effect::{EffectContext, EffectId, EffectSlot};
use crate::filter::FrameFilters;
use crate::topology::Topology;

const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Configuration for one engine instance (one physical strip).
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub mode: EffectId,
    pub strip_len: usize,
    pub topology: Topology,
    /// Render back-to-front; set on the mirrored second strip.
    pub reversed: bool,
    pub brightness: u8,
    pub color_correction: Rgb,
    pub flash_duration: Duration,
    pub rng_seed: u64,
}

impl EngineConfig {
    /// Build a per-strip config from the persisted settings.
    #[must_use]
    pub fn for_strip(
        settings: &StaffConfig,
        strip_len: usize,
        topology: Topology,
        reversed: bool,
        correction: Rgb,
        rng_seed: u64,
    ) -> Self {
        Self {
            mode: settings.mode,
            strip_len,
            topology,
            reversed,
            brightness: settings.brightness,
            color_correction: correction,
            flash_duration: settings.flash_duration,
            rng_seed,
        }
    }
}

/// Light engine - renders one strip, one frame per tick.
pub struct LightEngine<'a, const MAX_LEDS: usize, const COMMAND_QUEUE: usize> {
    commands: CommandReceiver<'a, COMMAND_QUEUE>,
    ctx: EffectContext,
    effect: EffectSlot<MAX_LEDS>,
    filters: FrameFilters,
    frame: [Rgb; MAX_LEDS],
    flash_started: Option<Instant>,
    flash_duration: Duration,
}

impl<'a, const MAX_LEDS: usize, const COMMAND_QUEUE: usize>
    LightEngine<'a, MAX_LEDS, COMMAND_QUEUE>
{
    pub fn new(commands: CommandReceiver<'a, COMMAND_QUEUE>, config: &EngineConfig) -> Self {
        let ctx = EffectContext {
            strip_len: config.strip_len.min(MAX_LEDS),
            topology: config.topology,
            reversed: config.reversed,
            rng_seed: config.rng_seed,
        };
        Self {
            commands,
            effect: config.mode.to_slot(&ctx),
            ctx,
            filters: FrameFilters::new(config.brightness, config.color_correction),
            frame: [BLACK; MAX_LEDS],
            flash_started: None,
            flash_duration: config.flash_duration,
        }
    }

    /// Process one frame.
    ///
    /// This is the main render loop step. Call this once per tick.
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        self.process_commands(now);

        let len = self.ctx.strip_len;

        // Impact flash overlays whatever effect is active.
        if let Some(started) = self.flash_started {
            if now.duration_since(started) < self.flash_duration {
                fill_solid(&mut self.frame[..len], WHITE);
                self.filters.brightness.apply(&mut self.frame[..len]);
                return &self.frame[..len];
            }
            self.flash_started = None;
            fill_solid(&mut self.frame[..len], BLACK);
        }

        self.effect.render(now, &mut self.frame[..len]);
        self.filters.apply(&mut self.frame[..len]);

        &self.frame[..len]
    }

    /// Drain pending control commands (non-blocking).
    fn process_commands(&mut self, now: Instant) {
        while let Some(command) = self.commands.try_receive() {
            match command {
                ControlCommand::SetMode(id) => self.set_mode(id),
                ControlCommand::NextMode => self.set_mode(self.effect.id().next()),
                ControlCommand::SetBrightness(level) => self.filters.brightness.set(level),
                ControlCommand::ImpactFlash => self.trigger_impact_flash(now),
            }
        }
    }

    /// Switch the active effect.
    ///
    /// The buffer is cleared before the new effect first renders, so a mode
    /// change never shows leftovers from the previous one.
    pub fn set_mode(&mut self, id: EffectId) {
        self.frame = [BLACK; MAX_LEDS];
        // Re-seed per activation so repeated switches do not replay the
        // same spark/strike sequence.
        self.ctx.rng_seed = self.ctx.rng_seed.wrapping_add(1);
        self.effect = id.to_slot(&self.ctx);
    }

    /// Show the white impact flash for the configured duration.
    pub fn trigger_impact_flash(&mut self, now: Instant) {
        self.flash_started = Some(now);
    }

    pub fn set_brightness(&mut self, level: u8) {
        self.filters.brightness.set(level);
    }

    #[must_use]
    pub const fn brightness(&self) -> u8 {
        self.filters.brightness.level()
    }

    /// Currently active effect id.
    #[must_use]
    pub fn mode(&self) -> EffectId {
        self.effect.id()
    }

    /// Whether the active effect constructed successfully.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.effect.is_initialized()
    }

    /// Get a reference to the active effect slot.
    #[must_use]
    pub fn effect(&self) -> &EffectSlot<MAX_LEDS> {
        &self.effect
    }

    /// Get a mutable reference to the active effect slot, for parameter
    /// tweaks (cooling, duty cycle, sub-modes).
    pub fn effect_mut(&mut self) -> &mut EffectSlot<MAX_LEDS> {
        &mut self.effect
    }
}
