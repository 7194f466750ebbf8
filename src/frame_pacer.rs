//! Frame pacing.
//!
//! Portable frame timing without async/await or platform-specific timers.
//! One `tick` renders a frame and writes it to the strip driver; the caller
//! is responsible for sleeping until the returned deadline.

use embassy_time::{Duration, Instant};

use crate::{LightEngine, StripDriver};

/// Default target frame rate. 10 ms frames keep the strobe duty timing
/// fine-grained enough down to the shortest period.
pub const DEFAULT_FPS: u32 = 100;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Drives one engine and one strip at a fixed frame rate with drift
/// correction: after a long stall the backlog is skipped instead of being
/// burst-rendered.
pub struct FramePacer<'a, O: StripDriver, const MAX_LEDS: usize, const COMMAND_QUEUE: usize> {
    output: O,
    engine: LightEngine<'a, MAX_LEDS, COMMAND_QUEUE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: StripDriver, const MAX_LEDS: usize, const COMMAND_QUEUE: usize>
    FramePacer<'a, O, MAX_LEDS, COMMAND_QUEUE>
{
    /// Create a pacer at [`DEFAULT_FRAME_DURATION`].
    pub fn new(engine: LightEngine<'a, MAX_LEDS, COMMAND_QUEUE>, driver: O) -> Self {
        Self::with_frame_duration(engine, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a pacer with a custom frame duration.
    pub fn with_frame_duration(
        engine: LightEngine<'a, MAX_LEDS, COMMAND_QUEUE>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            engine,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Render one frame, write it out, and return the next deadline.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: if we've fallen more than two frames behind,
        // reset instead of catching up.
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        let frame = self.engine.render(now);
        self.output.write(frame);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the strip driver.
    pub fn driver(&self) -> &O {
        &self.output
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &LightEngine<'a, MAX_LEDS, COMMAND_QUEUE> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut LightEngine<'a, MAX_LEDS, COMMAND_QUEUE> {
        &mut self.engine
    }
}
