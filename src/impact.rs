//! Impact detection from a 3-axis accelerometer.
//!
//! Each tick the caller hands the detector the latest acceleration sample
//! (or `None` when the sensor link is down). The detector thresholds the
//! scaled magnitude, gates re-triggers behind a cooldown, and latches an
//! edge-triggered flag that is consumed on read, so one physical hit yields
//! exactly one observed trigger regardless of polling rate.

use embassy_time::{Duration, Instant};

/// One 3-axis acceleration sample in m/s^2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelVector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AccelVector {
    /// Euclidean magnitude of the sample.
    #[must_use]
    pub fn magnitude(self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Magnitude scaled to the integer raw unit the threshold is stored in
    /// (hundredths of m/s^2).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn raw(self) -> u16 {
        let scaled = self.magnitude() * 100.0;
        if scaled >= f32::from(u16::MAX) {
            u16::MAX
        } else {
            scaled as u16
        }
    }
}

/// Abstract accelerometer link.
///
/// `None` means the sensor is unavailable or the read failed; the detector
/// skips that tick and retries on the next one.
pub trait AccelSource {
    fn read_vector(&mut self) -> Option<AccelVector>;
}

/// Impact threshold and re-trigger gating.
///
/// Written only by the calibrator's committed result or a settings load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdConfig {
    /// Raw-unit magnitude above which an impact fires.
    pub threshold: u16,
    /// Minimum quiet time after a trigger before the next may fire.
    pub cooldown: Duration,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            threshold: 8000,
            cooldown: Duration::from_millis(500),
        }
    }
}

/// Observable detector state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorState {
    /// Watching for a threshold crossing.
    Armed,
    /// Recently triggered; crossings are ignored until the cooldown elapses.
    Cooling,
}

#[derive(Debug, Clone)]
pub struct ImpactDetector {
    config: ThresholdConfig,
    triggered_at: Option<Instant>,
    flag: bool,
    last_raw: Option<u16>,
}

impl ImpactDetector {
    #[must_use]
    pub const fn new(config: ThresholdConfig) -> Self {
        Self {
            config,
            triggered_at: None,
            flag: false,
            last_raw: None,
        }
    }

    /// Current threshold configuration.
    #[must_use]
    pub const fn config(&self) -> ThresholdConfig {
        self.config
    }

    /// Replace the threshold configuration (calibration result or settings
    /// load).
    pub fn set_config(&mut self, config: ThresholdConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn state(&self) -> DetectorState {
        match self.triggered_at {
            Some(_) => DetectorState::Cooling,
            None => DetectorState::Armed,
        }
    }

    /// The most recent raw magnitude, if any sample has been seen. Fed to
    /// the calibrator during its sampling windows.
    #[must_use]
    pub const fn last_raw(&self) -> Option<u16> {
        self.last_raw
    }

    /// Process one tick. A `None` sample leaves all state unchanged.
    pub fn update(&mut self, sample: Option<AccelVector>, now: Instant) {
        let Some(vector) = sample else {
            return;
        };
        let raw = vector.raw();
        self.last_raw = Some(raw);

        if let Some(triggered) = self.triggered_at {
            if now.duration_since(triggered) > self.config.cooldown {
                self.triggered_at = None;
            }
        }

        if self.triggered_at.is_none() && raw > self.config.threshold {
            self.triggered_at = Some(now);
            self.flag = true;
        }
    }

    /// Read and clear the impact flag.
    ///
    /// Consumed on read: a second call without a new trigger returns false.
    pub fn take_impact(&mut self) -> bool {
        let fired = self.flag;
        self.flag = false;
        fired
    }
}
