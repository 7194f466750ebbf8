//! Impact-threshold calibration.
//!
//! A one-shot, externally triggered procedure: sample the resting baseline
//! for a fixed window, then capture the peak magnitude of a fixed number of
//! deliberate test hits, and derive a threshold that clears the measured
//! noise floor while still catching the lightest test hit.
//!
//! The session is an explicit state machine advanced one step per tick, so
//! it runs inside the normal render loop without blocking on the ready
//! trigger between trials. The recommended threshold only exists once the
//! whole procedure finishes; dropping a session mid-way leaves the
//! detector's configuration untouched.

use embassy_time::{Duration, Instant};
use heapless::Vec;

/// How long the device is expected to rest while the baseline is sampled.
const BASELINE_WINDOW: Duration = Duration::from_secs(3);

/// Peak-tracking window for each test hit.
const CAPTURE_WINDOW: Duration = Duration::from_secs(3);

/// Number of test hits sampled.
const IMPACT_TRIALS: usize = 5;

/// Resting-noise statistics gathered during the baseline phase.
#[derive(Debug, Clone, Copy)]
pub struct BaselineStats {
    pub min: u16,
    pub max: u16,
    sum: u32,
    count: u32,
}

impl BaselineStats {
    const fn new() -> Self {
        Self {
            min: u16::MAX,
            max: 0,
            sum: 0,
            count: 0,
        }
    }

    fn record(&mut self, raw: u16) {
        self.min = self.min.min(raw);
        self.max = self.max.max(raw);
        self.sum += u32::from(raw);
        self.count += 1;
    }

    /// Running average, 0 when no samples were seen.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn average(&self) -> u16 {
        if self.count == 0 {
            return 0;
        }
        (self.sum / self.count) as u16
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Baseline,
    AwaitReady,
    Capture { started: Instant },
    Done,
}

/// What the session is doing after the latest step, for UI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationStatus {
    /// Resting baseline is being sampled; keep the staff still.
    SamplingBaseline,
    /// Waiting for the ready trigger before trial `trial` (0-based).
    AwaitingReady { trial: u8 },
    /// Tracking the peak of trial `trial`.
    Capturing { trial: u8 },
    /// Finished. `threshold` is `None` when the session aborted without a
    /// full set of captured hits, in which case the previous threshold must
    /// be kept.
    Complete { threshold: Option<u16> },
}

/// Transient calibration session.
///
/// Feed it one `step` per tick with the latest raw magnitude (if the sensor
/// delivered one) and the state of the ready trigger.
#[derive(Debug, Clone)]
pub struct Calibrator {
    phase: Phase,
    phase_started: Instant,
    baseline: BaselineStats,
    peaks: Vec<u16, IMPACT_TRIALS>,
    trial_peak: u16,
    trial_sampled: bool,
}

impl Calibrator {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            phase: Phase::Baseline,
            phase_started: now,
            baseline: BaselineStats::new(),
            peaks: Vec::new(),
            trial_peak: 0,
            trial_sampled: false,
        }
    }

    /// Baseline statistics gathered so far.
    #[must_use]
    pub fn baseline(&self) -> &BaselineStats {
        &self.baseline
    }

    /// Advance the session by one tick.
    ///
    /// `raw` is the latest scaled magnitude (`None` if the sensor read
    /// failed this tick), `ready` the single-shot trigger input.
    pub fn step(&mut self, raw: Option<u16>, ready: bool, now: Instant) -> CalibrationStatus {
        match self.phase {
            Phase::Baseline => {
                if let Some(raw) = raw {
                    self.baseline.record(raw);
                }
                if now.duration_since(self.phase_started) >= BASELINE_WINDOW {
                    self.phase = Phase::AwaitReady;
                    return CalibrationStatus::AwaitingReady { trial: 0 };
                }
                CalibrationStatus::SamplingBaseline
            }
            Phase::AwaitReady => {
                if ready {
                    self.trial_peak = 0;
                    self.trial_sampled = false;
                    self.phase = Phase::Capture { started: now };
                    return CalibrationStatus::Capturing {
                        trial: self.trial_index(),
                    };
                }
                CalibrationStatus::AwaitingReady {
                    trial: self.trial_index(),
                }
            }
            Phase::Capture { started } => {
                if let Some(raw) = raw {
                    self.trial_peak = self.trial_peak.max(raw);
                    self.trial_sampled = true;
                }
                if now.duration_since(started) >= CAPTURE_WINDOW {
                    // Dead sensor for the whole window: abort the session
                    // rather than wait forever on trials that cannot produce
                    // data. Peaks from earlier trials are discarded; a
                    // partial session never recommends a threshold.
                    if !self.trial_sampled {
                        self.peaks.clear();
                        self.phase = Phase::Done;
                        return CalibrationStatus::Complete { threshold: None };
                    }
                    let _ = self.peaks.push(self.trial_peak);
                    if self.peaks.is_full() {
                        self.phase = Phase::Done;
                        return CalibrationStatus::Complete {
                            threshold: self.recommendation(),
                        };
                    }
                    self.phase = Phase::AwaitReady;
                    return CalibrationStatus::AwaitingReady {
                        trial: self.trial_index(),
                    };
                }
                CalibrationStatus::Capturing {
                    trial: self.trial_index(),
                }
            }
            Phase::Done => CalibrationStatus::Complete {
                threshold: self.recommendation(),
            },
        }
    }

    /// Threshold derived from the captured data, if any hits were captured.
    ///
    /// `max(lightest_hit * 0.8, noise_floor * 1.5)` in integer math: 80% of
    /// the lightest deliberate hit, floored at 1.5x the resting noise peak
    /// so a quiet baseline can never produce a hair-trigger threshold.
    #[must_use]
    pub fn recommendation(&self) -> Option<u16> {
        let lightest = *self.peaks.iter().min()?;
        let noise_floor = if self.baseline.count == 0 {
            0
        } else {
            self.baseline.max
        };

        let from_hit = u32::from(lightest) * 4 / 5;
        let from_noise = u32::from(noise_floor) * 3 / 2;
        #[allow(clippy::cast_possible_truncation)]
        Some(from_hit.max(from_noise).min(u32::from(u16::MAX)) as u16)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn trial_index(&self) -> u8 {
        self.peaks.len() as u8
    }
}
