#![no_std]

pub mod calibration;
pub mod color;
pub mod command;
pub mod config;
pub mod effect;
pub mod engine;
pub mod filter;
pub mod frame_pacer;
pub mod impact;
pub mod math8;
pub mod rng;
pub mod topology;

pub use calibration::{BaselineStats, CalibrationStatus, Calibrator};
pub use command::{CommandQueue, CommandReceiver, CommandSender, ControlCommand};
pub use config::{SettingsStore, StaffConfig};
pub use effect::{EffectContext, EffectId, EffectSlot};
pub use engine::{EngineConfig, LightEngine};
pub use filter::{FrameFilters, TYPICAL_STRIP_CORRECTION};
pub use frame_pacer::FramePacer;
pub use impact::{AccelSource, AccelVector, DetectorState, ImpactDetector, ThresholdConfig};
pub use topology::Topology;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The light engine is generic over this trait.
pub trait StripDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
