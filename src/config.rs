//! Persisted device configuration.
//!
//! The engine only reads and writes the structured value; how it is encoded
//! and where it lives (EEPROM, flash, a host file) is the store's concern.

use embassy_time::Duration;

use crate::effect::EffectId;
use crate::impact::ThresholdConfig;

/// Settings that survive a power cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffConfig {
    /// Effect restored at boot.
    pub mode: EffectId,
    /// Master brightness.
    pub brightness: u8,
    /// Impact threshold and cooldown.
    pub impact: ThresholdConfig,
    /// How long the white impact flash overlays the active effect.
    pub flash_duration: Duration,
}

impl Default for StaffConfig {
    fn default() -> Self {
        Self {
            mode: EffectId::Fire,
            brightness: 150,
            impact: ThresholdConfig::default(),
            flash_duration: Duration::from_millis(100),
        }
    }
}

/// Abstract persistent settings store.
pub trait SettingsStore {
    /// Load the stored configuration; `None` when nothing valid is stored.
    fn load(&mut self) -> Option<StaffConfig>;

    /// Persist the configuration.
    fn save(&mut self, config: &StaffConfig);
}
