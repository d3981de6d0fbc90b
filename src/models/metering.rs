/// Decibel level engines report for silence. Also seeds the metering
/// snapshot before the first real reading arrives.
pub const SILENCE_FLOOR_DB: f64 = -120.0;

/// Instantaneous signal levels reported by the capture engine.
///
/// Decibel-scale readings; no history is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AudioMetering {
    pub peak_power: Option<f64>,
    pub average_power: Option<f64>,
    pub is_metering_enabled: Option<bool>,
}

impl AudioMetering {
    /// Floor-sentinel snapshot used at init, before the engine has metered
    /// anything.
    pub fn silence_floor() -> Self {
        Self {
            peak_power: Some(SILENCE_FLOOR_DB),
            average_power: Some(SILENCE_FLOOR_DB),
            is_metering_enabled: Some(true),
        }
    }
}
