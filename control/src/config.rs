//! Static configuration of the conditioning pipeline.

/// Tunables of the signal conditioning pipeline.
///
/// This is constructed once at startup and shared by both pedals.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Coefficient of the exponential moving average. 1.0 would pass
    /// samples through unfiltered, lower values reject more noise at the
    /// cost of lag.
    pub smoothing: f32,
    /// Margin in raw sensor units absorbed at both physical end-stops, so
    /// the mapped value reliably reaches the extremes instead of
    /// oscillating near them. Also sets the initial span of the calibrated
    /// limits.
    pub deadzone: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            smoothing: 0.2,
            deadzone: 100,
        }
    }
}
