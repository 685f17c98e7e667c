//! Per-pedal tracking of sensor samples and conditioning into MIDI values.

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::calibration::Bounds;
use crate::config::Config;

/// Region of pedal travel a sample falls into.
///
/// Samples at or past a calibrated limit count as the respective endstop,
/// anything strictly in between is tracked continuously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Region {
    Pressed,
    Released,
    Tracking,
}

/// State of a single expression pedal.
///
/// The pedal turns raw sensor samples into 0..=127 control values. Limits
/// auto-calibrate around the observed travel, endstop regions clamp to the
/// extremes, and readings in between get scaled and smoothened with an
/// exponential moving average.
///
/// Note that despite all its attributes are public, they should be only
/// read from.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pedal {
    /// Number of the MIDI continuous controller driven by this pedal.
    pub controller: u8,
    pub raw: u16,
    pub bounds: Bounds,
    pub last_value: u8,
}

impl Pedal {
    /// Create the pedal, seeding its calibration from the power-up sample.
    ///
    /// The pedal starts in the released region, with its last reported
    /// value at 0, so an untouched pedal stays silent.
    #[must_use]
    pub fn new(controller: u8, initial: u16, config: &Config) -> Self {
        Self {
            controller,
            raw: initial,
            bounds: Bounds::seed(initial, config.deadzone),
            last_value: 0,
        }
    }

    /// Process one sample, returning a new value when it changed.
    ///
    /// The endstop regions are edge-triggered: repeated samples past the
    /// same limit report nothing after the first one.
    pub fn update(&mut self, raw: u16, config: &Config) -> Option<u8> {
        self.raw = raw;
        self.bounds.widen(raw, config.deadzone);
        match self.region() {
            Region::Pressed => self.reach_endstop(127),
            Region::Released => self.reach_endstop(0),
            Region::Tracking => self.track(config),
        }
    }

    #[must_use]
    pub fn region(&self) -> Region {
        if self.raw <= self.bounds.low {
            Region::Pressed
        } else if self.raw >= self.bounds.high {
            Region::Released
        } else {
            Region::Tracking
        }
    }

    fn reach_endstop(&mut self, value: u8) -> Option<u8> {
        if self.last_value == value {
            return None;
        }
        self.last_value = value;
        Some(value)
    }

    fn track(&mut self, config: &Config) -> Option<u8> {
        let instant = self.scale()?;
        let smoothed = smooth(instant, self.last_value, config.smoothing);
        if smoothed == self.last_value {
            return None;
        }
        self.last_value = smoothed;
        Some(smoothed)
    }

    /// Inverse-linear mapping of the sample onto 0..=127.
    ///
    /// Higher sensor voltage means a released pedal, so readings near the
    /// low limit map close to 127. Returns `None` when the limits are too
    /// tight to divide by; the caller then holds the last value. Limits
    /// maintained by `Bounds` never get that tight.
    fn scale(&self) -> Option<u8> {
        let divisor = u32::from(self.bounds.span()).checked_sub(1)?;
        if divisor == 0 {
            return None;
        }
        let position = u32::from(self.raw - self.bounds.low);
        Some((127 - 127 * position / divisor) as u8)
    }
}

fn smooth(instant: u8, last: u8, smoothing: f32) -> u8 {
    let blend = smoothing * f32::from(instant) + (1.0 - smoothing) * f32::from(last);
    blend.round() as u8
}
