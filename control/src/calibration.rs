//! Auto-calibration of a pedal's usable sensor range.

/// Calibrated limits of a single analog sensor.
///
/// The limits start around the power-up reading and move outwards as the
/// pedal is observed traveling further, so the full range of motion gets
/// tracked without manual calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bounds {
    pub low: u16,
    pub high: u16,
}

impl Bounds {
    /// Seed the limits from the first sample taken at power-up.
    ///
    /// The sample is assumed to catch the pedal in its released position.
    #[must_use]
    pub fn seed(initial: u16, deadzone: u16) -> Self {
        let high = initial.saturating_sub(deadzone);
        let low = high.saturating_sub(deadzone);
        Self { low, high }
    }

    /// Move a limit outwards when the sample reaches past it.
    ///
    /// Limits never tighten back. A transient noise spike thus permanently
    /// widens the range until reset.
    pub fn widen(&mut self, raw: u16, deadzone: u16) {
        if raw.saturating_add(deadzone) < self.low {
            self.low = raw + deadzone;
        }
        if raw.saturating_sub(deadzone) > self.high {
            self.high = raw - deadzone;
        }
    }

    #[must_use]
    pub fn span(&self) -> u16 {
        self.high - self.low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_seeded_it_sits_one_dead_zone_below_the_initial_reading() {
        let bounds = Bounds::seed(1900, 100);
        assert_eq!(bounds.high, 1800);
        assert_eq!(bounds.low, 1700);
    }

    #[test]
    fn when_seeded_near_zero_it_saturates_instead_of_wrapping() {
        let bounds = Bounds::seed(50, 100);
        assert_eq!(bounds.high, 0);
        assert_eq!(bounds.low, 0);
    }

    #[test]
    fn when_sample_reaches_below_the_low_limit_it_widens_down() {
        let mut bounds = Bounds {
            low: 500,
            high: 700,
        };
        bounds.widen(350, 100);
        assert_eq!(bounds.low, 450);
        assert_eq!(bounds.high, 700);
    }

    #[test]
    fn when_sample_reaches_above_the_high_limit_it_widens_up() {
        let mut bounds = Bounds {
            low: 500,
            high: 700,
        };
        bounds.widen(850, 100);
        assert_eq!(bounds.low, 500);
        assert_eq!(bounds.high, 750);
    }

    #[test]
    fn when_sample_stays_within_the_limits_it_keeps_them_intact() {
        let mut bounds = Bounds {
            low: 500,
            high: 700,
        };
        for raw in [450, 500, 600, 700, 790] {
            bounds.widen(raw, 100);
            assert_eq!(bounds.low, 500);
            assert_eq!(bounds.high, 700);
        }
    }

    #[test]
    fn when_limits_were_widened_by_a_spike_they_never_tighten_back() {
        let mut bounds = Bounds {
            low: 500,
            high: 700,
        };
        bounds.widen(850, 100);
        for _ in 0..1000 {
            bounds.widen(600, 100);
        }
        assert_eq!(bounds.high, 750);
    }
}
