//! Led abstraction keeping it lit.

/// How long the led stays lit after a trigger, in loop ticks.
const PULSE_TICKS: u32 = 100;

/// Abstraction of the activity led.
///
/// A single led shared by both pedals is pulsed whenever a message goes
/// out and remains lit for a moment so short bursts stay visible.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Led {
    remaining: u32,
}

impl Led {
    pub fn trigger(&mut self) {
        self.remaining = PULSE_TICKS;
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    #[must_use]
    pub fn triggered(&self) -> bool {
        self.remaining > 0
    }
}
