use duopedal_control::store::Snapshot;
use nb::block;

use crate::system::hal::adc::Adc;
use crate::system::hal::gpio::{gpioa, Analog};
use crate::system::hal::pac::ADC1;
use crate::system::hal::prelude::*;

pub type SoftPin = gpioa::PA0<Analog>;
pub type SustainPin = gpioa::PA1<Analog>;

pub struct Pins {
    pub soft: SoftPin,
    pub sustain: SustainPin,
}

/// Both pedal position sensors and the ADC sampling them.
pub struct Sensors {
    adc: Adc<ADC1>,
    pins: Pins,
    last: Snapshot,
}

impl Sensors {
    pub(crate) fn new(pins: Pins, adc: Adc<ADC1>) -> Self {
        Self {
            adc,
            pins,
            last: Snapshot::default(),
        }
    }

    /// Sample both channels, one blocking conversion each.
    ///
    /// A failed conversion leaves the previous reading in place.
    pub fn sample(&mut self) -> Snapshot {
        self.last.sensors[0] =
            block!(self.adc.read(&mut self.pins.soft)).unwrap_or(self.last.sensors[0]);
        self.last.sensors[1] =
            block!(self.adc.read(&mut self.pins.sustain)).unwrap_or(self.last.sensors[1]);
        self.last
    }
}
