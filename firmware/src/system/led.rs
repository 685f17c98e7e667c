use crate::system::hal::gpio::{gpioc, Output, PushPull};

pub type Pin = gpioc::PC13<Output<PushPull>>;

/// The on-board led, wired active low.
pub struct ActivityLed {
    pin: Pin,
}

impl ActivityLed {
    pub(crate) fn new(mut pin: Pin) -> Self {
        pin.set_high();
        Self { pin }
    }

    pub fn set(&mut self, on: bool) {
        if on {
            self.pin.set_low();
        } else {
            self.pin.set_high();
        }
    }
}
