//! The top level store turning input snapshots into desired outputs.

use heapless::Vec;

use crate::config::Config;
use crate::led::Led;
use crate::log;
use crate::output::{ControlChange, DesiredOutput};
use crate::pedal::Pedal;
use crate::telemetry::Report;

/// Number of pedals connected to the device.
pub const PEDALS: usize = 2;

/// MIDI controller driven by the first pedal.
pub const SOFT_CONTROLLER: u8 = 67;
/// MIDI controller driven by the second pedal.
pub const SUSTAIN_CONTROLLER: u8 = 64;

/// Raw sensor readings of both pedals, taken within a single loop tick.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub sensors: [u16; PEDALS],
}

/// The main store of pedal state.
///
/// This struct is the central piece of the control module. It takes a
/// `Snapshot` of raw sensor readings on its input, runs each pedal's
/// conditioning pipeline, and returns the messages to transmit together
/// with the desired state of the activity led.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    config: Config,
    pedals: [Pedal; PEDALS],
    led: Led,
}

impl Store {
    /// Create the store, seeding calibration from the power-up readings.
    ///
    /// The initial snapshot is assumed to catch both pedals in their
    /// released position.
    #[must_use]
    pub fn new(initial: Snapshot, config: Config) -> Self {
        Self {
            config,
            pedals: [
                Pedal::new(SOFT_CONTROLLER, initial.sensors[0], &config),
                Pedal::new(SUSTAIN_CONTROLLER, initial.sensors[1], &config),
            ],
            led: Led::default(),
        }
    }

    /// Process one tick's worth of sensor readings.
    pub fn update(&mut self, snapshot: Snapshot) -> DesiredOutput {
        self.led.tick();

        let mut control_changes = Vec::new();
        for (pedal, raw) in self.pedals.iter_mut().zip(snapshot.sensors) {
            if let Some(value) = pedal.update(raw, &self.config) {
                log::info!("CC {=u8} set to {=u8}", pedal.controller, value);
                let _ = control_changes.push(ControlChange {
                    controller: pedal.controller,
                    value,
                });
                self.led.trigger();
            }
        }

        DesiredOutput {
            control_changes,
            led: self.led.triggered(),
        }
    }

    /// Pure read of pedal state for the diagnostic line.
    #[must_use]
    pub fn report(&self) -> Report {
        Report::new(&self.pedals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn released_store() -> Store {
        Store::new(
            Snapshot {
                sensors: [1900, 1900],
            },
            Config::default(),
        )
    }

    #[test]
    fn when_nothing_moves_it_stays_silent() {
        let mut store = released_store();
        for _ in 0..10 {
            let output = store.update(Snapshot {
                sensors: [1900, 1900],
            });
            assert!(output.control_changes.is_empty());
            assert!(!output.led);
        }
    }

    #[test]
    fn when_a_pedal_hits_its_endstop_it_queues_one_message_and_lights_the_led() {
        let mut store = released_store();
        let output = store.update(Snapshot {
            sensors: [1600, 1900],
        });
        assert_eq!(
            output.control_changes.as_slice(),
            &[ControlChange {
                controller: SOFT_CONTROLLER,
                value: 127,
            }]
        );
        assert!(output.led);

        let output = store.update(Snapshot {
            sensors: [1600, 1900],
        });
        assert!(output.control_changes.is_empty());
        assert!(output.led, "pulse should outlast the triggering tick");
    }

    #[test]
    fn when_both_pedals_move_it_queues_a_message_for_each() {
        let mut store = released_store();
        let output = store.update(Snapshot {
            sensors: [1600, 1600],
        });
        assert_eq!(
            output.control_changes.as_slice(),
            &[
                ControlChange {
                    controller: SOFT_CONTROLLER,
                    value: 127,
                },
                ControlChange {
                    controller: SUSTAIN_CONTROLLER,
                    value: 127,
                },
            ]
        );
    }

    #[test]
    fn when_no_message_goes_out_for_the_whole_pulse_the_led_goes_dark() {
        let mut store = released_store();
        store.update(Snapshot {
            sensors: [1600, 1900],
        });

        let mut lit = 0;
        loop {
            let output = store.update(Snapshot {
                sensors: [1600, 1900],
            });
            if !output.led {
                break;
            }
            lit += 1;
            assert!(lit < 200, "led never went dark");
        }
        assert_eq!(lit, 99);
    }
}
