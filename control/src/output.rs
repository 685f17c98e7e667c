//! Structures passing desired peripheral state back to the firmware.

use heapless::Vec;

use crate::store::PEDALS;

/// A control change to be transmitted.
///
/// The device speaks on a single fixed MIDI channel, so only the
/// controller number and its new value are carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlChange {
    pub controller: u8,
    pub value: u8,
}

/// Desired state of output peripherals after processing one snapshot.
///
/// Each pedal contributes at most one message per tick, hence the queue
/// capacity.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DesiredOutput {
    pub control_changes: Vec<ControlChange, PEDALS>,
    pub led: bool,
}
