//! Best-effort transmission of control changes over USB MIDI.

use duopedal_control::output::ControlChange;
use heapless::Vec;
use usb_device::bus::UsbBus;
use usbd_midi::message::{Channel, ControlFunction, FromClamped, Message, U7};
use usbd_midi::{CableNumber, UsbMidiClass};

/// The single MIDI channel the device speaks on.
const CHANNEL: Channel = Channel::Channel1;

const QUEUE_CAPACITY: usize = 8;

/// Outgoing message queue in front of the USB MIDI class.
///
/// Messages the bus refuses to take stay queued for the next tick. Once
/// the queue itself overflows, new messages are dropped; the transport is
/// fire-and-forget with no acknowledgment or retry.
#[derive(Default)]
pub struct MidiTransmitter {
    queue: Vec<ControlChange, QUEUE_CAPACITY>,
}

impl MidiTransmitter {
    pub fn push(&mut self, message: ControlChange) {
        let _ = self.queue.push(message);
    }

    /// Send as much of the queue as the bus accepts right now.
    pub fn flush<B: UsbBus>(&mut self, class: &mut UsbMidiClass<'_, B>) {
        while let Some(message) = self.queue.first().copied() {
            let packet = Message::ControlChange(
                CHANNEL,
                ControlFunction(U7::from_clamped(message.controller)),
                U7::from_clamped(message.value),
            )
            .into_packet(CableNumber::Cable0);
            if class.send_packet(packet).is_err() {
                break;
            }
            self.queue.remove(0);
        }
    }
}
