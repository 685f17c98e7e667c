#![no_main]
#![no_std]

use duopedal_firmware as _; // global logger + panicking-behavior

use core::fmt::Write;

use cortex_m::singleton;
use cortex_m_rt::entry;
use heapless::String;
use usb_device::bus::UsbBusAllocator;
use usb_device::device::{StringDescriptors, UsbDeviceBuilder, UsbVidPid};
use usbd_midi::UsbMidiClass;
use usbd_serial::SerialPort;

use duopedal_control::config::Config;
use duopedal_control::store::Store;
use duopedal_control::telemetry::Reporter;
use duopedal_firmware::system::hal::pac;
use duopedal_firmware::system::hal::prelude::*;
use duopedal_firmware::system::hal::usb::{Peripheral, UsbBus};
use duopedal_firmware::system::midi::MidiTransmitter;
use duopedal_firmware::system::System;

#[entry]
fn main() -> ! {
    defmt::info!("INIT");

    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = pac::Peripherals::take().unwrap();
    let mut system = System::init(cp, dp);

    let usb_bus: &UsbBusAllocator<UsbBus<Peripheral>> =
        singleton!(: UsbBusAllocator<UsbBus<Peripheral>> = UsbBus::new(system.usb)).unwrap();

    let mut midi = UsbMidiClass::new(usb_bus, 1, 0).unwrap();
    let mut serial = SerialPort::new(usb_bus);
    let mut usb_dev = UsbDeviceBuilder::new(usb_bus, UsbVidPid(0x1eaa, 0x0067))
        .strings(&[StringDescriptors::default()
            .manufacturer("riban")
            .product("Foot pedal x2")])
        .unwrap()
        .build();

    // The very first reading seeds the calibration. Both pedals are
    // expected to rest in their released position on power-up.
    let mut store = Store::new(system.sensors.sample(), Config::default());
    let mut transmitter = MidiTransmitter::default();
    let mut reporter = Reporter::default();
    let mut now_ms: u32 = 0;

    defmt::info!("RUN");

    loop {
        usb_dev.poll(&mut [&mut midi, &mut serial]);

        let output = store.update(system.sensors.sample());
        for message in &output.control_changes {
            transmitter.push(*message);
        }
        transmitter.flush(&mut midi);
        system.led.set(output.led);

        if reporter.poll(now_ms) {
            let mut line: String<128> = String::new();
            // A report that does not fit or a stalled link only costs us
            // this one line.
            if write!(line, "{}\r\n", store.report()).is_ok() {
                let _ = serial.write(line.as_bytes());
            }
        }

        // Lets the ADC input settle and bounds the sampling rate.
        system.delay.delay_ms(1_u32);
        now_ms = now_ms.wrapping_add(1);
    }
}
