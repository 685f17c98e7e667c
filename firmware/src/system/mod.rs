pub mod led;
pub mod midi;
pub mod sensors;

pub use stm32f1xx_hal as hal;

use hal::adc::Adc;
use hal::pac::{CorePeripherals, Peripherals as DevicePeripherals};
use hal::prelude::*;
use hal::timer::SysDelay;
use hal::usb::Peripheral as UsbPeripheral;

use led::ActivityLed;
use sensors::{Pins as SensorPins, Sensors};

/// Hardware abstraction of the board.
pub struct System {
    pub delay: SysDelay,
    pub led: ActivityLed,
    pub sensors: Sensors,
    pub usb: UsbPeripheral,
}

impl System {
    /// Initialize system abstraction.
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        let mut flash = dp.FLASH.constrain();
        let rcc = dp.RCC.constrain();
        let clocks = rcc
            .cfgr
            .use_hse(8.MHz())
            .sysclk(72.MHz())
            .pclk1(36.MHz())
            .adcclk(12.MHz())
            .freeze(&mut flash.acr);
        assert!(clocks.usbclk_valid());

        let mut gpioa = dp.GPIOA.split();
        let mut gpioc = dp.GPIOC.split();

        let mut delay = cp.SYST.delay(&clocks);

        // Pulling D+ low for a moment makes the host re-enumerate the
        // device after a reset, without replugging the cable.
        let mut usb_dp = gpioa.pa12.into_push_pull_output(&mut gpioa.crh);
        usb_dp.set_low();
        delay.delay_ms(10_u32);

        let usb = UsbPeripheral {
            usb: dp.USB,
            pin_dm: gpioa.pa11,
            pin_dp: usb_dp.into_floating_input(&mut gpioa.crh),
        };

        let adc = Adc::adc1(dp.ADC1, clocks);
        let sensors = Sensors::new(
            SensorPins {
                soft: gpioa.pa0.into_analog(&mut gpioa.crl),
                sustain: gpioa.pa1.into_analog(&mut gpioa.crl),
            },
            adc,
        );

        let led = ActivityLed::new(gpioc.pc13.into_push_pull_output(&mut gpioc.crh));

        Self {
            delay,
            led,
            sensors,
            usb,
        }
    }
}
