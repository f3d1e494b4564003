//! Coilrail - Two-Stage Coil Launcher Firmware
//!
//! Main firmware binary for RP2040-based launcher boards. Coil A kicks the
//! sled off the start; hall sensor 1 hands it to coil B after an adjustable
//! hold-off, and hall sensor 2 gives the exit speed.
//!
//! Pin assignments:
//! - GPIO0: diagnostic UART TX
//! - GPIO2 / GPIO5: hall sensors 1 and 2 (pull-up, low = sled present)
//! - GPIO3 / GPIO4: coil A / coil B gate drive
//! - GPIO6 / GPIO7 / GPIO8: status LED red / green / blue (common anode)
//! - GPIO10: launch switch (pull-up, low = pressed)
//! - GPIO28: hold-off potentiometer (ADC2)

#![no_std]
#![no_main]

use coilrail_core::LaunchController;
use coilrail_drivers::{DebouncedSwitch, GpioCoil, HallSensor, HoldOffPot, PinRig, RgbLed};
use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::uart::{Config as UartConfig, UartTx};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

mod board;
mod config;
mod serial;
mod tasks;

use crate::board::{EmbassyClock, RpAnalog, RpInput, RpOutput};
use crate::config::{LAUNCH_CONFIG, SERIAL_BAUD};
use crate::serial::{DiagnosticSink, UartLines};

/// Time for the serial link and the coil supply to settle after reset
const BOOT_SETTLE_MS: u64 = 1000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Coilrail firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Coils first, so the gates are held off from the earliest point
    let coil_a = GpioCoil::new_active_high(RpOutput(Output::new(p.PIN_3, Level::Low)));
    let coil_b = GpioCoil::new_active_high(RpOutput(Output::new(p.PIN_4, Level::Low)));

    // Common-anode LED: high = off
    let indicator = RgbLed::new(
        RpOutput(Output::new(p.PIN_6, Level::High)),
        RpOutput(Output::new(p.PIN_7, Level::High)),
        RpOutput(Output::new(p.PIN_8, Level::High)),
    );

    let sensor1 = HallSensor::new(RpInput(Input::new(p.PIN_2, Pull::Up)));
    let sensor2 = HallSensor::new(RpInput(Input::new(p.PIN_5, Pull::Up)));
    let switch = DebouncedSwitch::new(
        RpInput(Input::new(p.PIN_10, Pull::Up)),
        LAUNCH_CONFIG.debounce_window_ms,
    );

    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let pot_channel = Channel::new_pin(p.PIN_28, Pull::None);
    let holdoff = HoldOffPot::new(RpAnalog::new(adc, pot_channel));
    if holdoff.full_scale() != LAUNCH_CONFIG.holdoff.in_max {
        warn!(
            "Hold-off scale tops out at {} but the ADC reads up to {}",
            LAUNCH_CONFIG.holdoff.in_max,
            holdoff.full_scale()
        );
    }

    let mut uart_config = UartConfig::default();
    uart_config.baudrate = SERIAL_BAUD;
    let tx = UartTx::new_blocking(p.UART0, p.PIN_0, uart_config);
    let sink = DiagnosticSink::new(UartLines::new(tx));
    info!("UART initialized at {} baud", SERIAL_BAUD);

    let controller = match LaunchController::try_new(LAUNCH_CONFIG) {
        Ok(controller) => controller,
        Err(e) => {
            // build.rs has already rejected this config
            error!("Invalid launch configuration: {}", e);
            loop {
                Timer::after_secs(60).await;
            }
        }
    };
    info!("Launch config: {}", LAUNCH_CONFIG);

    let rig = PinRig {
        sensor1,
        sensor2,
        switch,
        holdoff,
        coil_a,
        coil_b,
        indicator,
        clock: EmbassyClock,
        delay: Delay,
        sink,
    };

    Timer::after_millis(BOOT_SETTLE_MS).await;

    spawner.spawn(tasks::launch_task(controller, rig)).unwrap();

    info!("Launch task spawned, firmware running");

    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
