//! Launch control task
//!
//! Runs the controller step as fast as the executor allows. The loop only
//! yields between steps; the coil B hold-off blocks inside a step.

use coilrail_core::LaunchController;
use coilrail_drivers::{DebouncedSwitch, GpioCoil, HallSensor, HoldOffPot, PinRig, RgbLed};
use defmt::*;
use embassy_futures::yield_now;
use embassy_time::Delay;

use crate::board::{EmbassyClock, RpAnalog, RpInput, RpOutput};
use crate::serial::DiagnosticSink;

/// The launcher as wired on the board
pub type Rig = PinRig<
    HallSensor<RpInput>,
    DebouncedSwitch<RpInput>,
    HoldOffPot<RpAnalog>,
    GpioCoil<RpOutput>,
    RgbLed<RpOutput, RpOutput, RpOutput>,
    EmbassyClock,
    Delay,
    DiagnosticSink,
>;

/// Launch control task
#[embassy_executor::task]
pub async fn launch_task(mut controller: LaunchController, mut rig: Rig) {
    info!("Launch task started");

    controller.start(&mut rig);
    let mut phase = controller.phase();
    info!("Phase: {}", phase);

    let mut pot_faults = 0;

    loop {
        controller.step(&mut rig);

        let next = controller.phase();
        if next != phase {
            info!("Phase: {} -> {}", phase, next);
            phase = next;
        }

        let faults = rig.holdoff.fault_count();
        if faults != pot_faults {
            pot_faults = faults;
            warn!(
                "Hold-off ADC read failed ({} total): {}",
                faults,
                rig.holdoff.last_error()
            );
        }

        yield_now().await;
    }
}
