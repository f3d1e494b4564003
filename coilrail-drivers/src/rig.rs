//! Launcher rig: individual drivers bound into the controller's I/O
//!
//! `PinRig` owns one driver per device and implements [`LaunchIo`] by
//! delegating. The hold-off uses a blocking `DelayNs`, so the whole
//! control loop stops for its duration.

use coilrail_core::state::{Color, Report};
use coilrail_core::traits::{
    Coil, CoilOutput, HoldOffInput, LaunchIo, LaunchSwitch, PositionSensor, ReportSink, Sensor,
    StatusIndicator, SwitchState,
};
use coilrail_hal::Monotonic;
use embedded_hal::delay::DelayNs;

/// Complete launcher hardware
///
/// Both position sensors share a driver type, as do both coils.
pub struct PinRig<S, W, A, C, L, T, D, R> {
    /// Sensor before coil B
    pub sensor1: S,
    /// Exit sensor
    pub sensor2: S,
    /// Launch control
    pub switch: W,
    /// Hold-off control
    pub holdoff: A,
    /// First coil bank
    pub coil_a: C,
    /// Second coil bank
    pub coil_b: C,
    /// Status light
    pub indicator: L,
    /// Millisecond clock
    pub clock: T,
    /// Blocking delay for the hold-off
    pub delay: D,
    /// Report destination
    pub sink: R,
}

impl<S, W, A, C, L, T, D, R> LaunchIo for PinRig<S, W, A, C, L, T, D, R>
where
    S: PositionSensor,
    W: LaunchSwitch,
    A: HoldOffInput,
    C: CoilOutput,
    L: StatusIndicator,
    T: Monotonic,
    D: DelayNs,
    R: ReportSink,
{
    fn now_ms(&mut self) -> u32 {
        self.clock.now_ms()
    }

    fn sensor_present(&mut self, sensor: Sensor) -> bool {
        match sensor {
            Sensor::One => self.sensor1.is_present(),
            Sensor::Two => self.sensor2.is_present(),
        }
    }

    fn launch_switch(&mut self) -> Option<SwitchState> {
        let now_ms = self.clock.now_ms();
        self.switch.read(now_ms)
    }

    fn holdoff_raw(&mut self) -> u16 {
        self.holdoff.read_raw()
    }

    fn set_coil(&mut self, coil: Coil, energized: bool) {
        match coil {
            Coil::A => self.coil_a.set_energized(energized),
            Coil::B => self.coil_b.set_energized(energized),
        }
    }

    fn set_indicator(&mut self, color: Color) {
        self.indicator.set_color(color);
    }

    fn hold_off(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn report(&mut self, report: Report) {
        self.sink.report(report);
    }
}
