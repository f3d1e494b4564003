//! Simulated launcher hardware for controller tests

use std::string::{String, ToString};
use std::vec::Vec;

use crate::state::{Color, Report};
use crate::traits::{Coil, LaunchIo, Sensor, SwitchState};

use super::LaunchController;

/// Launcher rig with a hand-driven clock
///
/// Inputs are plain fields the test sets between steps. `hold_off`
/// advances the clock instead of sleeping.
pub struct SimRig {
    pub now: u32,
    pub sensor1: bool,
    pub sensor2: bool,
    pub switch: Option<SwitchState>,
    pub holdoff_raw: u16,
    pub coils: [bool; 2],
    pub indicator: Color,
    pub reports: Vec<Report>,
    /// (started at, duration, coil outputs during the wait)
    pub hold_offs: Vec<(u32, u32, [bool; 2])>,
    /// Set if both coil outputs were ever on together
    pub overlap_seen: bool,
    /// Last time `run` saw the controller become ready
    pub ready_since: Option<u32>,
}

impl SimRig {
    pub fn new(now: u32) -> Self {
        Self {
            now,
            sensor1: false,
            sensor2: false,
            switch: None,
            holdoff_raw: 0,
            coils: [false; 2],
            indicator: Color::Off,
            reports: Vec::new(),
            hold_offs: Vec::new(),
            overlap_seen: false,
            ready_since: None,
        }
    }

    /// Report lines as they would appear on the serial stream
    pub fn lines(&self) -> Vec<String> {
        self.reports.iter().map(ToString::to_string).collect()
    }

    /// Step the controller every millisecond until `until`
    ///
    /// `script` sets the inputs before each step.
    pub fn run(
        &mut self,
        ctrl: &mut LaunchController,
        until: u32,
        mut script: impl FnMut(&mut SimRig),
    ) {
        let mut was_ready = ctrl.is_ready();
        while self.now < until {
            script(self);
            ctrl.step(self);
            if ctrl.is_ready() && !was_ready {
                self.ready_since = Some(self.now);
            }
            was_ready = ctrl.is_ready();
            self.now += 1;
        }
    }
}

impl LaunchIo for SimRig {
    fn now_ms(&mut self) -> u32 {
        self.now
    }

    fn sensor_present(&mut self, sensor: Sensor) -> bool {
        match sensor {
            Sensor::One => self.sensor1,
            Sensor::Two => self.sensor2,
        }
    }

    fn launch_switch(&mut self) -> Option<SwitchState> {
        self.switch
    }

    fn holdoff_raw(&mut self) -> u16 {
        self.holdoff_raw
    }

    fn set_coil(&mut self, coil: Coil, energized: bool) {
        self.coils[coil.index() as usize] = energized;
        if self.coils[0] && self.coils[1] {
            self.overlap_seen = true;
        }
    }

    fn set_indicator(&mut self, color: Color) {
        self.indicator = color;
    }

    fn hold_off(&mut self, ms: u32) {
        self.hold_offs.push((self.now, ms, self.coils));
        self.now += ms;
    }

    fn report(&mut self, report: Report) {
        self.reports.push(report);
    }
}
