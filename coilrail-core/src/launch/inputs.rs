//! Per-iteration input sampling

use crate::traits::{LaunchIo, Sensor, SwitchState};

/// One snapshot of every input, taken at the top of an iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Inputs {
    /// Clock at sampling time (ms)
    pub now_ms: u32,
    /// Sled present at sensor 1
    pub sensor1: bool,
    /// Sled present at sensor 2
    pub sensor2: bool,
    /// Debounced launch switch
    pub switch: Option<SwitchState>,
    /// Raw hold-off control reading
    pub holdoff_raw: u16,
}

impl Inputs {
    /// Read every input once
    pub fn sample<I: LaunchIo>(io: &mut I) -> Self {
        let holdoff_raw = io.holdoff_raw();
        let now_ms = io.now_ms();
        let sensor1 = io.sensor_present(Sensor::One);
        let sensor2 = io.sensor_present(Sensor::Two);
        let switch = io.launch_switch();

        Self {
            now_ms,
            sensor1,
            sensor2,
            switch,
            holdoff_raw,
        }
    }

    /// Check if no sensor sees the sled
    pub fn rail_clear(&self) -> bool {
        !self.sensor1 && !self.sensor2
    }

    /// Check if the switch is stably pressed
    pub fn switch_pressed(&self) -> bool {
        self.switch == Some(SwitchState::Pressed)
    }

    /// Check if the switch is stably released
    pub fn switch_released(&self) -> bool {
        self.switch == Some(SwitchState::Released)
    }
}
