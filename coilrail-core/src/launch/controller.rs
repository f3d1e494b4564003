//! Launch controller
//!
//! A single-owner state machine stepped once per polling iteration. Every
//! iteration runs, in this order:
//!
//! 1. sample inputs (and rescale the hold-off)
//! 2. fail-safe watchdog
//! 3. status indicator
//! 4. sensor edge latching
//! 5. velocity measurement
//! 6. rearm gate
//! 7. coil A trigger
//! 8. coil B trigger (may block for the hold-off)
//! 9. pulse expiry for both coils
//!
//! The watchdog check precedes both triggers; the energized-time bound
//! depends on that order.

use crate::config::{ConfigError, LaunchConfig};
use crate::safety::{FailSafe, SafetyStatus};
use crate::state::{Color, LaunchPhase, Report};
use crate::traits::{Coil, LaunchIo, Sensor};

use super::inputs::Inputs;
use super::velocity::LaunchTimes;

/// One coil bank's output state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CoilChannel {
    active: bool,
    triggered_at_ms: u32,
}

impl CoilChannel {
    fn fire(&mut self, now_ms: u32) {
        self.active = true;
        self.triggered_at_ms = now_ms;
    }

    fn pulse_expired(&self, now_ms: u32, pulse_width_ms: u32) -> bool {
        self.active && now_ms.wrapping_sub(self.triggered_at_ms) > pulse_width_ms
    }
}

/// Snapshot of the controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LaunchStatus {
    /// Armed, awaiting the launch switch
    pub ready_to_launch: bool,
    /// Launch sequence in progress
    pub launched: bool,
    /// Coil A energized
    pub coil_a_active: bool,
    /// Coil B energized
    pub coil_b_active: bool,
    /// Last coil A trigger, the launch epoch (ms)
    pub coil_a_triggered_ms: u32,
    /// Last coil B trigger (ms)
    pub coil_b_triggered_ms: u32,
    /// Sensor 1 latch time, if latched this launch (ms)
    pub sensor1_trip_ms: Option<u32>,
    /// Sensor 2 latch time, if latched this launch (ms)
    pub sensor2_trip_ms: Option<u32>,
    /// Hold-off computed on the latest iteration (ms)
    pub hold_off_ms: u32,
}

/// Two-stage coil launch controller
#[derive(Debug, Clone)]
pub struct LaunchController {
    config: LaunchConfig,
    watchdog: FailSafe,
    ready_to_launch: bool,
    launched: bool,
    coil_a: CoilChannel,
    coil_b: CoilChannel,
    sensor1_trip_ms: Option<u32>,
    sensor2_trip_ms: Option<u32>,
    hold_off_ms: u32,
}

impl LaunchController {
    /// Create a controller, armed, with the launch epoch at 0
    pub fn new(config: LaunchConfig) -> Self {
        Self {
            config,
            watchdog: FailSafe::new(config.fail_safe_ms),
            ready_to_launch: true,
            launched: false,
            coil_a: CoilChannel::default(),
            coil_b: CoilChannel::default(),
            sensor1_trip_ms: None,
            sensor2_trip_ms: None,
            hold_off_ms: config.holdoff.out_min_ms,
        }
    }

    /// Create a controller after validating the configuration
    pub fn try_new(config: LaunchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Put the outputs into their power-on state
    pub fn start<I: LaunchIo>(&self, io: &mut I) {
        io.set_coil(Coil::A, false);
        io.set_coil(Coil::B, false);
        io.set_indicator(self.indicator_color());
    }

    /// Run one control iteration
    pub fn step<I: LaunchIo>(&mut self, io: &mut I) {
        let inputs = Inputs::sample(io);
        self.hold_off_ms = self.config.holdoff.map(inputs.holdoff_raw);

        self.check_watchdog(io, inputs.now_ms);
        io.set_indicator(self.indicator_color());
        self.latch_sensors(io, &inputs);
        self.measure(io);
        self.rearm(&inputs);
        self.fire_coil_a(io, &inputs);
        self.fire_coil_b(io, &inputs);

        // Re-read: a coil B trigger above may have blocked for the hold-off
        let now_ms = io.now_ms();
        self.expire_pulses(io, now_ms);
    }

    fn check_watchdog<I: LaunchIo>(&mut self, io: &mut I, now_ms: u32) {
        let status = self
            .watchdog
            .check(self.launched, self.coil_a.triggered_at_ms, now_ms);
        if let SafetyStatus::Overrun { .. } = status {
            io.set_coil(Coil::A, false);
            io.set_coil(Coil::B, false);
            self.launched = false;
            self.coil_a.active = false;
            self.coil_b.active = false;
            io.report(Report::FailSafeTripped);
        }
    }

    fn latch_sensors<I: LaunchIo>(&mut self, io: &mut I, inputs: &Inputs) {
        if !self.launched {
            return;
        }

        let epoch = self.coil_a.triggered_at_ms;
        for (sensor, present, latch) in [
            (Sensor::One, inputs.sensor1, &mut self.sensor1_trip_ms),
            (Sensor::Two, inputs.sensor2, &mut self.sensor2_trip_ms),
        ] {
            if present && latch.is_none() {
                *latch = Some(inputs.now_ms);
                io.report(Report::SensorTripped {
                    sensor,
                    after_ms: inputs.now_ms.wrapping_sub(epoch),
                });
            }
        }
    }

    fn measure<I: LaunchIo>(&mut self, io: &mut I) {
        let (Some(sensor1_ms), Some(sensor2_ms)) = (self.sensor1_trip_ms, self.sensor2_trip_ms)
        else {
            return;
        };

        let times = LaunchTimes {
            epoch_ms: self.coil_a.triggered_at_ms,
            sensor1_ms,
            sensor2_ms,
        };
        let velocities = times.velocities(&self.config);
        io.report(Report::Speed {
            sensor: Sensor::One,
            mm_per_s: velocities.sensor1,
        });
        io.report(Report::Speed {
            sensor: Sensor::Two,
            mm_per_s: velocities.sensor2,
        });

        self.sensor1_trip_ms = None;
        self.sensor2_trip_ms = None;
        self.launched = false;
    }

    fn rearm(&mut self, inputs: &Inputs) {
        let cooled =
            inputs.now_ms.wrapping_sub(self.coil_a.triggered_at_ms) > self.config.cooldown_ms;
        if cooled && inputs.switch_released() && !self.any_coil_active() {
            self.ready_to_launch = true;
        }
    }

    fn fire_coil_a<I: LaunchIo>(&mut self, io: &mut I, inputs: &Inputs) {
        if !self.ready_to_launch
            || self.any_coil_active()
            || !inputs.rail_clear()
            || !inputs.switch_pressed()
        {
            return;
        }

        self.ready_to_launch = false;
        self.launched = true;
        io.set_coil(Coil::A, true);
        self.coil_a.fire(inputs.now_ms);
        io.report(Report::CoilFired {
            coil: Coil::A,
            after_ms: 0,
        });
    }

    fn fire_coil_b<I: LaunchIo>(&mut self, io: &mut I, inputs: &Inputs) {
        if !self.launched || self.coil_b.active || !inputs.sensor1 {
            return;
        }

        // Coil A goes off before the wait, never after
        io.set_coil(Coil::A, false);
        self.coil_a.active = false;

        io.report(Report::HoldOff {
            ms: self.hold_off_ms,
        });
        io.hold_off(self.hold_off_ms);

        let now_ms = io.now_ms();
        io.set_coil(Coil::B, true);
        self.coil_b.fire(now_ms);
        io.report(Report::CoilFired {
            coil: Coil::B,
            after_ms: now_ms.wrapping_sub(self.coil_a.triggered_at_ms),
        });
    }

    fn expire_pulses<I: LaunchIo>(&mut self, io: &mut I, now_ms: u32) {
        let pulse_width_ms = self.config.pulse_width_ms;
        for (coil, channel) in [(Coil::A, &mut self.coil_a), (Coil::B, &mut self.coil_b)] {
            if channel.pulse_expired(now_ms, pulse_width_ms) {
                channel.active = false;
                io.set_coil(coil, false);
                io.report(Report::CoilOff { coil });
            }
        }
    }

    fn any_coil_active(&self) -> bool {
        self.coil_a.active || self.coil_b.active
    }

    fn indicator_color(&self) -> Color {
        Color::for_status(self.any_coil_active(), self.ready_to_launch)
    }

    /// Current launch phase
    pub fn phase(&self) -> LaunchPhase {
        LaunchPhase::from_flags(
            self.ready_to_launch,
            self.launched,
            self.coil_a.active,
            self.coil_b.active,
        )
    }

    /// Snapshot of all controller state
    pub fn status(&self) -> LaunchStatus {
        LaunchStatus {
            ready_to_launch: self.ready_to_launch,
            launched: self.launched,
            coil_a_active: self.coil_a.active,
            coil_b_active: self.coil_b.active,
            coil_a_triggered_ms: self.coil_a.triggered_at_ms,
            coil_b_triggered_ms: self.coil_b.triggered_at_ms,
            sensor1_trip_ms: self.sensor1_trip_ms,
            sensor2_trip_ms: self.sensor2_trip_ms,
            hold_off_ms: self.hold_off_ms,
        }
    }

    /// Check if a coil is energized
    pub fn coil_active(&self, coil: Coil) -> bool {
        match coil {
            Coil::A => self.coil_a.active,
            Coil::B => self.coil_b.active,
        }
    }

    /// Check if the controller is armed
    pub fn is_ready(&self) -> bool {
        self.ready_to_launch
    }

    /// Check if a launch is in progress
    pub fn is_launched(&self) -> bool {
        self.launched
    }

    /// Active configuration
    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }
}
