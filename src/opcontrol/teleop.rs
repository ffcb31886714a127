//! Per-tick teleop mapping from controller state to actuator powers.
//!
//! The mapping itself ([`actuator_powers`]) is a pure function of one
//! controller sample, so the threshold and sign rules can be tested
//! without hardware. The [`drive`] loop wires it to the motors, handles
//! the slow-mode latch, and publishes the slow-mode state to telemetry
//! each tick.

use std::{cell::RefCell, rc::Rc, time::Duration};

use log::warn;
use vexide::{
    controller::ControllerState,
    prelude::{sleep, Motor},
};

use crate::robot::Robot;

/// Maximum motor voltage for the actuators.
const MAX_VOLTAGE: f64 = 12.0;

/// Uniform divisor applied to every power while slow mode is latched.
const SLOW_MODE_DIVISOR: f64 = 5.0;

/// Extension runs below full power; the slide bottoms out hard.
const EXTEND_POWER: f64 = 0.8;

/// Right-stick magnitude below which rotation input is ignored and the
/// left stick drives a strafe instead.
const ROTATION_DEADBAND: f64 = 0.1;

/// One tick's worth of actuator powers, each in `[-1.0, 1.0]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActuatorPowers {
    /// Lift motor power. Positive raises the lift.
    pub lift: f64,
    /// Extension slide power. Positive extends.
    pub extend: f64,
    /// Sweeper power. Positive sweeps inward.
    pub sweep: f64,
    /// Collection box power. Positive tilts up.
    pub basket: f64,
}

/// Computes the actuator powers for one controller sample.
///
/// Opposing inputs are resolved in favor of the first listed (reverse
/// sweep over forward, lift down over up), matching the if/else-if
/// order the drivers are used to.
pub fn actuator_powers(state: &ControllerState) -> ActuatorPowers {
    let mut powers = ActuatorPowers::default();

    if state.button_l1.is_pressed() {
        powers.sweep = -1.0;
    } else if state.button_r1.is_pressed() {
        powers.sweep = 1.0;
    }

    if state.button_l2.is_pressed() {
        powers.lift = -1.0;
    } else if state.button_r2.is_pressed() {
        powers.lift = 1.0;
    }

    if state.button_right.is_pressed() {
        powers.extend = EXTEND_POWER;
    } else if state.button_left.is_pressed() {
        powers.extend = -EXTEND_POWER;
    }

    if state.button_up.is_pressed() {
        powers.basket = 1.0;
    } else if state.button_down.is_pressed() {
        powers.basket = -1.0;
    }

    powers
}

/// Scales a power for the current slow-mode state.
pub fn scaled(power: f64, slow_mode: bool) -> f64 {
    power / if slow_mode { SLOW_MODE_DIVISOR } else { 1.0 }
}

/// The driver-control loop.
///
/// Runs until the competition system cancels it at the end of the
/// driver period. Each tick reads the controller (degrading to neutral
/// input on a read error), updates the slow-mode latch on an A-button
/// edge, writes the four actuator powers, and forwards the stick
/// vectors to the holonomic drivetrain.
pub async fn drive(robot: &mut Robot) {
    let mut slow_mode = false;

    loop {
        let state = robot.controller.state().unwrap_or_else(|e| {
            warn!("Controller State Error: {}", e);
            ControllerState::default()
        });

        if state.button_a.is_now_pressed() {
            slow_mode = !slow_mode;
        }

        let powers = actuator_powers(&state);
        set_power(&robot.lift, scaled(powers.lift, slow_mode));
        set_power(&robot.extend, scaled(powers.extend, slow_mode));
        set_power(&robot.sweep, scaled(powers.sweep, slow_mode));
        set_power(&robot.basket, scaled(powers.basket, slow_mode));

        if state.right_stick.x().abs() > ROTATION_DEADBAND {
            robot
                .holonomic
                .set_rotation_power(scaled(state.right_stick.x(), slow_mode));
        } else {
            robot.holonomic.strafe(
                state.left_stick.x(),
                state.left_stick.y(),
                scaled(1.0, slow_mode),
            );
        }

        robot
            .telemetry
            .add("Slow Mode", if slow_mode { "ACTIVE" } else { "INACTIVE" });
        robot.telemetry.update();

        sleep(Duration::from_millis(10)).await;
    }
}

fn set_power(motor: &Rc<RefCell<Motor>>, power: f64) {
    if let Ok(mut motor) = motor.try_borrow_mut() {
        motor.set_voltage(power * MAX_VOLTAGE).unwrap_or_else(|e| {
            warn!("Motor Set Voltage Error: {}", e);
        });
    } else {
        warn!("Actuator Motor Busy, Skipping Write");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_controller_is_all_zero() {
        let powers = actuator_powers(&ControllerState::default());
        assert_eq!(powers, ActuatorPowers::default());
    }

    #[test]
    fn slow_mode_divides_by_five() {
        assert_eq!(scaled(1.0, true), 0.2);
        assert_eq!(scaled(-0.8, true), -0.16);
    }

    #[test]
    fn full_power_passes_through_without_slow_mode() {
        assert_eq!(scaled(1.0, false), 1.0);
        assert_eq!(scaled(-0.8, false), -0.8);
    }
}
