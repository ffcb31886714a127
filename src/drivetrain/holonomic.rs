//! Holonomic (mecanum) drive control.
//!
//! The mecanum wheels let the robot translate in any direction while
//! rotating independently. Wheel mixing follows the usual convention for
//! crossed rollers:
//!
//! - front-left  = y + x + turn
//! - front-right = y - x - turn
//! - back-left   = y - x + turn
//! - back-right  = y + x - turn
//!
//! The mixed values are normalized so the largest magnitude never
//! exceeds 1, then scaled to volts.

use std::{cell::RefCell, rc::Rc};

use log::warn;
use vexide::prelude::Motor;

/// Maximum motor voltage for the drivetrain.
const MAX_VOLTAGE: f64 = 12.0;

/// A four-wheel holonomic drivetrain controller.
///
/// Holds one handle per wheel. The handles are reference-counted cells
/// so the same motors can also be driven through the [`Tank`] view
/// during autonomous.
///
/// [`Tank`]: crate::drivetrain::tank::Tank
#[derive(Clone)]
pub struct Holonomic {
    /// Front-left wheel motor.
    pub front_left:  Rc<RefCell<Motor>>,
    /// Front-right wheel motor.
    pub front_right: Rc<RefCell<Motor>>,
    /// Back-left wheel motor.
    pub back_left:   Rc<RefCell<Motor>>,
    /// Back-right wheel motor.
    pub back_right:  Rc<RefCell<Motor>>,
}

impl Holonomic {
    /// Creates a holonomic drivetrain from the four wheel motors.
    ///
    /// Motors on the right side should be configured with
    /// `Direction::Reverse` so positive voltage moves the robot forward.
    pub fn new(
        front_left: Rc<RefCell<Motor>>,
        front_right: Rc<RefCell<Motor>>,
        back_left: Rc<RefCell<Motor>>,
        back_right: Rc<RefCell<Motor>>,
    ) -> Self {
        Self {
            front_left,
            front_right,
            back_left,
            back_right,
        }
    }

    /// Translates the robot along the stick vector `(x, y)` without
    /// rotating, with powers scaled by `scale`.
    ///
    /// `x` is rightward, `y` is forward, both in `[-1.0, 1.0]`. A
    /// `scale` below 1.0 slows the whole maneuver uniformly (used by
    /// slow mode).
    pub fn strafe(&self, x: f64, y: f64, scale: f64) {
        self.apply(mix(x, y, 0.0), scale);
    }

    /// Spins the robot in place. Positive `turn` rotates clockwise.
    pub fn set_rotation_power(&self, turn: f64) {
        self.apply(mix(0.0, 0.0, turn), 1.0);
    }

    /// Stops all four wheels.
    pub fn stop(&self) { self.apply([0.0; 4], 0.0); }

    fn apply(&self, powers: [f64; 4], scale: f64) {
        let wheels = [
            (&self.front_left, powers[0]),
            (&self.front_right, powers[1]),
            (&self.back_left, powers[2]),
            (&self.back_right, powers[3]),
        ];
        for (wheel, power) in wheels {
            if let Ok(mut motor) = wheel.try_borrow_mut() {
                motor
                    .set_voltage(power * scale * MAX_VOLTAGE)
                    .unwrap_or_else(|e| {
                        warn!("Drive Motor Set Voltage Error: {}", e);
                    });
            } else {
                warn!("Drive Motor Busy, Skipping Write");
            }
        }
    }
}

/// Mixes a strafe vector and a rotation command into per-wheel powers
/// `[front_left, front_right, back_left, back_right]`, normalized so no
/// magnitude exceeds 1.
pub fn mix(x: f64, y: f64, turn: f64) -> [f64; 4] {
    let raw = [y + x + turn, y - x - turn, y - x + turn, y + x - turn];
    let max = raw
        .iter()
        .fold(1.0_f64, |acc, power| acc.max(power.abs()));
    raw.map(|power| power / max)
}

#[cfg(test)]
mod tests {
    use super::mix;

    #[test]
    fn forward_drives_all_wheels_equally() {
        assert_eq!(mix(0.0, 1.0, 0.0), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn pure_strafe_crosses_wheel_pairs() {
        let powers = mix(1.0, 0.0, 0.0);
        assert_eq!(powers, [1.0, -1.0, -1.0, 1.0]);
    }

    #[test]
    fn clockwise_turn_mirrors_sides() {
        let powers = mix(0.0, 0.0, 0.5);
        assert_eq!(powers, [0.5, -0.5, 0.5, -0.5]);
    }

    #[test]
    fn mixing_never_exceeds_unit_power() {
        let powers = mix(1.0, 1.0, 1.0);
        for power in powers {
            assert!(power.abs() <= 1.0 + 1e-12);
        }
        // The dominant wheel saturates at exactly 1.
        assert!((powers[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn diagonal_strafe_keeps_direction() {
        let powers = mix(0.5, 0.5, 0.0);
        // front-left and back-right carry the diagonal, the other pair idles
        assert!((powers[0] - powers[3]).abs() < 1e-12);
        assert!(powers[1].abs() < 1e-12);
        assert!(powers[2].abs() < 1e-12);
    }
}
