//! Differential (tank) drive with blocking encoder moves.
//!
//! The autonomous script treats the drivetrain as two sides and issues
//! simple blocking moves: drive a distance, rotate by an angle. Each
//! move runs the motors at a fixed power and polls the integrated
//! encoders until the target is reached, a timeout expires, or (for
//! [`Tank::rotate_until`]) a caller-supplied condition fires. That
//! early-exit condition is how the vision search stops a sweep the
//! moment the cube shows up.
//!
//! # Example
//!
//! ```ignore
//! // Sweep 44 degrees counterclockwise, stopping early on a sighting.
//! tank.rotate_until(-44.0, 0.5, 3000, || detector.snapshot().is_some())
//!     .await;
//! tank.drive_distance(24.0, 0.5, 5000).await;
//! ```

use std::{
    cell::RefCell,
    rc::Rc,
    time::{Duration, Instant},
};

use log::warn;
use vexide::{
    math::Angle,
    prelude::{sleep, Motor},
    smart::motor::BrakeMode,
};

use crate::config::DriveGeometry;

/// Maximum motor voltage for the drivetrain.
const MAX_VOLTAGE: f64 = 12.0;

/// Encoder polling interval for blocking moves in milliseconds.
const LOOPRATE: u64 = 5;

/// A differential drivetrain with blocking encoder-based moves.
///
/// Holds the left and right motor groups in reference-counted cells so
/// the same motors can also be driven through the
/// [`Holonomic`](crate::drivetrain::holonomic::Holonomic) view during
/// driver control.
#[derive(Clone)]
pub struct Tank {
    /// Motors on the left side of the drivetrain.
    pub left: Vec<Rc<RefCell<Motor>>>,
    /// Motors on the right side of the drivetrain.
    pub right: Vec<Rc<RefCell<Motor>>>,
    /// Physical geometry used for tick conversions.
    pub geometry: DriveGeometry,
}

impl Tank {
    /// Creates a tank drivetrain from left and right motor groups.
    pub fn from_sides(
        left: Vec<Rc<RefCell<Motor>>>,
        right: Vec<Rc<RefCell<Motor>>>,
        geometry: DriveGeometry,
    ) -> Self {
        Self {
            left,
            right,
            geometry,
        }
    }

    /// Sets the brake mode for all motors in the drivetrain.
    pub fn set_brakemode(&self, brakemode: BrakeMode) {
        for motor in self.left.iter().chain(self.right.iter()) {
            if let Ok(mut motor) = motor.try_borrow_mut() {
                motor.brake(brakemode).unwrap_or_else(|e| {
                    warn!("Motor Brake Error: {}", e);
                });
            }
        }
    }

    /// Drives in a straight line for `inches` at `power`.
    ///
    /// Positive distances drive forward, negative backward. `power` is a
    /// magnitude in `(0.0, 1.0]`. The move ends when both sides have
    /// covered the distance or `timeout` milliseconds have passed.
    pub async fn drive_distance(&self, inches: f64, power: f64, timeout: u64) {
        let target = self.geometry.wheel_angle_for_inches(inches.abs());
        let sign = inches.signum();
        self.run_to_targets(target, sign, sign, power, timeout, || false)
            .await;
    }

    /// Rotates in place by `degrees` at `power`.
    ///
    /// Positive degrees rotate clockwise, negative counterclockwise.
    pub async fn rotate(&self, degrees: f64, power: f64, timeout: u64) {
        self.rotate_until(degrees, power, timeout, || false).await;
    }

    /// Rotates in place by `degrees`, ending the move early as soon as
    /// `found` reports true.
    ///
    /// The condition is re-checked every encoder poll, so a sweep stops
    /// within a few milliseconds of the detector locking on. Returns
    /// whether the condition fired before the rotation completed.
    pub async fn rotate_until(
        &self,
        degrees: f64,
        power: f64,
        timeout: u64,
        found: impl Fn() -> bool,
    ) -> bool {
        let target = self.geometry.wheel_angle_for_turn(degrees.abs());
        // Clockwise: left side forward, right side backward.
        let sign = degrees.signum();
        self.run_to_targets(target, sign, -sign, power, timeout, found)
            .await
    }

    async fn run_to_targets(
        &self,
        target: Angle,
        left_sign: f64,
        right_sign: f64,
        power: f64,
        timeout: u64,
        found: impl Fn() -> bool,
    ) -> bool {
        if target.as_degrees() < f64::EPSILON {
            return false;
        }

        let start = Instant::now();
        let left_start = side_position(&self.left);
        let right_start = side_position(&self.right);

        side_voltage(&self.left, left_sign * power * MAX_VOLTAGE);
        side_voltage(&self.right, right_sign * power * MAX_VOLTAGE);

        let mut interrupted = false;
        loop {
            if found() {
                interrupted = true;
                break;
            }

            let left_travel = (side_position(&self.left) - left_start).as_degrees().abs();
            let right_travel = (side_position(&self.right) - right_start)
                .as_degrees()
                .abs();
            if left_travel >= target.as_degrees() && right_travel >= target.as_degrees() {
                break;
            }

            if start.elapsed() >= Duration::from_millis(timeout) {
                warn!("Tank Move Timed Out After {}ms", timeout);
                break;
            }

            sleep(Duration::from_millis(LOOPRATE)).await;
        }

        side_voltage(&self.left, 0.0);
        side_voltage(&self.right, 0.0);
        interrupted
    }
}

/// Returns the average encoder position of one side of the drivetrain.
///
/// Motors that fail to report are excluded from the average and logged.
fn side_position(motors: &[Rc<RefCell<Motor>>]) -> Angle {
    let mut angle = Angle::from_degrees(0.0);
    let mut denom: f64 = 0.0;
    for motor in motors {
        if let Ok(motor) = motor.try_borrow_mut() {
            angle += motor.position().unwrap_or_else(|e| {
                warn!("Error Getting Motor Encoder Position: {}", e);
                denom -= 1.0;
                Angle::from_radians(0.0)
            });
            denom += 1.0;
        } else {
            warn!("Drive Motor Busy, Skipping Encoder Read");
        }
    }
    if denom > 0.0 { angle / denom } else { angle }
}

fn side_voltage(motors: &[Rc<RefCell<Motor>>], voltage: f64) {
    for motor in motors {
        if let Ok(mut motor) = motor.try_borrow_mut() {
            motor.set_voltage(voltage).unwrap_or_else(|e| {
                warn!("Motor Set Voltage Error: {}", e);
            });
        } else {
            warn!("Drive Motor Busy, Skipping Write");
        }
    }
}
