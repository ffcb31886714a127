//! Search for the gold cube, drive out to touch it, and return.
//!
//! The script:
//!
//! 1. Sweep-search: rotate 22 degrees clockwise, then alternate 44
//!    degree counterclockwise/clockwise sweeps, until the detector
//!    reports a usable sighting. Sweeps end early the instant the cube
//!    shows up. With no cube on the field this searches forever; the
//!    competition system cuts it off when the period ends.
//! 2. Localize from the latest sighting: perpendicular range from the
//!    apparent pixel width, lateral offset from the pixel distance to
//!    frame center, bearing via arctangent (snapped to zero when
//!    practically head-on), travel distance as the clamped hypotenuse.
//! 3. Correct the bearing sign for the camera mount orientation, turn,
//!    drive out, drive back, and turn back.
//!
//! Every derived value is published to telemetry before the robot
//! moves, so a bad run can be read off the screen.

use log::{info, warn};
use vexide::smart::{imu::InertialSensor, motor::BrakeMode};

use crate::robot::Robot;

/// Rotation power for search sweeps and the bearing turn.
const TURN_POWER: f64 = 0.5;

/// Drive power for the out-and-back legs.
const DRIVE_POWER: f64 = 0.5;

/// First sweep angle in degrees. Half a full sweep, since the cube is
/// as likely to be left of the start heading as right.
const FIRST_SWEEP_DEG: f64 = 22.0;

/// Alternating sweep angle in degrees.
const SWEEP_DEG: f64 = 44.0;

/// Timeout for one search sweep in milliseconds.
const SWEEP_TIMEOUT_MS: u64 = 3000;

/// Timeout for the bearing turns in milliseconds.
const TURN_TIMEOUT_MS: u64 = 3000;

/// Timeout for each drive leg in milliseconds.
const DRIVE_TIMEOUT_MS: u64 = 6000;

/// Runs the search-and-touch routine to completion.
pub async fn run(robot: &mut Robot) {
    let Robot {
        tank,
        detector,
        telemetry,
        imu,
        camera,
        ..
    } = robot;

    tank.set_brakemode(BrakeMode::Brake);

    // Sweep until the detector reports a sighting the geometry can use.
    let mut first_rotation = true;
    let sighting = loop {
        if let Some(sighting) = detector.snapshot() {
            if camera.range(sighting.width_px).is_some() {
                break sighting;
            }
        }

        let sighted = || detector.is_found();
        tank.rotate_until(
            if first_rotation {
                FIRST_SWEEP_DEG
            } else {
                SWEEP_DEG
            },
            TURN_POWER,
            SWEEP_TIMEOUT_MS,
            &sighted,
        )
        .await;
        tank.rotate_until(-SWEEP_DEG, TURN_POWER, SWEEP_TIMEOUT_MS, &sighted)
            .await;

        first_rotation = false;
    };

    let (Some(range), Some(offset)) = (
        camera.range(sighting.width_px),
        camera.lateral_offset(sighting.width_px, sighting.center_offset_px()),
    ) else {
        // Unreachable given the search guard, but a degenerate sighting
        // must never turn into an infinite drive target.
        warn!("Degenerate Sighting After Search, Aborting");
        return;
    };

    let bearing = camera.bearing(offset, range);
    let travel = camera.travel_distance(range, offset);

    let inverted = camera_mount_inverted(imu);
    let mut turn = round_to_nearest(bearing);
    if inverted {
        turn = -turn;
    }

    telemetry.add("Distance", range);
    telemetry.add("Cube Dist", offset);
    telemetry.add("Angle", bearing);
    telemetry.add("Rounded Angle", turn);
    telemetry.add("Travel", travel);
    telemetry.add("Mount", if inverted { "INVERTED" } else { "UPRIGHT" });
    telemetry.update();

    info!(
        "Cube sighted at {}px: range {:.1}in, offset {:.1}in, turn {} deg, travel {:.0}in",
        sighting.width_px, range, offset, turn, travel
    );

    tank.rotate(turn as f64, TURN_POWER, TURN_TIMEOUT_MS).await;
    tank.drive_distance(travel, DRIVE_POWER, DRIVE_TIMEOUT_MS)
        .await;

    // Retrace to the starting spot.
    tank.drive_distance(-travel, DRIVE_POWER, DRIVE_TIMEOUT_MS)
        .await;
    tank.rotate(-(turn as f64), TURN_POWER, TURN_TIMEOUT_MS)
        .await;

    detector.disable();
    info!("Seek routine complete");
}

/// Whether the camera is mounted upside-down, from the IMU roll.
///
/// The bearing's sign flips with the camera mount: an inverted camera
/// mirrors the frame horizontally. Reads as upright on an IMU error or
/// while calibration is still running.
fn camera_mount_inverted(imu: &InertialSensor) -> bool {
    let calibrating = imu.is_calibrating().unwrap_or_else(|e| {
        warn!("IMU Calibration State Error: {}", e);
        true
    });
    if calibrating {
        return false;
    }

    match imu.euler() {
        Ok(angles) => angles.a.as_degrees().abs() > 90.0,
        Err(e) => {
            warn!("IMU Euler Error: {}", e);
            false
        }
    }
}

/// Rounds to the nearest whole degree, away from zero at the midpoint.
fn round_to_nearest(degrees: f64) -> i32 {
    if degrees >= 0.0 {
        (degrees + 0.5) as i32
    } else {
        (degrees - 0.5) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::round_to_nearest;

    #[test]
    fn rounds_to_nearest_degree() {
        assert_eq!(round_to_nearest(12.4), 12);
        assert_eq!(round_to_nearest(12.5), 13);
        assert_eq!(round_to_nearest(-12.4), -12);
        assert_eq!(round_to_nearest(-12.5), -13);
        assert_eq!(round_to_nearest(0.0), 0);
    }
}
