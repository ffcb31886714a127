//! Rotate in place until the gold cube is centered.
//!
//! The stay-at-home alternative to [`seek`](crate::auton::seek): the
//! robot never leaves its starting spot, it only turns until the cube
//! sits inside the detector's alignment window, then holds and keeps
//! watching. If the cube leaves the window (or view), the nudging
//! resumes. Runs until the competition system cancels it.

use std::time::Duration;

use log::info;
use vexide::{prelude::sleep, smart::motor::BrakeMode};

use crate::robot::Robot;

/// Size of one corrective rotation in degrees.
const NUDGE_DEG: f64 = 3.0;

/// Rotation power for corrective nudges. Low, so a nudge cannot
/// overshoot the alignment window.
const NUDGE_POWER: f64 = 0.3;

/// Timeout for one nudge in milliseconds.
const NUDGE_TIMEOUT_MS: u64 = 1000;

/// Sensor update interval; there is no point polling faster.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the alignment-hold routine. Loops until cancelled.
pub async fn run(robot: &mut Robot) {
    let Robot {
        tank,
        detector,
        telemetry,
        ..
    } = robot;

    tank.set_brakemode(BrakeMode::Hold);
    let mut was_aligned = false;

    loop {
        match detector.snapshot() {
            Some(sighting) if detector.is_aligned(&sighting) => {
                if !was_aligned {
                    info!("Aligned on cube at x = {}px", sighting.center_x_px);
                    was_aligned = true;
                }
                telemetry.add("Cube X", sighting.center_x_px);
                telemetry.add("Aligned", "YES");
            }
            Some(sighting) => {
                was_aligned = false;
                telemetry.add("Cube X", sighting.center_x_px);
                telemetry.add("Aligned", "NO");

                // Turn toward the cube: positive offset means it sits to
                // the right, which takes a clockwise nudge.
                let direction = if sighting.center_offset_px() > 0 {
                    1.0
                } else {
                    -1.0
                };
                tank.rotate(direction * NUDGE_DEG, NUDGE_POWER, NUDGE_TIMEOUT_MS)
                    .await;
            }
            None => {
                was_aligned = false;
                telemetry.add("Cube X", "LOST");
                telemetry.add("Aligned", "NO");
            }
        }
        telemetry.update();

        sleep(POLL_INTERVAL).await;
    }
}
