//! # Aurum
//!
//! Aurum is the competition program for ARC's gold-cube hunting robot,
//! built on top of [Vexide](https://vexide.dev). The robot plays a simple
//! game: during driver control it collects cubes with a sweeper and lift,
//! and during autonomous it finds the gold cube with the Vision Sensor,
//! drives out to touch it, and returns to its starting spot.
//!
//! The crate provides:
//!
//! - **Drivetrain Control**: A holonomic (mecanum) helper for driver
//!   control and an encoder-based tank helper for autonomous moves.
//! - **Vision**: A gold-cube detector wrapping the V5 Vision Sensor, plus
//!   the pure camera geometry that turns a pixel-space sighting into a
//!   range, bearing, and travel distance.
//! - **Autonomous Routines**: A search-and-touch routine and an
//!   alignment-hold routine.
//! - **Operator Control**: The per-tick mapping from controller input to
//!   actuator powers, with a latched slow mode.
//! - **Telemetry**: Key-value readouts rendered to the Brain display.
//! - **Logging**: A file-based logger for debugging between matches.
//!
//! ## Quick Start
//!
//! ```ignore
//! use aurum::robot::Robot;
//! use vexide::prelude::*;
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     let robot = Robot::default_config(peripherals);
//!     robot.compete().await;
//! }
//! ```
//!
//! ## Modules
//!
//! - [`drivetrain`]: Holonomic and tank drivetrain helpers.
//! - [`vision`]: Cube detection and camera geometry.
//! - [`auton`]: Autonomous gold-cube routines.
//! - [`opcontrol`]: Driver control mapping.
//! - [`display`]: Brain display telemetry.
//! - [`fs`]: Filesystem utilities including logging.
//! - [`config`]: Robot geometry constants and derivations.

use std::{cell::RefCell, rc::Rc};

/// Robot geometry configuration.
///
/// Physical constants for the drivetrain (wheel size, encoder ticks,
/// wheel spans) and the tick conversions derived from them.
pub mod config;

/// Drivetrain helpers.
///
/// Provides [`Holonomic`](drivetrain::holonomic::Holonomic) for
/// stick-driven strafing and rotation during driver control, and
/// [`Tank`](drivetrain::tank::Tank) for blocking encoder-based moves
/// during autonomous.
pub mod drivetrain;

/// Gold-cube vision module.
///
/// Wraps the V5 Vision Sensor in a [`CubeDetector`](vision::detector::CubeDetector)
/// and provides the pure camera geometry used to estimate where a sighted
/// cube actually is on the field.
pub mod vision;

/// Autonomous routines.
///
/// - [`seek`](auton::seek): Sweep-search for the gold cube, drive out to
///   touch it, and return.
/// - [`align`](auton::align): Rotate in place until the cube sits in the
///   alignment window.
pub mod auton;

/// Operator control module.
///
/// The per-tick mapping from controller sticks, triggers, and buttons to
/// drivetrain and actuator powers.
pub mod opcontrol;

/// Brain display telemetry module.
///
/// An [`embedded-graphics`](https://crates.io/crates/embedded-graphics)
/// draw target for the Brain screen and a key-value
/// [`Telemetry`](display::telemetry::Telemetry) readout built on it.
pub mod display;

/// Filesystem utilities module.
///
/// Contains the match logger, which records telemetry and debug output
/// to the SD card.
pub mod fs;

/// Hardware configuration.
///
/// The [`Robot`](robot::Robot) struct owning every device handle, and its
/// competition lifecycle implementation.
pub mod robot;

/// Makes a device shareable between subsystems by wrapping it in `Rc` and
/// `RefCell`. The drive motors use this so the holonomic and tank views
/// can address the same hardware.
pub fn shared<T>(t: T) -> Rc<RefCell<T>> { Rc::new(RefCell::new(t)) }
