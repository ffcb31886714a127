//! Drivetrain helpers.
//!
//! The robot runs the same four drive motors under two different views:
//!
//! - [`Holonomic`](holonomic::Holonomic): driver-control strafing and
//!   rotation from stick vectors.
//! - [`Tank`](tank::Tank): blocking encoder-based moves for the
//!   autonomous script, treating the left and right pairs as sides of a
//!   differential drive.
//!
//! Motors are held in reference-counted cells so both views can address
//! the same hardware. Construct both from the same motor handles:
//!
//! ```ignore
//! use aurum::{drivetrain::{holonomic::Holonomic, tank::Tank}, shared};
//! use vexide::prelude::*;
//!
//! let fl = shared(Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward));
//! let fr = shared(Motor::new(peripherals.port_2, Gearset::Green, Direction::Reverse));
//! let bl = shared(Motor::new(peripherals.port_9, Gearset::Green, Direction::Forward));
//! let br = shared(Motor::new(peripherals.port_10, Gearset::Green, Direction::Reverse));
//!
//! let holonomic = Holonomic::new(fl.clone(), fr.clone(), bl.clone(), br.clone());
//! let tank = Tank::from_sides(vec![fl, bl], vec![fr, br], DriveGeometry::default());
//! ```

/// Holonomic (mecanum) drive for driver control.
pub mod holonomic;

/// Differential drive with blocking encoder moves for autonomous.
pub mod tank;
