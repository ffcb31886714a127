//! Autonomous gold-cube routines.
//!
//! Two takes on the same job, differing in how much they trust the
//! drivetrain:
//!
//! - [`seek`]: the full routine. Sweep-search until the cube appears,
//!   localize it from one sighting, turn and drive out to touch it,
//!   then retrace back to the start.
//! - [`align`]: the conservative routine. Never leaves the starting
//!   spot; just nudge-rotates until the cube sits centered in the
//!   alignment window, and keeps watching from there.
//!
//! Both run to completion inside the competition system's `autonomous`
//! callback and poll the detector fresh each step; nothing is cached
//! between iterations.

/// Search for the cube, drive out to touch it, and return.
pub mod seek;

/// Rotate in place until the cube is centered.
pub mod align;
