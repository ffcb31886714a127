//! Gold-cube vision.
//!
//! Finding the gold cube is a two-step affair:
//!
//! 1. [`detector`] asks the Vision Sensor for the best current sighting
//!    of the cube's color signature, as a bounding box in pixel space.
//! 2. [`geometry`] turns that pixel-space sighting into field-space
//!    numbers: how far away the cube is, how far off-center, what
//!    bearing to turn to, and how far to drive.
//!
//! The geometry half is pure math with no hardware behind it, and is
//! where all the unit tests live.

/// Vision Sensor wrapper reporting the best cube sighting.
pub mod detector;

/// Pin-hole camera geometry: range, offset, bearing, and travel distance.
pub mod geometry;
