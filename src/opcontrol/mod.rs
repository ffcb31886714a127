//! Operator control.
//!
//! Driver control is a per-tick mapping with no retained state beyond
//! one latched flag: read the controller, compute actuator powers and a
//! drive command, write them out, sleep until the next motor write
//! window, repeat.
//!
//! # Control Layout
//!
//! | Input            | Action                                  |
//! |------------------|-----------------------------------------|
//! | Left stick       | Strafe (any direction)                  |
//! | Right stick X    | Rotate (overrides strafing past 0.1)    |
//! | R1 / L1          | Sweeper forward / reverse               |
//! | R2 / L2          | Lift up / down                          |
//! | D-pad right/left | Extension out / in                      |
//! | D-pad up/down    | Collection box up / down                |
//! | A (edge)         | Toggle slow mode (everything divided by 5) |

/// The teleop mapping and driver-control loop.
pub mod teleop;
