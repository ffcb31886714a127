//! Brain display output.
//!
//! The Brain screen is the robot's only readout during a match, so the
//! routines publish their derived values there: a key-value
//! [`Telemetry`](telemetry::Telemetry) block redrawn once per tick or
//! autonomous step.
//!
//! Rendering goes through [`DisplayDriver`](graphics::DisplayDriver),
//! an [`embedded-graphics`](https://crates.io/crates/embedded-graphics)
//! draw target backed by a full-screen framebuffer that is flushed to
//! the display in one copy.

/// Embedded-graphics draw target for the Brain screen.
pub mod graphics;

/// Key-value telemetry readout.
pub mod telemetry;
