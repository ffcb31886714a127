//! Filesystem utilities for the V5 Brain.
//!
//! The only filesystem consumer here is the match logger: a [`log`]
//! facade implementation that mirrors everything to the terminal and to
//! a file on the SD card, so a misbehaving autonomous run can be
//! diagnosed after the match.
//!
//! # Example
//!
//! ```ignore
//! use aurum::fs::logger;
//! use log::{info, LevelFilter};
//!
//! logger::init(LevelFilter::Debug).expect("Failed to initialize logger");
//! info!("Robot initialized");
//! ```

/// File-based logging for the V5 Brain.
pub mod logger;
