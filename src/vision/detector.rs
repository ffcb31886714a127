//! Vision Sensor wrapper for gold-cube detection.
//!
//! The Vision Sensor does its own onboard blob detection against color
//! signatures; this wrapper only configures it for the gold cube's
//! color, filters the reported objects down to the best candidate, and
//! answers the two questions the routines ask: *is the cube in view*
//! and *where in the frame is it*.
//!
//! Degenerate readings are filtered here so the geometry never sees
//! them: a zero-width bounding box (which would read as infinitely far
//! away) or a sensor error both report as "nothing sighted".

use log::warn;
use vexide::smart::{
    vision::{DetectionSource, VisionMode, VisionSensor, VisionSignature},
    SmartPort,
};

/// Signature slot used for the gold cube color.
const CUBE_SIGNATURE_ID: u8 = 1;

/// Gold-cube color signature, generated with VEX's Vision Utility
/// against the yellow cube under field lighting.
const CUBE_SIGNATURE: VisionSignature =
    VisionSignature::new((1897, 5265, 3581), (-4041, -3345, -3693), 5.5);

/// A single sighting of the cube, in pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeSighting {
    /// Width of the cube's bounding box in pixels.
    pub width_px: u16,
    /// Height of the cube's bounding box in pixels.
    pub height_px: u16,
    /// Horizontal center of the bounding box, in pixels from the left
    /// edge of the frame.
    pub center_x_px: u16,
}

impl CubeSighting {
    /// Signed pixel distance from the frame's vertical centerline to the
    /// cube's center, positive when the cube is to the right.
    pub fn center_offset_px(&self) -> i32 {
        self.center_x_px as i32 - (VisionSensor::HORIZONTAL_RESOLUTION / 2) as i32
    }

    /// Bounding box area in pixels, used to rank candidate sightings.
    pub fn area_px(&self) -> u32 { self.width_px as u32 * self.height_px as u32 }
}

/// Gold-cube detector wrapping the V5 Vision Sensor.
pub struct CubeDetector {
    sensor: VisionSensor,
    /// Width in pixels of the window around frame center in which the
    /// cube counts as aligned.
    pub align_window_px: u16,
    /// Offset of the alignment window from frame center in pixels.
    pub align_offset_px: i32,
    enabled: bool,
}

impl CubeDetector {
    /// Creates a detector on the given smart port and loads the gold
    /// cube signature into the sensor.
    ///
    /// The sensor's signature memory is volatile, so this runs on every
    /// program start. A sensor that fails to configure still constructs
    /// (it may be booting); the failure is logged and later snapshots
    /// simply report nothing until it comes up.
    pub fn new(port: SmartPort) -> Self {
        let mut sensor = VisionSensor::new(port);
        sensor
            .set_signature(CUBE_SIGNATURE_ID, CUBE_SIGNATURE)
            .unwrap_or_else(|e| {
                warn!("Vision Signature Error: {}", e);
            });
        sensor
            .set_mode(VisionMode::ColorDetection)
            .unwrap_or_else(|e| {
                warn!("Vision Mode Error: {}", e);
            });

        Self {
            sensor,
            align_window_px: 100,
            align_offset_px: 0,
            enabled: true,
        }
    }

    /// Returns the best current sighting of the cube, or `None` when the
    /// cube is not in view.
    ///
    /// "Best" is the largest bounding box by area, matching how the
    /// sensor's own object ranking behaves with a single signature.
    /// Zero-width boxes and sensor errors are filtered out.
    pub fn snapshot(&self) -> Option<CubeSighting> {
        if !self.enabled {
            return None;
        }

        let objects = match self.sensor.objects() {
            Ok(objects) => objects,
            Err(e) => {
                warn!("Vision Read Error: {}", e);
                return None;
            }
        };

        objects
            .iter()
            .filter(|object| {
                matches!(object.source, DetectionSource::Signature(CUBE_SIGNATURE_ID))
            })
            .map(|object| CubeSighting {
                width_px:    object.width,
                height_px:   object.height,
                center_x_px: object.center.x,
            })
            .filter(|sighting| sighting.width_px > 0)
            .max_by_key(CubeSighting::area_px)
    }

    /// Whether the cube is currently in view.
    pub fn is_found(&self) -> bool { self.snapshot().is_some() }

    /// Whether a sighting sits inside the alignment window.
    pub fn is_aligned(&self, sighting: &CubeSighting) -> bool {
        let offset = sighting.center_offset_px() - self.align_offset_px;
        offset.unsigned_abs() * 2 <= self.align_window_px as u32
    }

    /// Stops reporting sightings. The sensor keeps running; the routines
    /// call this once they are done with vision so a stale detection
    /// cannot trigger another move.
    pub fn disable(&mut self) { self.enabled = false; }
}
