//! Pin-hole camera geometry for cube localization.
//!
//! The whole localization scheme rests on one similar-triangles fact:
//! an object of known physical width `W` appearing `p` pixels wide sits
//! at range `W * F / p`, where `F` is the camera's focal length in
//! pixels. The same ratio converts the cube's pixel offset from frame
//! center into a lateral offset in inches, and the two together give a
//! bearing and a drive distance.
//!
//! All functions here are pure; [`CameraModel`] just carries the
//! constants.

/// Camera model and alignment constants for the cube detector.
///
/// The focal length was measured by holding a cube at a known distance
/// and solving the similar-triangles ratio backwards (see
/// [`CameraModel::focal_length`]).
#[derive(Clone, Copy, Debug)]
pub struct CameraModel {
    /// Camera focal length in pixels.
    pub focal_length_px: f64,
    /// Physical width of the gold cube in inches.
    pub target_width_in: f64,
    /// Bearings at or below this magnitude (degrees) are treated as
    /// head-on and snapped to zero.
    pub bearing_deadband_deg: f64,
    /// Upper bound on the drive-out distance in inches.
    ///
    /// A misread bounding box can put the cube absurdly far away; the
    /// cube is never farther than one field tile diagonal from the
    /// starting spot.
    pub max_travel_in: f64,
}

impl Default for CameraModel {
    fn default() -> Self {
        Self {
            focal_length_px:      751.0,
            target_width_in:      2.0,
            bearing_deadband_deg: 2.0,
            max_travel_in:        ((24.0_f64).powi(2) + (24.0_f64).powi(2)).sqrt(),
        }
    }
}

impl CameraModel {
    /// Perpendicular distance to the cube in inches, from its apparent
    /// pixel width.
    ///
    /// Returns `None` for a zero-width sighting, which would otherwise
    /// read as infinitely far away.
    pub fn range(&self, width_px: u16) -> Option<f64> {
        if width_px == 0 {
            return None;
        }
        Some(self.target_width_in * self.focal_length_px / width_px as f64)
    }

    /// Lateral offset of the cube from the camera axis in inches.
    ///
    /// `center_offset_px` is the signed pixel distance from the frame's
    /// vertical centerline to the cube's center, positive to the right.
    /// Solves the same ratio as [`CameraModel::range`]: the cube's pixel
    /// width spans `target_width_in` inches, so each pixel of offset is
    /// worth `target_width_in / width_px` inches.
    pub fn lateral_offset(&self, width_px: u16, center_offset_px: i32) -> Option<f64> {
        if width_px == 0 {
            return None;
        }
        Some(self.target_width_in * center_offset_px as f64 / width_px as f64)
    }

    /// Bearing from the robot's heading to the cube in degrees, positive
    /// clockwise (cube to the right).
    ///
    /// Bearings within the dead-band are snapped to exactly zero:
    /// practically head-on, so there is no point turning.
    pub fn bearing(&self, lateral_offset_in: f64, range_in: f64) -> f64 {
        let bearing = (lateral_offset_in / range_in).atan().to_degrees();
        if bearing.abs() <= self.bearing_deadband_deg {
            0.0
        } else {
            bearing
        }
    }

    /// Distance to drive to reach the cube, in inches.
    ///
    /// Hypotenuse of the range and lateral offset, truncated to a whole
    /// inch and capped at [`CameraModel::max_travel_in`].
    pub fn travel_distance(&self, range_in: f64, lateral_offset_in: f64) -> f64 {
        let hypotenuse = range_in.hypot(lateral_offset_in) as i32 as f64;
        hypotenuse.min(self.max_travel_in)
    }

    /// Solves the focal length from a calibration sighting: a cube of
    /// known width held at a measured distance.
    pub fn focal_length(&self, width_px: u16, distance_in: f64) -> f64 {
        width_px as f64 * distance_in / self.target_width_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_monotonically_decreasing_in_pixel_width() {
        let camera = CameraModel::default();
        let mut previous = f64::INFINITY;
        for width_px in 1..400 {
            let range = camera.range(width_px).unwrap();
            assert!(
                range < previous,
                "range grew at width {}: {} >= {}",
                width_px,
                range,
                previous
            );
            previous = range;
        }
    }

    #[test]
    fn zero_width_sighting_is_rejected() {
        let camera = CameraModel::default();
        assert_eq!(camera.range(0), None);
        assert_eq!(camera.lateral_offset(0, 50), None);
    }

    #[test]
    fn range_matches_similar_triangles() {
        let camera = CameraModel::default();
        // 2in cube, 751px focal length, 100px wide -> 15.02in away.
        let range = camera.range(100).unwrap();
        assert!((range - 15.02).abs() < 1e-9);
    }

    #[test]
    fn focal_length_inverts_range() {
        let camera = CameraModel::default();
        let range = camera.range(94).unwrap();
        let solved = camera.focal_length(94, range);
        assert!((solved - camera.focal_length_px).abs() < 1e-9);
    }

    #[test]
    fn lateral_offset_sign_follows_pixel_offset() {
        let camera = CameraModel::default();
        assert!(camera.lateral_offset(80, 120).unwrap() > 0.0);
        assert!(camera.lateral_offset(80, -120).unwrap() < 0.0);
        assert_eq!(camera.lateral_offset(80, 0).unwrap(), 0.0);
    }

    #[test]
    fn small_bearings_snap_to_zero() {
        let camera = CameraModel::default();
        // tan(2 deg) * 20in range = 0.698in offset, right on the edge.
        let on_edge = 20.0 * (2.0_f64).to_radians().tan();
        assert_eq!(camera.bearing(on_edge - 1e-6, 20.0), 0.0);
        assert_eq!(camera.bearing(-(on_edge - 1e-6), 20.0), 0.0);
        assert!(camera.bearing(on_edge + 0.1, 20.0) > 2.0);
    }

    #[test]
    fn bearing_is_arctangent_outside_deadband() {
        let camera = CameraModel::default();
        let bearing = camera.bearing(10.0, 10.0);
        assert!((bearing - 45.0).abs() < 1e-9);
        assert!((camera.bearing(-10.0, 10.0) + 45.0).abs() < 1e-9);
    }

    #[test]
    fn travel_distance_is_clamped_to_max() {
        let camera = CameraModel::default();
        let capped = camera.travel_distance(100.0, 40.0);
        assert!((capped - camera.max_travel_in).abs() < 1e-9);
    }

    #[test]
    fn travel_distance_is_truncated_euclidean_norm() {
        let camera = CameraModel::default();
        // hypot(12, 5) = 13 exactly, under the cap.
        assert_eq!(camera.travel_distance(12.0, 5.0), 13.0);
        // hypot(10, 4) = 10.77, truncates to 10.
        assert_eq!(camera.travel_distance(10.0, 4.0), 10.0);
    }
}
