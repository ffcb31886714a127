//! Robot geometry constants and the tick conversions derived from them.
//!
//! All encoder math in the autonomous moves goes through
//! [`DriveGeometry`]: it knows the wheel size, the encoder resolution,
//! and the wheel spans, and derives ticks-per-inch and ticks-per-turn
//! from those. The derivations round to the nearest whole tick, since
//! the motor encoders only report whole ticks anyway.

use std::f64::consts::PI;

use vexide::math::Angle;

/// Physical layout of the drivetrain.
///
/// The spans describe the rectangle formed by the four wheel contact
/// points. The robot's effective turning diameter is the diagonal of
/// that rectangle: when the two sides run in opposite directions the
/// wheels trace a circle with that diameter.
#[derive(Clone, Copy, Debug)]
pub struct DriveGeometry {
    /// Drive wheel diameter in inches.
    pub wheel_diameter_in: f64,
    /// Encoder ticks for one full wheel revolution.
    ///
    /// 1440 for the stock drive motors; swap this if the motors change.
    pub ticks_per_wheel: u32,
    /// Distance between the front wheel pair in inches.
    pub front_wheel_span_in: f64,
    /// Distance between the back wheel pair in inches.
    pub back_wheel_span_in: f64,
    /// Distance between the front and back axles in inches.
    pub wheel_base_in: f64,
}

impl Default for DriveGeometry {
    fn default() -> Self {
        Self {
            wheel_diameter_in:   4.0,
            ticks_per_wheel:     1440,
            front_wheel_span_in: 14.8,
            back_wheel_span_in:  14.8,
            wheel_base_in:       12.25,
        }
    }
}

impl DriveGeometry {
    /// The effective turning diameter of the robot in inches.
    ///
    /// Diagonal of the wheel-contact rectangle, using the average of the
    /// front and back spans.
    pub fn turning_diameter_in(&self) -> f64 {
        let half_span = (self.front_wheel_span_in + self.back_wheel_span_in) / 4.0;
        let half_base = self.wheel_base_in / 2.0;
        2.0 * (half_span * half_span + half_base * half_base).sqrt()
    }

    /// Encoder ticks per inch of wheel travel, rounded to the nearest tick.
    pub fn ticks_per_inch(&self) -> u32 {
        (self.ticks_per_wheel as f64 / (PI * self.wheel_diameter_in) + 0.5) as u32
    }

    /// Encoder ticks one side must travel (with the other side mirrored)
    /// to rotate the robot a full 360 degrees, rounded to the nearest tick.
    pub fn ticks_per_turn(&self) -> u32 {
        (self.ticks_per_inch() as f64 * PI * self.turning_diameter_in() + 0.5) as u32
    }

    /// The wheel rotation corresponding to `inches` of travel.
    ///
    /// Goes through whole ticks so the target matches what the encoder
    /// can actually report. Negative distances produce negative angles.
    pub fn wheel_angle_for_inches(&self, inches: f64) -> Angle {
        let ticks = inches * self.ticks_per_inch() as f64;
        Angle::from_degrees(ticks * 360.0 / self.ticks_per_wheel as f64)
    }

    /// The wheel rotation one side must travel to rotate the robot
    /// clockwise by `degrees`. Negative degrees rotate counterclockwise.
    pub fn wheel_angle_for_turn(&self, degrees: f64) -> Angle {
        let ticks = self.ticks_per_turn() as f64 * degrees / 360.0;
        Angle::from_degrees(ticks * 360.0 / self.ticks_per_wheel as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_per_inch_rounds_to_nearest() {
        let geometry = DriveGeometry::default();
        // 1440 / (pi * 4) = 114.59, rounds up to 115.
        assert_eq!(geometry.ticks_per_inch(), 115);
    }

    #[test]
    fn turning_diameter_is_wheel_rectangle_diagonal() {
        let geometry = DriveGeometry::default();
        let expected = 2.0 * ((7.4_f64).powi(2) + (6.125_f64).powi(2)).sqrt();
        assert!((geometry.turning_diameter_in() - expected).abs() < 1e-9);
    }

    #[test]
    fn wheel_angle_scales_linearly_with_distance() {
        let geometry = DriveGeometry::default();
        let one = geometry.wheel_angle_for_inches(1.0);
        let ten = geometry.wheel_angle_for_inches(10.0);
        assert!((ten.as_degrees() - 10.0 * one.as_degrees()).abs() < 1e-9);
    }

    #[test]
    fn negative_distance_gives_negative_angle() {
        let geometry = DriveGeometry::default();
        assert!(geometry.wheel_angle_for_inches(-12.0).as_degrees() < 0.0);
    }

    #[test]
    fn full_turn_matches_ticks_per_turn() {
        let geometry = DriveGeometry::default();
        let angle = geometry.wheel_angle_for_turn(360.0);
        let expected_ticks = geometry.ticks_per_turn() as f64;
        let actual_ticks = angle.as_degrees() * geometry.ticks_per_wheel as f64 / 360.0;
        assert!((actual_ticks - expected_ticks).abs() < 1e-6);
    }
}
