//! Hardware configuration and competition lifecycle.
//!
//! [`Robot`] owns every device handle for its whole lifetime; the
//! competition system hands `&mut self` to exactly one lifecycle
//! callback at a time, so there is no contention to arbitrate. The four
//! drive motors are the one shared resource: the holonomic view drives
//! them during driver control and the tank view during autonomous,
//! through the same reference-counted handles.

use std::{cell::RefCell, rc::Rc};

use vexide::prelude::{Compete, Controller, Direction, Gearset, InertialSensor, Motor, Peripherals};

use crate::{
    auton,
    config::DriveGeometry,
    display::{graphics::DisplayDriver, telemetry::Telemetry},
    drivetrain::{holonomic::Holonomic, tank::Tank},
    opcontrol::teleop,
    shared,
    vision::{detector::CubeDetector, geometry::CameraModel},
};

/// The robot's hardware configuration.
pub struct Robot {
    /// Holonomic view of the drive motors, used during driver control.
    pub holonomic: Holonomic,
    /// Tank view of the same drive motors, used during autonomous.
    pub tank: Tank,
    /// Lift motor.
    pub lift: Rc<RefCell<Motor>>,
    /// Extension slide motor.
    pub extend: Rc<RefCell<Motor>>,
    /// Sweeper motor.
    pub sweep: Rc<RefCell<Motor>>,
    /// Collection box tilt motor.
    pub basket: Rc<RefCell<Motor>>,
    /// Inertial sensor, used for the camera mount orientation check.
    pub imu: InertialSensor,
    /// Gold-cube detector.
    pub detector: CubeDetector,
    /// Camera geometry constants for cube localization.
    pub camera: CameraModel,
    /// Brain display telemetry.
    pub telemetry: Telemetry,
    /// Primary driver controller.
    pub controller: Controller,
}

impl Robot {
    /// Builds the robot with the standard port assignments.
    ///
    /// Right-side drive motors are reversed so positive voltage moves
    /// the robot forward on both sides; the sweeper is reversed so
    /// positive power sweeps inward.
    pub fn default_config(peripherals: Peripherals) -> Self {
        let front_left = shared(Motor::new(
            peripherals.port_1,
            Gearset::Green,
            Direction::Forward,
        ));
        let front_right = shared(Motor::new(
            peripherals.port_2,
            Gearset::Green,
            Direction::Reverse,
        ));
        let back_left = shared(Motor::new(
            peripherals.port_9,
            Gearset::Green,
            Direction::Forward,
        ));
        let back_right = shared(Motor::new(
            peripherals.port_10,
            Gearset::Green,
            Direction::Reverse,
        ));

        let holonomic = Holonomic::new(
            front_left.clone(),
            front_right.clone(),
            back_left.clone(),
            back_right.clone(),
        );
        let tank = Tank::from_sides(
            vec![front_left, back_left],
            vec![front_right, back_right],
            DriveGeometry::default(),
        );

        Self {
            holonomic,
            tank,
            lift: shared(Motor::new(
                peripherals.port_3,
                Gearset::Red,
                Direction::Reverse,
            )),
            extend: shared(Motor::new(
                peripherals.port_4,
                Gearset::Green,
                Direction::Reverse,
            )),
            sweep: shared(Motor::new(
                peripherals.port_5,
                Gearset::Green,
                Direction::Reverse,
            )),
            basket: shared(Motor::new(
                peripherals.port_6,
                Gearset::Green,
                Direction::Forward,
            )),
            imu: InertialSensor::new(peripherals.port_8),
            detector: CubeDetector::new(peripherals.port_7),
            camera: CameraModel::default(),
            telemetry: Telemetry::new(DisplayDriver::new(peripherals.display)),
            controller: peripherals.primary_controller,
        }
    }
}

impl Compete for Robot {
    async fn autonomous(&mut self) { auton::seek::run(self).await; }

    async fn driver(&mut self) { teleop::drive(self).await; }
}
