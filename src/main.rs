use aurum::{fs::logger, robot::Robot};
use log::{info, warn, LevelFilter};
use vexide::prelude::*;

#[vexide::main]
async fn main(peripherals: Peripherals) {
    logger::init(LevelFilter::Info).unwrap_or_else(|e| {
        println!("Logger init failed: {}", e);
    });

    let mut robot = Robot::default_config(peripherals);

    if let Err(e) = robot.imu.calibrate().await {
        warn!("IMU Calibration Error: {}", e);
    }

    info!("Robot configured, entering competition loop");
    robot.compete().await;
}
