pub mod axle;
pub mod constants;
pub mod control;
pub mod error;
pub mod input;
pub mod limits;
pub mod physics;
pub mod sim;
pub mod steer_control;
pub mod torque_control;
pub mod vehicle_control;

pub use axle::Axle;
pub use control::{map_input, Command};
pub use error::{Error, Result};
pub use input::Axes;
pub use limits::Limits;
pub use physics::{VisualWheel, WheelPhysics, WheelPose, WheelVisuals};
pub use vehicle_control::{Report, VehicleController, VehicleControllerInit};
