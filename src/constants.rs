/// Roughly what a 1.8L engine delivers at the wheels.
pub const DEFAULT_MAX_MOTOR_TORQUE: f64 = 160.0;
pub const DEFAULT_MAX_REVERSE_TORQUE: f64 = -50.0;
pub const DEFAULT_MAX_STEERING_DEGREES: f64 = 30.0;

/// Upper bound for forward torque, around what high-end race cars reach.
pub const MOTOR_TORQUE_CEILING: f64 = 1500.0;
pub const REVERSE_TORQUE_FLOOR: f64 = -100.0;
/// Anything above 45 degrees already drives oddly.
pub const STEERING_DEGREES_CEILING: f64 = 90.0;

pub const DEFAULT_AXLE_COUNT: u16 = 2;
pub const MAX_AXLE_COUNT: u16 = 1000;
pub const DEFAULT_VISUAL_CHILD_INDEX: u16 = 0;
