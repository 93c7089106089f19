use crate::{
    input::Axes,
    limits::Limits,
    steer_control::steering_angle,
    torque_control::motor_torque,
};

/// Per-wheel command produced each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Command {
    /// N·m, negative when reversing.
    pub motor_torque: f64,
    /// Degrees, positive to the right.
    pub steering_angle: f64,
}

impl Default for Command {
    fn default() -> Self {
        Self {
            motor_torque: 0.0,
            steering_angle: 0.0,
        }
    }
}

/// Translates the input axes into a candidate command.
///
/// Pure: the same axes and limits always give the same command. The torque
/// is only lowered to the forward limit here; rejecting candidates below
/// the reverse limit is up to the caller.
pub fn map_input(axes: &Axes, limits: &Limits) -> Command {
    Command {
        motor_torque: motor_torque(axes.vertical(), limits),
        steering_angle: steering_angle(axes.horizontal(), limits),
    }
}
