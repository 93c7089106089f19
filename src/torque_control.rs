use crate::limits::Limits;

/// Maps the vertical axis to a motor torque candidate in N·m.
///
/// Negative input scales the (negative) reverse limit by the input
/// magnitude, anything else scales the forward limit. Candidates above
/// `max_motor_torque` are lowered to it; the lower bound is left to
/// [`validate_motor_torque`].
pub fn motor_torque(vertical: f64, limits: &Limits) -> f64 {
    let (max_reverse_torque, max_motor_torque) = limits.torque_range();

    let candidate = if vertical < 0.0 {
        max_reverse_torque * -vertical
    } else {
        max_motor_torque * vertical.abs()
    };

    if candidate > max_motor_torque {
        max_motor_torque
    } else {
        candidate
    }
}

/// `None` when the candidate is outside the torque range or NaN.
pub fn validate_motor_torque(candidate: f64, limits: &Limits) -> Option<f64> {
    let (lower, upper) = limits.torque_range();
    (lower..=upper).contains(&candidate).then_some(candidate)
}

/// Holds the last accepted motor torque.
///
/// A rejected candidate leaves the held value untouched, so a glitching
/// input source keeps the wheels on their previous torque instead of
/// snapping to a limit.
#[derive(Debug, Clone)]
pub struct TorqueController {
    motor_torque: f64,
    limits: Limits,
}

impl TorqueController {
    pub fn from_limits(limits: &Limits) -> Self {
        Self {
            motor_torque: 0.0,
            limits: *limits,
        }
    }

    pub fn set_limits(&mut self, limits: &Limits) {
        self.limits = *limits;
        let (lower, upper) = limits.torque_range();
        self.motor_torque = self.motor_torque.clamp(lower, upper);
    }

    /// Returns whether the candidate was accepted.
    pub fn set_target(&mut self, candidate: f64) -> bool {
        match validate_motor_torque(candidate, &self.limits) {
            Some(torque) => {
                self.motor_torque = torque;
                true
            }
            None => {
                log::debug!(
                    "torque {candidate} outside {:?}, keeping {}",
                    self.limits.torque_range(),
                    self.motor_torque
                );
                false
            }
        }
    }

    pub fn motor_torque(&self) -> f64 {
        self.motor_torque
    }
}
