use crate::limits::Limits;

/// Maps the horizontal axis to a wheel steering angle in degrees, clamped
/// symmetrically to `±max_steering_angle`.
pub fn steering_angle(horizontal: f64, limits: &Limits) -> f64 {
    let max = limits.steering_bound();
    (max * horizontal).clamp(-max, max)
}

#[derive(Debug, Clone)]
pub struct SteerController {
    steering_angle: f64,
    max_steering_angle: f64,
}

impl SteerController {
    pub fn from_limits(limits: &Limits) -> Self {
        Self::new(limits.max_steering_angle)
    }

    pub fn new(max_steering_angle: f64) -> Self {
        Self {
            max_steering_angle: max_steering_angle.max(0.0),
            steering_angle: 0.0,
        }
    }

    pub fn set_max_steering_angle(&mut self, max_steering_angle: f64) {
        let max = max_steering_angle.max(0.0);
        self.max_steering_angle = max;
        self.steering_angle = self.steering_angle.clamp(-max, max);
    }

    // A non-finite angle keeps the previous one.
    pub fn set_target(&mut self, steering_angle: f64) {
        if !steering_angle.is_finite() {
            log::debug!("keeping steering angle {}", self.steering_angle);
            return;
        }
        let max = self.max_steering_angle;
        self.steering_angle = steering_angle.clamp(-max, max);
    }

    pub fn steering_angle(&self) -> f64 {
        self.steering_angle
    }

    pub fn max_steering_angle(&self) -> f64 {
        self.max_steering_angle
    }

    pub fn steer_ratio(&self) -> f64 {
        if self.max_steering_angle == 0.0 {
            0.0
        } else {
            self.steering_angle / self.max_steering_angle
        }
    }
}
