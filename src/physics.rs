use glam::{DQuat, DVec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelPose {
    pub position: DVec3,
    pub rotation: DQuat,
}

impl Default for WheelPose {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
        }
    }
}

/// Cosmetic wheel model. Writing it never feeds back into the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualWheel {
    pub position: DVec3,
    pub rotation: DQuat,
}

impl VisualWheel {
    pub fn apply(&mut self, pose: &WheelPose) {
        self.position = pose.position;
        self.rotation = pose.rotation;
    }
}

/// Per-wheel command sinks and pose queries of a physics engine.
pub trait WheelPhysics {
    type Wheel: Copy;

    /// Degrees, relative to the vehicle's forward axis.
    fn set_steer_angle(&mut self, wheel: Self::Wheel, degrees: f64);

    /// N·m, negative drives backwards.
    fn set_motor_torque(&mut self, wheel: Self::Wheel, newton_meters: f64);

    /// Must reflect the latest [`WheelPhysics::resolve`] when called after it.
    fn world_pose(&self, wheel: Self::Wheel) -> WheelPose;

    /// Engines that step their world elsewhere leave this empty.
    fn resolve(&mut self, _dt: f64) {}
}

pub trait WheelVisuals<W> {
    fn visual_mut(&mut self, wheel: W, child_index: usize) -> Option<&mut VisualWheel>;
}
