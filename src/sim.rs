//! In-memory wheels: steer yaws a wheel around +Y, torque spins it around
//! its axle. No contact, suspension or friction.

use crate::physics::{VisualWheel, WheelPhysics, WheelPose, WheelVisuals};
use glam::{DQuat, DVec3};
use std::collections::HashMap;

const DEFAULT_SPIN_INERTIA: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WheelId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct WheelState {
    /// Degrees.
    pub steer_angle: f64,
    /// N·m.
    pub motor_torque: f64,
    pub mount: DVec3,
    /// Radians.
    pub spin_angle: f64,
    /// Radians per second.
    pub spin_rate: f64,
}

impl WheelState {
    fn new(mount: DVec3) -> Self {
        Self {
            steer_angle: 0.0,
            motor_torque: 0.0,
            mount,
            spin_angle: 0.0,
            spin_rate: 0.0,
        }
    }

    pub fn pose(&self) -> WheelPose {
        let yaw = DQuat::from_rotation_y(self.steer_angle.to_radians());
        let spin = DQuat::from_rotation_x(self.spin_angle);
        WheelPose {
            position: self.mount,
            rotation: yaw * spin,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WheelBank {
    wheels: Vec<WheelState>,
    spin_inertia: f64,
}

impl Default for WheelBank {
    fn default() -> Self {
        Self::new()
    }
}

impl WheelBank {
    pub fn new() -> Self {
        Self {
            wheels: vec![],
            spin_inertia: DEFAULT_SPIN_INERTIA,
        }
    }

    /// Rotational inertia of every wheel in kg·m². Non-positive values are
    /// ignored.
    pub fn with_spin_inertia(mut self, spin_inertia: f64) -> Self {
        if spin_inertia > 0.0 {
            self.spin_inertia = spin_inertia;
        }
        self
    }

    pub fn add_wheel(&mut self, mount: DVec3) -> WheelId {
        let id = WheelId(self.wheels.len());
        self.wheels.push(WheelState::new(mount));
        id
    }

    /// # Panics
    ///
    /// If `id` was not handed out by this bank.
    pub fn wheel(&self, id: WheelId) -> &WheelState {
        &self.wheels[id.0]
    }

    pub fn len(&self) -> usize {
        self.wheels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wheels.is_empty()
    }
}

impl WheelPhysics for WheelBank {
    type Wheel = WheelId;

    // Unknown ids are ignored; their pose is the identity at the origin.
    fn set_steer_angle(&mut self, wheel: WheelId, degrees: f64) {
        match self.wheels.get_mut(wheel.0) {
            Some(state) => state.steer_angle = degrees,
            None => log::debug!("steer for unknown wheel {wheel:?}"),
        }
    }

    fn set_motor_torque(&mut self, wheel: WheelId, newton_meters: f64) {
        match self.wheels.get_mut(wheel.0) {
            Some(state) => state.motor_torque = newton_meters,
            None => log::debug!("torque for unknown wheel {wheel:?}"),
        }
    }

    fn world_pose(&self, wheel: WheelId) -> WheelPose {
        self.wheels
            .get(wheel.0)
            .map(WheelState::pose)
            .unwrap_or_default()
    }

    fn resolve(&mut self, dt: f64) {
        let inertia = self.spin_inertia;
        for wheel in &mut self.wheels {
            wheel.spin_rate += wheel.motor_torque / inertia * dt;
            wheel.spin_angle += wheel.spin_rate * dt;
        }
    }
}

/// Visual child nodes per wheel.
#[derive(Debug, Clone, Default)]
pub struct VisualRig {
    children: HashMap<WheelId, Vec<VisualWheel>>,
}

impl VisualRig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, wheel: WheelId, count: usize) {
        self.children
            .insert(wheel, vec![VisualWheel::default(); count]);
    }

    pub fn visual(&self, wheel: WheelId, child_index: usize) -> Option<&VisualWheel> {
        self.children.get(&wheel)?.get(child_index)
    }
}

impl WheelVisuals<WheelId> for VisualRig {
    fn visual_mut(&mut self, wheel: WheelId, child_index: usize) -> Option<&mut VisualWheel> {
        self.children.get_mut(&wheel)?.get_mut(child_index)
    }
}
