use crate::{
    control::Command,
    physics::{WheelPhysics, WheelVisuals},
};

/// Near-side and off-side wheel sharing motor and steering capability.
/// Either wheel may be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Axle<W> {
    pub left: Option<W>,
    pub right: Option<W>,
    pub has_motor: bool,
    pub has_steering: bool,
}

impl<W: Copy> Axle<W> {
    pub fn new(left: Option<W>, right: Option<W>) -> Self {
        Self {
            left,
            right,
            has_motor: false,
            has_steering: false,
        }
    }

    pub fn pair(left: W, right: W) -> Self {
        Self::new(Some(left), Some(right))
    }

    pub fn with_motor(self, has_motor: bool) -> Self {
        Self { has_motor, ..self }
    }

    pub fn with_steering(self, has_steering: bool) -> Self {
        Self {
            has_steering,
            ..self
        }
    }

    pub fn wheels(&self) -> impl Iterator<Item = W> {
        self.left.into_iter().chain(self.right)
    }

    pub fn has_wheels(&self) -> bool {
        self.left.is_some() || self.right.is_some()
    }

    pub fn is_driven(&self) -> bool {
        self.has_motor || self.has_steering
    }

    /// Writes the command to this axle's wheels according to its flags.
    /// Returns how many wheels received a write.
    pub fn apply<P>(&self, command: &Command, physics: &mut P) -> usize
    where
        P: WheelPhysics<Wheel = W>,
    {
        if !self.is_driven() {
            return 0;
        }

        let mut count = 0;
        for wheel in self.wheels() {
            if self.has_steering {
                physics.set_steer_angle(wheel, command.steering_angle);
            }
            if self.has_motor {
                physics.set_motor_torque(wheel, command.motor_torque);
            }
            count += 1;
        }
        count
    }

    pub fn sync_visuals<P, V>(&self, physics: &P, visuals: &mut V, child_index: usize) -> VisualSync
    where
        P: WheelPhysics<Wheel = W>,
        V: WheelVisuals<W>,
    {
        let mut sync = VisualSync::default();
        for wheel in self.wheels() {
            match visuals.visual_mut(wheel, child_index) {
                Some(visual) => {
                    visual.apply(&physics.world_pose(wheel));
                    sync.synced += 1;
                }
                None => sync.missing += 1,
            }
        }
        sync
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualSync {
    pub synced: usize,
    /// Wheels without a visual child at the configured index.
    pub missing: usize,
}

impl std::ops::AddAssign for VisualSync {
    fn add_assign(&mut self, rhs: Self) {
        self.synced += rhs.synced;
        self.missing += rhs.missing;
    }
}

/// Writes the command to every axle. Axles are independent, so the final
/// wheel state does not depend on their order.
pub fn apply_commands<P>(axles: &[Axle<P::Wheel>], command: &Command, physics: &mut P) -> usize
where
    P: WheelPhysics,
{
    axles.iter().map(|axle| axle.apply(command, physics)).sum()
}

pub fn sync_visuals<P, V>(
    axles: &[Axle<P::Wheel>],
    physics: &P,
    visuals: &mut V,
    child_index: usize,
) -> VisualSync
where
    P: WheelPhysics,
    V: WheelVisuals<P::Wheel>,
{
    let mut total = VisualSync::default();
    for axle in axles {
        total += axle.sync_visuals(physics, visuals, child_index);
    }
    if total.missing > 0 {
        log::trace!("{} wheels have no visual at child {child_index}", total.missing);
    }
    total
}
