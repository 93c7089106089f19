use crate::{
    axle::{apply_commands, sync_visuals, Axle, VisualSync},
    constants::{DEFAULT_AXLE_COUNT, DEFAULT_VISUAL_CHILD_INDEX, MAX_AXLE_COUNT},
    control::{map_input, Command},
    error::{Error, Result},
    input::Axes,
    limits::Limits,
    physics::{WheelPhysics, WheelVisuals},
    steer_control::SteerController,
    torque_control::TorqueController,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleControllerInit {
    pub limits: Limits,
    /// How many axles of the supplied list are driven by the controller.
    pub axle_count: u16,
    /// Index of the child node holding the visual model under every wheel.
    /// All wheels share the same index.
    pub visual_child_index: u16,
}

impl Default for VehicleControllerInit {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            axle_count: DEFAULT_AXLE_COUNT,
            visual_child_index: DEFAULT_VISUAL_CHILD_INDEX,
        }
    }
}

impl VehicleControllerInit {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Validates the setup against the supplied axles and builds the
    /// controller.
    ///
    /// Fails when fewer than `axle_count` axles are supplied or when one of
    /// the controlled axles requests motor or steering without any wheel.
    pub fn build<W: Copy>(&self, mut axles: Vec<Axle<W>>) -> Result<VehicleController<W>> {
        let Self {
            ref limits,
            axle_count,
            visual_child_index,
        } = *self;

        let limits = limits.validated()?;

        if axle_count > MAX_AXLE_COUNT {
            log::warn!("axle count {axle_count} capped at {MAX_AXLE_COUNT}");
        }
        let axle_count = axle_count.min(MAX_AXLE_COUNT) as usize;

        if axles.len() < axle_count {
            return Err(Error::MissingAxles {
                axle_count,
                available: axles.len(),
            });
        }
        if axles.len() > axle_count {
            log::debug!(
                "ignoring {} axles beyond axle count {axle_count}",
                axles.len() - axle_count
            );
            axles.truncate(axle_count);
        }

        if let Some(index) = axles
            .iter()
            .position(|axle| axle.is_driven() && !axle.has_wheels())
        {
            return Err(Error::AxleWithoutWheels { index });
        }

        Ok(VehicleController {
            steer_controller: SteerController::from_limits(&limits),
            torque_controller: TorqueController::from_limits(&limits),
            limits,
            axles,
            visual_child_index: visual_child_index as usize,
            elapsed_sec: 0.0,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub command: Command,
    /// The torque candidate was outside the limits and the previous
    /// torque was kept.
    pub torque_retained: bool,
    pub wheels_commanded: usize,
    pub visuals: VisualSync,
    pub elapsed_sec: f64,
}

#[derive(Debug, Clone)]
pub struct VehicleController<W> {
    limits: Limits,
    axles: Vec<Axle<W>>,
    visual_child_index: usize,
    steer_controller: SteerController,
    torque_controller: TorqueController,
    elapsed_sec: f64,
}

impl<W: Copy> VehicleController<W> {
    /// Runs one fixed step: maps the input, commands every axle, lets the
    /// provider resolve the step and mirrors the resulting wheel poses onto
    /// the visuals.
    ///
    /// # Panics
    ///
    /// If `time_delta_sec` is not a positive finite number.
    pub fn tick<P, V>(
        &mut self,
        time_delta_sec: f64,
        axes: &Axes,
        physics: &mut P,
        visuals: &mut V,
    ) -> Report
    where
        P: WheelPhysics<Wheel = W>,
        V: WheelVisuals<W>,
    {
        assert!(time_delta_sec > 0.0 && time_delta_sec.is_finite());

        let Self {
            ref limits,
            ref axles,
            visual_child_index,
            ref mut steer_controller,
            ref mut torque_controller,
            ..
        } = *self;

        // Map input
        let candidate = map_input(axes, limits);
        let torque_retained = !torque_controller.set_target(candidate.motor_torque);
        steer_controller.set_target(candidate.steering_angle);
        let command = Command {
            motor_torque: torque_controller.motor_torque(),
            steering_angle: steer_controller.steering_angle(),
        };

        // Command wheels, then let the physics catch up before reading poses
        let wheels_commanded = apply_commands(axles, &command, physics);
        physics.resolve(time_delta_sec);
        let visuals = sync_visuals(axles, &*physics, visuals, visual_child_index);

        self.elapsed_sec += time_delta_sec;
        log::trace!(
            "t={:.3}s torque={} steer={} wheels={wheels_commanded}",
            self.elapsed_sec,
            command.motor_torque,
            command.steering_angle
        );

        Report {
            command,
            torque_retained,
            wheels_commanded,
            visuals,
            elapsed_sec: self.elapsed_sec,
        }
    }

    // Non-finite limits leave the current ones in place.
    pub fn set_limits(&mut self, limits: &Limits) -> Result<()> {
        let limits = limits.validated()?;
        self.torque_controller.set_limits(&limits);
        self.steer_controller
            .set_max_steering_angle(limits.max_steering_angle);
        self.limits = limits;
        Ok(())
    }

    pub fn set_visual_child_index(&mut self, visual_child_index: usize) {
        self.visual_child_index = visual_child_index;
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn axles(&self) -> &[Axle<W>] {
        &self.axles
    }

    pub fn visual_child_index(&self) -> usize {
        self.visual_child_index
    }

    pub fn command(&self) -> Command {
        Command {
            motor_torque: self.torque_controller.motor_torque(),
            steering_angle: self.steer_controller.steering_angle(),
        }
    }

    pub fn steer_ratio(&self) -> f64 {
        self.steer_controller.steer_ratio()
    }

    pub fn elapsed_sec(&self) -> f64 {
        self.elapsed_sec
    }
}
