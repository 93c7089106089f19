use crate::{
    constants::{
        DEFAULT_MAX_MOTOR_TORQUE, DEFAULT_MAX_REVERSE_TORQUE, DEFAULT_MAX_STEERING_DEGREES,
        MOTOR_TORQUE_CEILING, REVERSE_TORQUE_FLOOR, STEERING_DEGREES_CEILING,
    },
    error::{Error, Result},
};
use noisy_float::types::R64;
use serde::{Deserialize, Serialize};

/// Torque (N·m) and steering (degrees) limits shared by every axle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_motor_torque: f64,
    pub max_reverse_torque: f64,
    pub max_steering_angle: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_motor_torque: DEFAULT_MAX_MOTOR_TORQUE,
            max_reverse_torque: DEFAULT_MAX_REVERSE_TORQUE,
            max_steering_angle: DEFAULT_MAX_STEERING_DEGREES,
        }
    }
}

impl Limits {
    pub fn new(max_motor_torque: f64, max_reverse_torque: f64, max_steering_angle: f64) -> Self {
        Self {
            max_motor_torque,
            max_reverse_torque,
            max_steering_angle,
        }
    }

    /// Returns a copy with every limit clamped into its range.
    ///
    /// Out-of-range finite values are clamped, not rejected. Only NaN or
    /// infinite limits fail.
    pub fn validated(&self) -> Result<Self> {
        let Self {
            max_motor_torque,
            max_reverse_torque,
            max_steering_angle,
        } = *self;

        let max_motor_torque = clamp_limit(
            "max_motor_torque",
            max_motor_torque,
            0.0,
            MOTOR_TORQUE_CEILING,
        )?;
        let max_reverse_torque = clamp_limit(
            "max_reverse_torque",
            max_reverse_torque,
            REVERSE_TORQUE_FLOOR,
            0.0,
        )?;
        let max_steering_angle = clamp_limit(
            "max_steering_angle",
            max_steering_angle,
            0.0,
            STEERING_DEGREES_CEILING,
        )?;

        Ok(Self {
            max_motor_torque,
            max_reverse_torque,
            max_steering_angle,
        })
    }

    /// `(reverse, forward)` torque bounds. Limits that skipped
    /// [`Limits::validated`] are pinned to their sign here, so the range
    /// always contains 0 and NaN reads as 0.
    pub fn torque_range(&self) -> (f64, f64) {
        (
            self.max_reverse_torque.min(0.0),
            self.max_motor_torque.max(0.0),
        )
    }

    /// Non-negative steering limit, 0 for NaN.
    pub fn steering_bound(&self) -> f64 {
        self.max_steering_angle.max(0.0)
    }
}

fn clamp_limit(name: &'static str, value: f64, lower: f64, upper: f64) -> Result<f64> {
    let checked = R64::try_new(value).ok_or(Error::NonFiniteLimit { name, value })?;
    let clamped = checked.raw().clamp(lower, upper);

    if clamped != value {
        log::warn!("{name} = {value} is outside [{lower}, {upper}], using {clamped}");
    }

    Ok(clamped)
}
