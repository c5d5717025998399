//! Ballistic shot solver
//!
//! Computes the launch velocity that carries a projectile from a source to a
//! target under constant gravity, with the trajectory apex fixed by a height
//! offset above the target.
//!
//! The flight is split into a rise to the apex and a fall onto the target,
//! each obtained from `h = ½·|g|·t²`:
//!
//! - `t_up   = sqrt(-2·h / g)`
//! - `t_down = sqrt(2·(dy - h) / g)`
//!
//! The vertical launch speed is `sqrt(-2·g·h)` against gravity, and the planar
//! (x, z) motion is uniform over `t_up + t_down`.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core_types::vec3::{planar, up};
use crate::core_types::Vec3;
use crate::error::{KinematicError, TrajectoryIssue};

/// Launch parameters of a solved shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShootData {
    initial_velocity: Vec3,
    time_to_target: f32,
}

impl ShootData {
    /// Wrap an already-known launch velocity and flight time.
    pub fn new(initial_velocity: Vec3, time_to_target: f32) -> Self {
        Self {
            initial_velocity,
            time_to_target,
        }
    }

    /// Velocity the projectile must leave the source with
    pub fn initial_velocity(&self) -> Vec3 {
        self.initial_velocity
    }

    /// Seconds from launch until the target is reached
    pub fn time_to_target(&self) -> f32 {
        self.time_to_target
    }

    /// Displacement from the launch point after `t` seconds of flight.
    ///
    /// `v0·t + ½·(up·g)·t²`, gravity acting on the vertical axis only.
    pub fn displacement_at(&self, gravity: f32, t: f32) -> Vec3 {
        self.initial_velocity * t + up() * gravity * t * t / 2.0
    }

    /// Velocity after `t` seconds of flight.
    pub fn velocity_at(&self, gravity: f32, t: f32) -> Vec3 {
        self.initial_velocity + up() * gravity * t
    }
}

/// One shot to solve in a batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotRequest {
    pub source: Vec3,
    pub target: Vec3,
    /// Signed gravity along the vertical axis (negative = pulling down)
    pub gravity: f32,
    /// Height of the apex above the target's vertical coordinate
    pub delta_h: f32,
}

impl ShotRequest {
    /// Solve this request with [`calculate_shoot`].
    ///
    /// # Errors
    /// See [`calculate_shoot`].
    pub fn solve(&self) -> Result<ShootData, KinematicError> {
        calculate_shoot(self.source, self.target, self.gravity, self.delta_h)
    }
}

fn check_finite_vec(name: &'static str, v: &Vec3) -> Result<(), KinematicError> {
    if v.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(KinematicError::NonFiniteInput { name })
    }
}

/// Calculate the launch velocity and flight time to shoot from `source` to
/// `target`.
///
/// # Arguments
/// * `source` - Launch position
/// * `target` - Landing position
/// * `gravity` - Signed gravity along the vertical axis (e.g. `-9.81`)
/// * `delta_h` - Apex height above the target's vertical coordinate
///
/// # Returns
/// [`ShootData`] with the initial velocity and time to target. The vertical
/// velocity component always opposes gravity.
///
/// The apex term `h = target.y + delta_h` is measured as the rise above the
/// launch point, so with `source.y == 0` it is the absolute apex height.
///
/// # Errors
/// * [`KinematicError::NonFiniteInput`] if any input is `NaN` or infinite
/// * [`KinematicError::ZeroGravity`] if `gravity == 0`
/// * [`KinematicError::InvalidTrajectory`] if the apex does not clear the
///   source or the target, or the flight time degenerates
pub fn calculate_shoot(
    source: Vec3,
    target: Vec3,
    gravity: f32,
    delta_h: f32,
) -> Result<ShootData, KinematicError> {
    check_finite_vec("source", &source)?;
    check_finite_vec("target", &target)?;
    KinematicError::check_finite("gravity", gravity)?;
    KinematicError::check_finite("delta_h", delta_h)?;

    if gravity == 0.0 {
        debug!("Rejecting shot with zero gravity");
        return Err(KinematicError::ZeroGravity);
    }

    // Highest vertical point of the shot, must clear the target
    let h = target.y + delta_h;

    let displacement = target - source;

    let rise = -2.0 * h / gravity;
    if rise.is_nan() || rise <= 0.0 {
        debug!(h, gravity, "Apex does not rise above the source");
        return Err(KinematicError::InvalidTrajectory {
            reason: TrajectoryIssue::ApexBelowSource,
        });
    }

    let fall = 2.0 * (displacement.y - h) / gravity;
    if fall.is_nan() || fall < 0.0 {
        debug!(h, dy = displacement.y, gravity, "Apex does not clear the target");
        return Err(KinematicError::InvalidTrajectory {
            reason: TrajectoryIssue::ApexBelowTarget,
        });
    }

    let time_to_target = rise.sqrt() + fall.sqrt();
    if !time_to_target.is_finite() || time_to_target <= 0.0 {
        debug!(time_to_target, "Degenerate flight time");
        return Err(KinematicError::InvalidTrajectory {
            reason: TrajectoryIssue::DegenerateFlightTime,
        });
    }

    let velocity_y = up() * (-2.0 * gravity * h).sqrt();

    // X and Z share the same uniform-motion equation
    let velocity_xz = planar(&displacement) / time_to_target;

    // Vertical speed always points against gravity
    let initial_velocity = velocity_xz + velocity_y * -gravity.signum();

    if !initial_velocity.iter().all(|c| c.is_finite()) {
        return Err(KinematicError::InvalidTrajectory {
            reason: TrajectoryIssue::DegenerateFlightTime,
        });
    }

    Ok(ShootData::new(initial_velocity, time_to_target))
}

/// Solve many independent shots in parallel.
///
/// Results keep the order of `requests`; one failing request does not affect
/// the others.
pub fn calculate_shoots(requests: &[ShotRequest]) -> Vec<Result<ShootData, KinematicError>> {
    requests.par_iter().map(ShotRequest::solve).collect()
}
