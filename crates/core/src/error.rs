//! Domain errors for the kinematic solvers.
//!
//! Every solver checks its inputs before dividing or taking a square root, so
//! a caller never receives `NaN` or infinity as a "result". Each variant names
//! the precondition that failed; callers are expected to skip the action (no
//! shot fired, no collision predicted) when they get one.

use std::fmt;

/// Why a ballistic trajectory could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrajectoryIssue {
    /// The apex does not rise above the launch point against gravity.
    ApexBelowSource,
    /// The apex does not reach past the target, so the shot cannot fall onto it.
    ApexBelowTarget,
    /// The flight time came out zero or non-finite.
    DegenerateFlightTime,
}

impl fmt::Display for TrajectoryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrajectoryIssue::ApexBelowSource => {
                write!(f, "apex height must lie above the source against gravity")
            }
            TrajectoryIssue::ApexBelowTarget => {
                write!(f, "apex height must lie beyond the target against gravity")
            }
            TrajectoryIssue::DegenerateFlightTime => {
                write!(f, "time to target is zero or not finite")
            }
        }
    }
}

/// Input-domain violation reported by a kinematic solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KinematicError {
    /// An input was `NaN` or infinite
    NonFiniteInput {
        /// Parameter name as it appears in the solver signature
        name: &'static str,
    },
    /// Gravity magnitude was zero, the shot has no apex
    ZeroGravity,
    /// Apex/target geometry admits no real trajectory
    InvalidTrajectory {
        /// Which precondition failed
        reason: TrajectoryIssue,
    },
    /// The collision quadratic has a negative discriminant
    NoRealCollision {
        /// Value of `B² - 4AC`
        discriminant: f32,
    },
    /// Equal accelerations and equal velocities, the gap never closes
    EqualAccelerations,
    /// Path sampling asked for zero segments
    ZeroResolution,
    /// Finite inputs overflowed `f32` on the way to the result
    NonFiniteResult {
        /// Intermediate quantity that left the finite range
        name: &'static str,
    },
}

impl KinematicError {
    pub(crate) fn check_finite(name: &'static str, value: f32) -> Result<(), Self> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Self::NonFiniteInput { name })
        }
    }
}

impl fmt::Display for KinematicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KinematicError::NonFiniteInput { name } => {
                write!(f, "Input '{name}' must be finite")
            }
            KinematicError::ZeroGravity => write!(f, "Gravity must be non-zero"),
            KinematicError::InvalidTrajectory { reason } => {
                write!(f, "Invalid trajectory: {reason}")
            }
            KinematicError::NoRealCollision { discriminant } => write!(
                f,
                "No real collision: discriminant {discriminant} is negative"
            ),
            KinematicError::EqualAccelerations => write!(
                f,
                "Equal accelerations and velocities: the bodies never meet"
            ),
            KinematicError::ZeroResolution => {
                write!(f, "Path resolution must be at least one segment")
            }
            KinematicError::NonFiniteResult { name } => {
                write!(f, "Computed '{name}' overflowed to a non-finite value")
            }
        }
    }
}

impl std::error::Error for KinematicError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_finite() {
        assert!(KinematicError::check_finite("gravity", -9.81).is_ok());
        assert_eq!(
            KinematicError::check_finite("gravity", f32::NAN),
            Err(KinematicError::NonFiniteInput { name: "gravity" })
        );
        assert!(KinematicError::check_finite("delta_h", f32::INFINITY).is_err());
    }

    #[test]
    fn test_display_names_failed_precondition() {
        let err = KinematicError::InvalidTrajectory {
            reason: TrajectoryIssue::ApexBelowTarget,
        };
        assert_eq!(
            err.to_string(),
            "Invalid trajectory: apex height must lie beyond the target against gravity"
        );

        let err = KinematicError::NonFiniteInput { name: "x_a" };
        assert_eq!(err.to_string(), "Input 'x_a' must be finite");
    }
}
