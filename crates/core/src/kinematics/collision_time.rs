//! Collision time of two bodies moving along one axis
//!
//! Body A is ahead (right), body B behind (left) and chasing it. With
//! constant acceleration both follow
//!
//! ```text
//! S = u·t + a·t²/2
//! ```
//!
//! and they meet when `S_b = S_a + h`, `h = x_a - x_b`. Substituting S gives
//!
//! ```text
//! t²·(a_b - a_a) + t·2·(u_b - u_a) - 2·h = 0
//! ```
//!
//! which is solved in closed form. Only the "+" root of the quadratic formula
//! is returned; the "-" root is never evaluated.

use tracing::debug;

use crate::error::KinematicError;

/// Position at time `t` of a body starting at `x` with velocity `u` and
/// constant acceleration `a`.
#[inline]
pub fn position_at(x: f32, u: f32, a: f32, t: f32) -> f32 {
    x + u * t + 0.5 * a * t * t
}

/// Predict when body B (left, chasing) reaches body A (right, ahead).
///
/// # Arguments
/// * `x_a` - Position of body A (right object)
/// * `x_b` - Position of body B (left object)
/// * `a_a` - Acceleration of body A
/// * `a_b` - Acceleration of body B
/// * `u_a` - Initial velocity of body A
/// * `u_b` - Initial velocity of body B
///
/// # Returns
/// The "+" root `(-B + sqrt(B² - 4AC)) / 2A` of the collision quadratic.
/// When both accelerations are equal the quadratic term vanishes and the
/// linear chase time `h / (u_b - u_a)` is returned instead. The time is not
/// clamped: a negative value means the bodies met in the past.
///
/// # Errors
/// * [`KinematicError::NonFiniteInput`] if any argument is `NaN` or infinite
/// * [`KinematicError::EqualAccelerations`] if accelerations and velocities
///   are both equal (no unique meeting time)
/// * [`KinematicError::NoRealCollision`] if the discriminant is negative
/// * [`KinematicError::NonFiniteResult`] if finite inputs overflow `f32`
///   (the gap, the discriminant or the time itself)
pub fn predict_collision_time(
    x_a: f32,
    x_b: f32,
    a_a: f32,
    a_b: f32,
    u_a: f32,
    u_b: f32,
) -> Result<f32, KinematicError> {
    for (name, value) in [
        ("x_a", x_a),
        ("x_b", x_b),
        ("a_a", a_a),
        ("a_b", a_b),
        ("u_a", u_a),
        ("u_b", u_b),
    ] {
        KinematicError::check_finite(name, value)?;
    }

    let h = finite_result("h", x_a - x_b)?;

    let coeff_a = a_b - a_a;
    let coeff_b = 2.0 * (u_b - u_a);
    let coeff_c = -2.0 * h;

    if coeff_a == 0.0 {
        if coeff_b == 0.0 {
            debug!(gap = h, "Equal accelerations and velocities, no collision time");
            return Err(KinematicError::EqualAccelerations);
        }
        return finite_result("time", -coeff_c / coeff_b);
    }

    let discriminant =
        finite_result("discriminant", coeff_b * coeff_b - 4.0 * coeff_a * coeff_c)?;
    if discriminant < 0.0 {
        debug!(discriminant, "Collision quadratic has no real root");
        return Err(KinematicError::NoRealCollision { discriminant });
    }

    finite_result("time", (-coeff_b + discriminant.sqrt()) / (2.0 * coeff_a))
}

fn finite_result(name: &'static str, value: f32) -> Result<f32, KinematicError> {
    if value.is_finite() {
        Ok(value)
    } else {
        debug!(name, value, "Collision solve overflowed");
        Err(KinematicError::NonFiniteResult { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_chase() {
        // B at rest behind A, B moving at 5 m/s: 10 m gap closes in 2 s
        let t = predict_collision_time(10.0, 0.0, 0.0, 0.0, 0.0, 5.0).unwrap();
        assert_eq!(t, 2.0);
    }

    #[test]
    fn test_accelerating_chaser() {
        // B accelerates at 2 m/s² from rest: t² = 10
        let t = predict_collision_time(10.0, 0.0, 0.0, 2.0, 0.0, 0.0).unwrap();
        assert_relative_eq!(t, 10.0_f32.sqrt(), epsilon = 1e-5);
        assert_relative_eq!(
            position_at(10.0, 0.0, 0.0, t),
            position_at(0.0, 0.0, 2.0, t),
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_zero_discriminant_repeated_root() {
        // A = -2, B = 4, C = -2: B² - 4AC = 0 exactly
        let t = predict_collision_time(1.0, 0.0, 2.0, 0.0, 0.0, 2.0).unwrap();
        assert_eq!(t, 1.0);
        assert_eq!(position_at(1.0, 0.0, 2.0, t), position_at(0.0, 2.0, 0.0, t));
    }

    #[test]
    fn test_negative_discriminant() {
        // A accelerates away from a chaser with matching speed
        let err = predict_collision_time(1.0, 0.0, 2.0, 0.0, 0.0, 0.0).unwrap_err();
        assert_eq!(err, KinematicError::NoRealCollision { discriminant: -16.0 });
    }

    #[test]
    fn test_equal_motion_never_meets() {
        let err = predict_collision_time(10.0, 0.0, 1.0, 1.0, 3.0, 3.0).unwrap_err();
        assert_eq!(err, KinematicError::EqualAccelerations);
    }

    #[test]
    fn test_non_finite_input() {
        let err = predict_collision_time(10.0, 0.0, f32::NAN, 1.0, 0.0, 0.0).unwrap_err();
        assert_eq!(err, KinematicError::NonFiniteInput { name: "a_a" });
    }

    #[test]
    fn test_overflowing_inputs_rejected() {
        // B² overflows while every input is finite
        let err = predict_collision_time(1e20, 0.0, 0.0, 1.0, 0.0, 1e20).unwrap_err();
        assert_eq!(err, KinematicError::NonFiniteResult { name: "discriminant" });

        // The gap itself overflows
        let err = predict_collision_time(3e38, -3e38, 0.0, 0.0, 0.0, 1.0).unwrap_err();
        assert_eq!(err, KinematicError::NonFiniteResult { name: "h" });

        // Linear fallback: finite gap, speed difference underflows the division
        let err = predict_collision_time(3e38, 0.0, 0.0, 0.0, 0.0, 1e-30).unwrap_err();
        assert_eq!(err, KinematicError::NonFiniteResult { name: "time" });
    }

    #[test]
    fn test_only_plus_root_is_returned() {
        // A = 1, B = -6, C = 8 has roots 2 and 4; the "+" root is 4
        // h = -4 (B starts ahead), u_b - u_a = -3, a_b - a_a = 1
        let t = predict_collision_time(0.0, 4.0, 0.0, 1.0, 3.0, 0.0).unwrap();
        assert_relative_eq!(t, 4.0, epsilon = 1e-5);
    }
}
