use kinematic_core::{calculate_shoot, predict_collision_time};

use crate::error::{DefaultKinematicError, KinematicErrorCode};
use crate::helpers::{track_error, track_result};
use crate::types::{KinematicShootData, KinematicVec3};

/// Predict when body B (left, chasing) reaches body A (right, ahead).
///
/// # Parameters
/// - `x_a`, `x_b`: Positions of body A and body B
/// - `a_a`, `a_b`: Accelerations of body A and body B
/// - `u_a`, `u_b`: Initial velocities of body A and body B
/// - `out_time`: Pointer to receive the collision time (s)
///
/// # Returns
/// - `KinematicErrorCode::Ok` on success, with `out_time` set
/// - `KinematicErrorCode::NullPointer` if `out_time` is null
/// - `KinematicErrorCode::NoRealCollision` if the bodies never meet
/// - `KinematicErrorCode::EqualAccelerations` if accelerations and velocities are equal
/// - `KinematicErrorCode::NonFiniteInput` if any input is NaN or infinite
/// - `KinematicErrorCode::NonFiniteResult` if finite inputs overflow
///
/// # Safety
/// `out_time` must be null or a valid pointer to writable `float` storage.
#[no_mangle]
pub unsafe extern "C" fn kinematic_predict_collision_time(
    x_a: f32,
    x_b: f32,
    a_a: f32,
    a_b: f32,
    u_a: f32,
    u_b: f32,
    out_time: *mut f32,
) -> KinematicErrorCode {
    if out_time.is_null() {
        return track_error(&DefaultKinematicError::null_pointer("out_time"));
    }

    match track_result(predict_collision_time(x_a, x_b, a_a, a_b, u_a, u_b)) {
        Ok(time) => {
            unsafe {
                *out_time = time;
            }
            KinematicErrorCode::Ok
        }
        Err(code) => code,
    }
}

/// Calculate the launch velocity and flight time to shoot from `source` to `target`.
///
/// # Parameters
/// - `gravity`: Signed gravity along the vertical axis (e.g. `-9.81`)
/// - `delta_h`: Apex height above the target's vertical coordinate
/// - `out_shoot`: Pointer to receive the solved shot
///
/// # Returns
/// - `KinematicErrorCode::Ok` on success, with `out_shoot` populated
/// - `KinematicErrorCode::NullPointer` if `out_shoot` is null
/// - `KinematicErrorCode::ZeroGravity` if `gravity` is zero
/// - `KinematicErrorCode::InvalidTrajectory` if the apex does not clear source and target
/// - `KinematicErrorCode::NonFiniteInput` if any input is NaN or infinite
///
/// On error `out_shoot` is left untouched.
///
/// # Safety
/// `out_shoot` must be null or a valid pointer to writable `KinematicShootData`.
#[no_mangle]
pub unsafe extern "C" fn kinematic_calculate_shoot(
    source: KinematicVec3,
    target: KinematicVec3,
    gravity: f32,
    delta_h: f32,
    out_shoot: *mut KinematicShootData,
) -> KinematicErrorCode {
    if out_shoot.is_null() {
        return track_error(&DefaultKinematicError::null_pointer("out_shoot"));
    }

    match track_result(calculate_shoot(source.into(), target.into(), gravity, delta_h)) {
        Ok(shoot) => {
            unsafe {
                *out_shoot = shoot.into();
            }
            KinematicErrorCode::Ok
        }
        Err(code) => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{kinematic_get_last_error, kinematic_get_last_error_code};
    use std::ffi::CStr;
    use std::ptr;

    fn vec3(x: f32, y: f32, z: f32) -> KinematicVec3 {
        KinematicVec3 { x, y, z }
    }

    #[test]
    fn test_collision_time_roundtrip() {
        let mut time = 0.0_f32;
        let code = unsafe { kinematic_predict_collision_time(10.0, 0.0, 0.0, 0.0, 0.0, 5.0, &mut time) };
        assert_eq!(code, KinematicErrorCode::Ok);
        assert_eq!(time, 2.0);
        assert_eq!(kinematic_get_last_error_code(), KinematicErrorCode::Ok);
        assert!(kinematic_get_last_error().is_null());
    }

    #[test]
    fn test_collision_null_out_pointer() {
        let code = unsafe {
            kinematic_predict_collision_time(10.0, 0.0, 0.0, 0.0, 0.0, 5.0, ptr::null_mut())
        };
        assert_eq!(code, KinematicErrorCode::NullPointer);

        let msg = unsafe { CStr::from_ptr(kinematic_get_last_error()) };
        assert_eq!(msg.to_str().unwrap(), "Parameter 'out_time' cannot be null");
    }

    #[test]
    fn test_collision_no_real_root() {
        let mut time = -1.0_f32;
        let code = unsafe { kinematic_predict_collision_time(1.0, 0.0, 2.0, 0.0, 0.0, 0.0, &mut time) };
        assert_eq!(code, KinematicErrorCode::NoRealCollision);
        assert_eq!(kinematic_get_last_error_code(), KinematicErrorCode::NoRealCollision);
        // Output untouched on error
        assert_eq!(time, -1.0);
    }

    #[test]
    fn test_collision_overflow_reported() {
        let mut time = -1.0_f32;
        let code = unsafe { kinematic_predict_collision_time(3e38, -3e38, 0.0, 0.0, 0.0, 1.0, &mut time) };
        assert_eq!(code, KinematicErrorCode::NonFiniteResult);
        assert_eq!(time, -1.0);
    }

    #[test]
    fn test_calculate_shoot() {
        let mut shot = KinematicShootData::default();
        let code = unsafe {
            kinematic_calculate_shoot(vec3(0.0, 0.0, 0.0), vec3(10.0, 0.0, 0.0), -9.8, 5.0, &mut shot)
        };
        assert_eq!(code, KinematicErrorCode::Ok);
        assert!((shot.time_to_target - 2.0204).abs() < 1e-3);
        assert!(shot.initial_velocity.y > 0.0);
        assert!((shot.initial_velocity.x - 4.95).abs() < 1e-2);
    }

    #[test]
    fn test_calculate_shoot_error_then_success_clears() {
        let mut shot = KinematicShootData::default();
        let code = unsafe {
            kinematic_calculate_shoot(vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0), 0.0, 5.0, &mut shot)
        };
        assert_eq!(code, KinematicErrorCode::ZeroGravity);
        assert_eq!(shot, KinematicShootData::default());
        assert!(!kinematic_get_last_error().is_null());

        let code = unsafe {
            kinematic_calculate_shoot(vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0), -9.8, 5.0, &mut shot)
        };
        assert_eq!(code, KinematicErrorCode::Ok);
        assert!(kinematic_get_last_error().is_null());
    }
}
