use kinematic_core::{LineColor, TrajectorySampler, Vec3};
use std::ffi::c_void;
use std::slice;

use crate::error::{DefaultKinematicError, KinematicErrorCode};
use crate::helpers::{track_error, track_result};
use crate::types::{KinematicColor, KinematicShootData, KinematicVec3};

/// Line callback invoked once per path segment, in path order.
///
/// `user_data` is passed through untouched so the engine side can reach its
/// own drawing context.
pub type KinematicLineCallback = Option<
    unsafe extern "C" fn(
        start: KinematicVec3,
        end: KinematicVec3,
        color: KinematicColor,
        user_data: *mut c_void,
    ),
>;

/// Number of segments used by engines that do not pick their own resolution.
#[no_mangle]
pub extern "C" fn kinematic_default_resolution() -> u32 {
    kinematic_core::DEFAULT_RESOLUTION
}

/// Sample the path of the shot from `source` to `target` into a point buffer.
///
/// Writes `resolution + 1` points, the first being `source` and the last the
/// landing point.
///
/// # Parameters
/// - `out_points`: Buffer receiving the points, or null to only query the count
/// - `capacity`: Number of points `out_points` can hold
/// - `out_len`: Pointer to receive the number of points the path needs
///
/// # Returns
/// - `KinematicErrorCode::Ok` on success (or on a size query with null `out_points`)
/// - `KinematicErrorCode::NullPointer` if `out_len` is null
/// - `KinematicErrorCode::BufferTooSmall` if `capacity < resolution + 1`;
///   `out_len` still receives the required count
/// - Any solver error of `kinematic_calculate_shoot`, or `ZeroResolution`
///
/// # Safety
/// - `out_len` must be null or valid for a `size_t` write.
/// - `out_points` must be null or valid for `capacity` consecutive writes.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn kinematic_sample_path(
    source: KinematicVec3,
    target: KinematicVec3,
    gravity: f32,
    delta_h: f32,
    resolution: u32,
    out_points: *mut KinematicVec3,
    capacity: usize,
    out_len: *mut usize,
) -> KinematicErrorCode {
    if out_len.is_null() {
        return track_error(&DefaultKinematicError::null_pointer("out_len"));
    }

    let sampler = match track_result(TrajectorySampler::solve(
        source.into(),
        target.into(),
        gravity,
        delta_h,
        resolution,
    )) {
        Ok(sampler) => sampler,
        Err(code) => return code,
    };

    let required = resolution as usize + 1;
    unsafe {
        *out_len = required;
    }

    if out_points.is_null() {
        return KinematicErrorCode::Ok;
    }

    if capacity < required {
        return track_error(&DefaultKinematicError::buffer_too_small(required, capacity));
    }

    // SAFETY: caller guarantees `capacity` writable elements and
    // `required <= capacity` was checked above.
    let points = unsafe { slice::from_raw_parts_mut(out_points, required) };
    for (slot, point) in points.iter_mut().zip(sampler.points()) {
        *slot = point.into();
    }

    KinematicErrorCode::Ok
}

/// Solve the shot from `source` to `target` and draw its path through `callback`.
///
/// The callback runs `resolution` times on the calling thread before this
/// function returns. Nothing is drawn on error.
///
/// # Parameters
/// - `color`: Colour passed to every callback invocation
/// - `callback`: Line sink, must not be null
/// - `user_data`: Opaque pointer forwarded to `callback`
/// - `out_shoot`: Optional pointer to receive the solved shot (may be null)
///
/// # Returns
/// - `KinematicErrorCode::Ok` on success
/// - `KinematicErrorCode::NullPointer` if `callback` is null
/// - Any solver error of `kinematic_calculate_shoot`, or `ZeroResolution`
///
/// # Safety
/// - `callback` must be safe to call with the given `user_data`.
/// - `out_shoot` must be null or valid for a `KinematicShootData` write.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn kinematic_draw_path(
    source: KinematicVec3,
    target: KinematicVec3,
    gravity: f32,
    delta_h: f32,
    resolution: u32,
    color: KinematicColor,
    callback: KinematicLineCallback,
    user_data: *mut c_void,
    out_shoot: *mut KinematicShootData,
) -> KinematicErrorCode {
    let Some(callback) = callback else {
        return track_error(&DefaultKinematicError::null_pointer("callback"));
    };

    let sampler = match track_result(TrajectorySampler::solve(
        source.into(),
        target.into(),
        gravity,
        delta_h,
        resolution,
    )) {
        Ok(sampler) => sampler,
        Err(code) => return code,
    };

    let mut sink = |start: Vec3, end: Vec3, color: LineColor| {
        // SAFETY: upheld by the caller per this function's contract.
        unsafe { callback(start.into(), end.into(), color.into(), user_data) }
    };
    sampler.draw(&mut sink, color.into());

    if !out_shoot.is_null() {
        unsafe {
            *out_shoot = sampler.shoot().into();
        }
    }

    KinematicErrorCode::Ok
}
