use kinematic_core::KinematicError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait KinematicFfiError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> KinematicErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `KinematicFfiError`.
///
/// Wraps a `KinematicErrorCode` with its message. Solver errors convert into
/// it through `From<KinematicError>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultKinematicError {
    code: KinematicErrorCode,
    msg: String,
}

impl DefaultKinematicError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_time"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: KinematicErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for an output buffer that cannot hold the result.
    ///
    /// # Arguments
    /// * `required` - Number of elements the result needs
    /// * `capacity` - Number of elements the caller provided
    pub fn buffer_too_small(required: usize, capacity: usize) -> Self {
        Self {
            code: KinematicErrorCode::BufferTooSmall,
            msg: format!("Output buffer holds {capacity} points, {required} required"),
        }
    }
}

impl From<KinematicError> for DefaultKinematicError {
    fn from(error: KinematicError) -> Self {
        let code = match error {
            KinematicError::NonFiniteInput { .. } => KinematicErrorCode::NonFiniteInput,
            KinematicError::ZeroGravity => KinematicErrorCode::ZeroGravity,
            KinematicError::InvalidTrajectory { .. } => KinematicErrorCode::InvalidTrajectory,
            KinematicError::NoRealCollision { .. } => KinematicErrorCode::NoRealCollision,
            KinematicError::EqualAccelerations => KinematicErrorCode::EqualAccelerations,
            KinematicError::ZeroResolution => KinematicErrorCode::ZeroResolution,
            KinematicError::NonFiniteResult { .. } => KinematicErrorCode::NonFiniteResult,
        };

        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl KinematicFfiError for DefaultKinematicError {
    fn code(&self) -> KinematicErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by the kinematic functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KinematicErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// An input was NaN or infinite.
    NonFiniteInput = 2,

    /// Gravity was zero.
    ZeroGravity = 3,

    /// The apex does not clear the source or the target.
    InvalidTrajectory = 4,

    /// The bodies never meet (negative discriminant).
    NoRealCollision = 5,

    /// Equal accelerations and velocities: no unique collision time.
    EqualAccelerations = 6,

    /// Path sampling asked for zero segments.
    ZeroResolution = 7,

    /// Output buffer too small for the sampled path.
    BufferTooSmall = 8,

    /// Finite inputs overflowed to a non-finite result.
    NonFiniteResult = 9,
}

impl From<DefaultKinematicError> for KinematicErrorCode {
    fn from(error: DefaultKinematicError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored to keep the pointer handed to C alive.
    static LAST_ERROR: RefCell<(Option<CString>, KinematicErrorCode)> = const { RefCell::new((None, KinematicErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, KinematicErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, KinematicErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded or no call has been made yet.
///
/// # Thread Safety
/// Error messages are stored per-thread, so each engine thread sees only its
/// own failures.
///
/// # Lifetime
/// The returned pointer is valid until the next kinematic FFI call on this
/// thread. **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// KinematicShootData shot;
/// if (kinematic_calculate_shoot(src, dst, -9.81f, 2.0f, &shot) != Ok) {
///     const char* error = kinematic_get_last_error();
///     if (error) {
///         printf("No shot: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn kinematic_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code on this thread.
///
/// Returns `KinematicErrorCode::Ok` (0) if the last call succeeded.
#[no_mangle]
pub extern "C" fn kinematic_get_last_error_code() -> KinematicErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
