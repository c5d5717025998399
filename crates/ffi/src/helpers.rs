use crate::error::{with_last_error_mut, DefaultKinematicError, KinematicErrorCode, KinematicFfiError};
use std::ffi::CString;

/// Set the thread-local error message and code.
/// Internal helper for FFI functions to record failure details.
/// Accepts any type implementing `KinematicFfiError` trait.
pub(crate) fn set_last_error(error: &impl KinematicFfiError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
/// More efficient than handling results for immediate errors.
#[inline]
pub(crate) fn track_error(error: &impl KinematicFfiError) -> KinematicErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Internal helper called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = KinematicErrorCode::Ok;
    });
}

/// Record the outcome of a fallible operation.
///
/// `Ok` clears the last error; `Err` stores it and yields its code.
pub(crate) fn track_result<T, E>(result: Result<T, E>) -> Result<T, KinematicErrorCode>
where
    E: Into<DefaultKinematicError>,
{
    match result {
        Ok(value) => {
            clear_last_error();
            Ok(value)
        }
        Err(error) => Err(track_error(&error.into())),
    }
}
