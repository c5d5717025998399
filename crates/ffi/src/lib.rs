//! C ABI for the kinematic helpers.
//!
//! Intended to be loaded as a native plugin by a game engine (Unity, Godot,
//! Unreal). All functions are stateless; failures return a
//! `KinematicErrorCode` and leave a per-thread message readable through
//! `kinematic_get_last_error`.
//!
//! ## Unity Example
//! ```csharp
//! [DllImport("kinematic_ffi")]
//! static extern KinematicErrorCode kinematic_calculate_shoot(
//!     Vector3 source, Vector3 target, float gravity, float deltaH,
//!     out KinematicShootData shoot);
//!
//! void Launch() {
//!     if (kinematic_calculate_shoot(transform.position, target.position,
//!             Physics.gravity.y, 2f, out var shot) == KinematicErrorCode.Ok) {
//!         body.useGravity = true;
//!         body.velocity = shot.initial_velocity;
//!     }
//! }
//! ```

pub mod error;
mod helpers;
pub mod path;
pub mod solvers;
pub mod types;

pub use error::{kinematic_get_last_error, kinematic_get_last_error_code, KinematicErrorCode};
pub use path::{kinematic_default_resolution, kinematic_draw_path, kinematic_sample_path, KinematicLineCallback};
pub use solvers::{kinematic_calculate_shoot, kinematic_predict_collision_time};
pub use types::{KinematicColor, KinematicShootData, KinematicVec3};
