//! Closed-form kinematic solvers
//!
//! - [`predict_collision_time`]: 1-D chase of two constantly accelerating bodies
//! - [`calculate_shoot`]: ballistic launch velocity for a source/target pair
//! - [`TrajectorySampler`] / [`draw_path`]: debug sampling of a solved shot
//!
//! All functions are pure and keep no state between calls.

pub mod collision_time;
pub mod projectile;
pub mod trajectory;

pub use collision_time::{position_at, predict_collision_time};
pub use projectile::{calculate_shoot, calculate_shoots, ShootData, ShotRequest};
pub use trajectory::{
    draw_path, DebugLine, DebugLineSink, LineRecorder, NullSink, PathSegment, Segments,
    TrajectorySampler, DEFAULT_RESOLUTION,
};
