//! Kinematic Helpers Core Library
//!
//! Closed-form kinematics for game scripting:
//! - Collision time of two bodies chasing each other along one axis
//! - Ballistic launch velocity and flight time from a source to a target
//! - Sampling of a solved shot into debug line segments
//!
//! plus a small reader for comma separated resource tables.
//!
//! Every solver is a pure function. Inputs outside the physically valid
//! domain are rejected with a [`KinematicError`] instead of producing `NaN`.

// Core types and utilities
pub mod core_types;

pub mod config;
pub mod error;
pub mod io;
pub mod kinematics;

// Re-export core types
pub use core_types::{LineColor, Vec3};

pub use config::ShotConfig;
pub use error::{KinematicError, TrajectoryIssue};

// Re-export solvers
pub use kinematics::{
    calculate_shoot, calculate_shoots, draw_path, predict_collision_time, DebugLineSink,
    LineRecorder, NullSink, PathSegment, ShootData, ShotRequest, TrajectorySampler,
    DEFAULT_RESOLUTION,
};

pub use io::{read_csv_resource, read_csv_str, CsvError, CsvRow, CsvValue, DirectoryResources};
