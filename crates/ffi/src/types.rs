use kinematic_core::{LineColor, ShootData, Vec3};

/// C-compatible 3D vector.
/// Same layout as a Unity `Vector3` (three consecutive floats).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicVec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for KinematicVec3 {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<KinematicVec3> for Vec3 {
    fn from(v: KinematicVec3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

/// C-compatible RGBA colour (components in 0.0 - 1.0).
/// Same layout as a Unity `Color`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl From<LineColor> for KinematicColor {
    fn from(c: LineColor) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

impl From<KinematicColor> for LineColor {
    fn from(c: KinematicColor) -> Self {
        LineColor::rgba(c.r, c.g, c.b, c.a)
    }
}

/// FFI-friendly copy of a solved shot.
/// Keep this layout stable for C/C++/C# consumers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicShootData {
    /// Velocity the projectile must be launched with (m/s).
    pub initial_velocity: KinematicVec3,

    /// Flight time until the target is reached (s).
    pub time_to_target: f32,
}

impl From<ShootData> for KinematicShootData {
    fn from(shoot: ShootData) -> Self {
        Self {
            initial_velocity: shoot.initial_velocity().into(),
            time_to_target: shoot.time_to_target(),
        }
    }
}
