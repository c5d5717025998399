//! Shot configuration shared by the demo and engine bindings.

use serde::{Deserialize, Serialize};

use crate::core_types::{LineColor, Vec3};
use crate::error::KinematicError;
use crate::kinematics::{
    calculate_shoot, draw_path, DebugLineSink, ShootData, TrajectorySampler, DEFAULT_RESOLUTION,
};

/// Default gravity along the vertical axis (m/s², pulling down)
pub const DEFAULT_GRAVITY: f32 = -9.81;

/// Default apex clearance above the target (m)
pub const DEFAULT_DELTA_H: f32 = 2.0;

/// Parameters shared by every shot fired with the same weapon or scene setup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotConfig {
    /// Signed gravity along the vertical axis
    pub gravity: f32,

    /// Height of the trajectory apex above the target
    pub delta_h: f32,

    /// Number of segments used when sampling the path
    pub resolution: u32,

    /// Colour of the sampled path
    pub color: LineColor,
}

impl Default for ShotConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            delta_h: DEFAULT_DELTA_H,
            resolution: DEFAULT_RESOLUTION,
            color: LineColor::GREEN,
        }
    }
}

impl ShotConfig {
    /// Check the values that do not depend on source and target.
    ///
    /// # Errors
    /// * [`KinematicError::NonFiniteInput`] for non-finite gravity or apex clearance
    /// * [`KinematicError::ZeroGravity`] if gravity is zero
    /// * [`KinematicError::ZeroResolution`] if resolution is zero
    pub fn validate(&self) -> Result<(), KinematicError> {
        KinematicError::check_finite("gravity", self.gravity)?;
        KinematicError::check_finite("delta_h", self.delta_h)?;
        if self.gravity == 0.0 {
            return Err(KinematicError::ZeroGravity);
        }
        if self.resolution == 0 {
            return Err(KinematicError::ZeroResolution);
        }
        Ok(())
    }

    /// Solve a shot with this configuration.
    ///
    /// # Errors
    /// See [`calculate_shoot`].
    pub fn shoot(&self, source: Vec3, target: Vec3) -> Result<ShootData, KinematicError> {
        calculate_shoot(source, target, self.gravity, self.delta_h)
    }

    /// Sampler for the shot from `source` to `target`.
    ///
    /// # Errors
    /// See [`TrajectorySampler::solve`].
    pub fn sampler(&self, source: Vec3, target: Vec3) -> Result<TrajectorySampler, KinematicError> {
        TrajectorySampler::solve(source, target, self.gravity, self.delta_h, self.resolution)
    }

    /// Solve and draw the shot into `sink`.
    ///
    /// # Errors
    /// See [`draw_path`].
    pub fn draw_path(
        &self,
        source: Vec3,
        target: Vec3,
        sink: &mut impl DebugLineSink,
    ) -> Result<ShootData, KinematicError> {
        draw_path(
            source,
            target,
            self.gravity,
            self.delta_h,
            self.resolution,
            self.color,
            sink,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::LineRecorder;

    #[test]
    fn test_default_config() {
        let cfg = ShotConfig::default();
        assert_eq!(cfg.gravity, -9.81);
        assert_eq!(cfg.resolution, 30);
        assert_eq!(cfg.color, LineColor::GREEN);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cfg = ShotConfig {
            resolution: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(KinematicError::ZeroResolution));

        let cfg = ShotConfig {
            gravity: 0.0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(KinematicError::ZeroGravity));

        let cfg = ShotConfig {
            delta_h: f32::NAN,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(KinematicError::NonFiniteInput { name: "delta_h" })
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: ShotConfig = serde_json::from_str(r#"{ "delta_h": 5.0, "resolution": 12 }"#).unwrap();
        assert_eq!(cfg.delta_h, 5.0);
        assert_eq!(cfg.resolution, 12);
        assert_eq!(cfg.gravity, DEFAULT_GRAVITY);
    }

    #[test]
    fn test_draw_path_uses_config_resolution_and_color() {
        let cfg = ShotConfig {
            resolution: 7,
            color: LineColor::RED,
            ..Default::default()
        };
        let mut recorder = LineRecorder::new();
        let shoot = cfg
            .draw_path(Vec3::zeros(), Vec3::new(4.0, 0.0, 4.0), &mut recorder)
            .unwrap();

        assert_eq!(recorder.len(), 7);
        assert!(recorder.lines().iter().all(|l| l.color == LineColor::RED));
        assert_eq!(Ok(shoot), cfg.shoot(Vec3::zeros(), Vec3::new(4.0, 0.0, 4.0)));
        assert_eq!(
            cfg.sampler(Vec3::zeros(), Vec3::new(4.0, 0.0, 4.0)).unwrap().resolution(),
            7
        );
    }
}
