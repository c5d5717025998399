//! Trajectory sampling for debug visualisation
//!
//! Walks a solved shot at fixed time steps and produces the line segments a
//! renderer would draw. Drawing itself goes through [`DebugLineSink`], so the
//! sampler has no dependency on any rendering system.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::projectile::{calculate_shoot, ShootData};
use crate::core_types::{LineColor, Vec3};
use crate::error::KinematicError;

/// Number of segments a path is split into unless configured otherwise
pub const DEFAULT_RESOLUTION: u32 = 30;

/// Straight piece of a sampled trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub start: Vec3,
    pub end: Vec3,
}

impl PathSegment {
    pub fn length(&self) -> f32 {
        (self.end - self.start).norm()
    }
}

/// Receiver of debug lines.
///
/// Fire-and-forget: segments arrive in path order and nothing is returned.
pub trait DebugLineSink {
    fn draw_line(&mut self, start: Vec3, end: Vec3, color: LineColor);
}

/// Sink that discards every line, for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DebugLineSink for NullSink {
    fn draw_line(&mut self, _start: Vec3, _end: Vec3, _color: LineColor) {}
}

/// One line as handed to a sink
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: LineColor,
}

/// Sink that records lines in emission order.
#[derive(Debug, Clone, Default)]
pub struct LineRecorder {
    lines: Vec<DebugLine>,
}

impl LineRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[DebugLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<DebugLine> {
        self.lines
    }
}

impl DebugLineSink for LineRecorder {
    fn draw_line(&mut self, start: Vec3, end: Vec3, color: LineColor) {
        self.lines.push(DebugLine { start, end, color });
    }
}

impl<F> DebugLineSink for F
where
    F: FnMut(Vec3, Vec3, LineColor),
{
    fn draw_line(&mut self, start: Vec3, end: Vec3, color: LineColor) {
        self(start, end, color);
    }
}

/// Samples the flight path of a solved shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySampler {
    source: Vec3,
    gravity: f32,
    shoot: ShootData,
    resolution: u32,
}

impl TrajectorySampler {
    /// Sampler over an already solved shot.
    ///
    /// # Errors
    /// * [`KinematicError::ZeroResolution`] if `resolution == 0`
    /// * [`KinematicError::NonFiniteInput`] if `source`, `gravity` or the shot
    ///   holds a `NaN` or infinite value
    /// * [`KinematicError::ZeroGravity`] if `gravity == 0`
    pub fn new(
        source: Vec3,
        gravity: f32,
        shoot: ShootData,
        resolution: u32,
    ) -> Result<Self, KinematicError> {
        if resolution == 0 {
            return Err(KinematicError::ZeroResolution);
        }
        if !source.iter().all(|c| c.is_finite()) {
            return Err(KinematicError::NonFiniteInput { name: "source" });
        }
        KinematicError::check_finite("gravity", gravity)?;
        if gravity == 0.0 {
            return Err(KinematicError::ZeroGravity);
        }
        let v0 = shoot.initial_velocity();
        if !v0.iter().all(|c| c.is_finite()) || !shoot.time_to_target().is_finite() {
            return Err(KinematicError::NonFiniteInput { name: "shoot" });
        }

        Ok(Self {
            source,
            gravity,
            shoot,
            resolution,
        })
    }

    /// Solve the shot from `source` to `target` and sample it.
    ///
    /// # Errors
    /// Any error of [`calculate_shoot`], or [`KinematicError::ZeroResolution`].
    pub fn solve(
        source: Vec3,
        target: Vec3,
        gravity: f32,
        delta_h: f32,
        resolution: u32,
    ) -> Result<Self, KinematicError> {
        if resolution == 0 {
            return Err(KinematicError::ZeroResolution);
        }
        let shoot = calculate_shoot(source, target, gravity, delta_h)?;
        Self::new(source, gravity, shoot, resolution)
    }

    pub fn shoot(&self) -> ShootData {
        self.shoot
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// World position `t` seconds after launch
    pub fn position_at(&self, t: f32) -> Vec3 {
        self.source + self.shoot.displacement_at(self.gravity, t)
    }

    /// Sampled point `i` of `resolution`, point 0 being the source.
    fn point(&self, i: u32) -> Vec3 {
        if i == 0 {
            return self.source;
        }
        let t = (i as f32 / self.resolution as f32) * self.shoot.time_to_target();
        self.position_at(t)
    }

    /// The `resolution + 1` sampled points, starting at the source.
    pub fn points(&self) -> impl Iterator<Item = Vec3> + Clone + '_ {
        (0..=self.resolution).map(move |i| self.point(i))
    }

    /// Lazy iterator over the `resolution` segments of the path.
    ///
    /// The iterator borrows nothing and can be cloned to restart it.
    pub fn segments(&self) -> Segments {
        Segments {
            sampler: *self,
            previous: self.source,
            next: 1,
        }
    }

    /// Emit every segment to `sink` in path order.
    pub fn draw(&self, sink: &mut impl DebugLineSink, color: LineColor) {
        trace!(segments = self.resolution, "Drawing trajectory");
        for segment in self.segments() {
            sink.draw_line(segment.start, segment.end, color);
        }
    }
}

/// Iterator returned by [`TrajectorySampler::segments`]
#[derive(Debug, Clone)]
pub struct Segments {
    sampler: TrajectorySampler,
    previous: Vec3,
    next: u32,
}

impl Iterator for Segments {
    type Item = PathSegment;

    fn next(&mut self) -> Option<PathSegment> {
        if self.next > self.sampler.resolution {
            return None;
        }
        let end = self.sampler.point(self.next);
        let segment = PathSegment {
            start: self.previous,
            end,
        };
        self.previous = end;
        self.next += 1;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining =
            (self.sampler.resolution as usize + 1).saturating_sub(self.next as usize);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Segments {}

impl FusedIterator for Segments {}

/// Solve a shot and draw its path into `sink`.
///
/// # Returns
/// The solved [`ShootData`], so the caller can fire the shot it just drew.
///
/// # Errors
/// Any error of [`TrajectorySampler::solve`]; nothing is drawn on error.
pub fn draw_path(
    source: Vec3,
    target: Vec3,
    gravity: f32,
    delta_h: f32,
    resolution: u32,
    color: LineColor,
    sink: &mut impl DebugLineSink,
) -> Result<ShootData, KinematicError> {
    let sampler = TrajectorySampler::solve(source, target, gravity, delta_h, resolution)?;
    sampler.draw(sink, color);
    Ok(sampler.shoot())
}
