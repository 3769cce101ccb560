use crate::{
    animation::ease::Ease,
    foundation::core::{BezPath, Point},
    geometry::polygon::{closed_polygon, lerp_points},
};

// Slack for clocks built from summed frame durations (12 * 1/30 falls just short of 0.4).
const TIME_EPSILON: f64 = 1e-9;

/// One path morph between two polygons with the same vertex count.
#[derive(Clone, Debug, PartialEq)]
pub struct PathStep {
    from: Vec<Point>,
    to: Vec<Point>,
    duration: f64, // seconds
    elapsed: f64,
    ease: Ease,
}

impl PathStep {
    pub fn new(from: Vec<Point>, to: Vec<Point>, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            ease,
        }
    }

    /// Advance the step clock. Returns `true` once the step has reached its end.
    pub fn tick(&mut self, dt: f64) -> bool {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        !self.duration.is_finite() || self.elapsed + TIME_EPSILON >= self.duration
    }

    /// Clock time past the end of the step, handed to the step that follows it.
    ///
    /// A step without points takes no time, so all of its elapsed time carries over.
    pub fn overshoot(&self) -> f64 {
        if self.point_count() == 0 || !self.duration.is_finite() {
            return self.elapsed;
        }
        (self.elapsed - self.duration).max(0.0)
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 || !self.duration.is_finite() {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Vertex count of the morphed polygon.
    pub fn point_count(&self) -> usize {
        self.from.len().min(self.to.len())
    }

    /// Polygon vertices at the current eased progress.
    pub fn current_points(&self) -> Vec<Point> {
        lerp_points(&self.from, &self.to, self.ease.apply(self.progress()))
    }

    /// Closed path at the current eased progress.
    pub fn current_path(&self) -> BezPath {
        closed_polygon(&self.current_points())
    }

    pub fn from_points(&self) -> &[Point] {
        &self.from
    }

    pub fn to_points(&self) -> &[Point] {
        &self.to
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/step.rs"]
mod tests;
