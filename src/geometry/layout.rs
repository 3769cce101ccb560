use crate::{
    foundation::core::{Point, Rect},
    geometry::polygon::outer_vertices,
};

/// Circle the chart is laid out on, plus the derived outer vertex of every parameter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartLayout {
    pub center: Point,
    pub radius: f64,
    /// One full-radius vertex per parameter.
    pub outer: Vec<Point>,
}

impl ChartLayout {
    /// Layout around an explicit center and radius.
    pub fn new(center: Point, radius: f64, parameter_count: usize) -> Self {
        Self {
            center,
            radius,
            outer: outer_vertices(parameter_count, center, radius),
        }
    }

    /// Largest circle centered in `bounds` with `margin` kept free on the short side.
    pub fn from_bounds(bounds: Rect, margin: f64, parameter_count: usize) -> Self {
        let radius = (bounds.width().min(bounds.height()) * 0.5 - margin).max(0.0);
        Self::new(bounds.center(), radius, parameter_count)
    }

    /// Number of parameters (spokes) in this layout.
    pub fn parameter_count(&self) -> usize {
        self.outer.len()
    }
}
