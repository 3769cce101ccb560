use std::f64::consts::{FRAC_PI_2, TAU};

use crate::{
    foundation::core::{BezPath, Point},
    model::Serie,
};

/// Full-radius vertex of every parameter spoke.
///
/// Index `i` of `n` sits at angle `-π/2 + 2π·i/n`: the first spoke points straight up and the
/// others follow clockwise in y-down screen space. Returns an empty list for `n == 0`.
pub fn outer_vertices(parameter_count: usize, center: Point, radius: f64) -> Vec<Point> {
    if parameter_count == 0 {
        return Vec::new();
    }
    let n = parameter_count as f64;
    (0..parameter_count)
        .map(|i| {
            let angle = -FRAC_PI_2 + TAU * (i as f64) / n;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Point at fraction `value` along the segment `center -> outer`. Not clamped.
pub fn scaled_vertex(center: Point, outer: Point, value: f64) -> Point {
    center + (outer - center) * value
}

/// Closed polygon through `points` in order. Empty input yields an empty path.
pub fn closed_polygon(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path.close_path();
    path
}

/// Build the serie polygon and cache its vertices on the serie.
///
/// Returns `None` (and leaves the cached vertices untouched) when there are no outer vertices.
pub fn generate_path(serie: &mut Serie, outer: &[Point], center: Point) -> Option<BezPath> {
    if outer.is_empty() {
        return None;
    }
    let vertices: Vec<Point> = outer
        .iter()
        .enumerate()
        .map(|(i, &o)| scaled_vertex(center, o, serie.value_at(i)))
        .collect();
    let path = closed_polygon(&vertices);
    serie.vertices = vertices;
    Some(path)
}

/// Degenerate polygon: `count` copies of `center`.
pub fn collapsed(count: usize, center: Point) -> Vec<Point> {
    vec![center; count]
}

/// Actual vertex for indices below `revealed`, `center` for the rest.
pub fn reveal_until(vertices: &[Point], center: Point, revealed: usize) -> Vec<Point> {
    vertices
        .iter()
        .enumerate()
        .map(|(i, &v)| if i < revealed { v } else { center })
        .collect()
}

/// Pointwise interpolation between two polygons of equal length.
///
/// Extra points of the longer input are dropped.
pub fn lerp_points(from: &[Point], to: &[Point], t: f64) -> Vec<Point> {
    from.iter().zip(to).map(|(a, b)| a.lerp(*b, t)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/polygon.rs"]
mod tests;
