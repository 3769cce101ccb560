use crate::{
    foundation::core::BezPath,
    geometry::{
        layout::ChartLayout,
        polygon::{closed_polygon, scaled_vertex},
    },
};

/// Static background of the chart: gradation polygons and spokes.
#[derive(Clone, Debug, Default)]
pub struct WebGeometry {
    /// Ring `k` (1-based) of `gradations` sits at fraction `k / gradations`; the last is the
    /// outer polygon.
    pub rings: Vec<BezPath>,
    /// One segment from the center to each outer vertex.
    pub spokes: BezPath,
}

/// Build the web for `layout`. Empty when the layout has no parameters.
pub fn web_geometry(layout: &ChartLayout, gradations: usize) -> WebGeometry {
    if layout.outer.is_empty() {
        return WebGeometry::default();
    }

    let rings = (1..=gradations)
        .map(|k| {
            let f = k as f64 / gradations as f64;
            let pts: Vec<_> = layout
                .outer
                .iter()
                .map(|&o| scaled_vertex(layout.center, o, f))
                .collect();
            closed_polygon(&pts)
        })
        .collect();

    let mut spokes = BezPath::new();
    for &o in &layout.outer {
        spokes.move_to(layout.center);
        spokes.line_to(o);
    }

    WebGeometry { rings, spokes }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/web.rs"]
mod tests;
