use kurbo::{Circle, Shape};

use crate::{
    foundation::core::{BezPath, Point, Rect, Rgba8},
    geometry::polygon::closed_polygon,
    model::{Decoration, FillMode, Serie},
};

const GLYPH_TOLERANCE: f64 = 0.05;

/// Outline of one decoration glyph centered on `at`.
pub fn glyph_path(decoration: Decoration, at: Point) -> BezPath {
    match decoration {
        Decoration::Square(side) => {
            Rect::from_center_size(at, (side, side)).to_path(GLYPH_TOLERANCE)
        }
        Decoration::Circle(radius) => Circle::new(at, radius).to_path(GLYPH_TOLERANCE),
        Decoration::Diamond(diagonal) => {
            let h = diagonal * 0.5;
            closed_polygon(&[
                Point::new(at.x, at.y - h),
                Point::new(at.x + h, at.y),
                Point::new(at.x, at.y + h),
                Point::new(at.x - h, at.y),
            ])
        }
    }
}

/// Glyph color: the serie stroke, else its solid fill, else opaque black.
pub fn glyph_color(serie: &Serie) -> Rgba8 {
    match (serie.stroke_color, serie.fill_mode) {
        (Some(c), _) => c,
        (None, FillMode::Solid(c)) => c,
        (None, FillMode::None) => Rgba8::rgb(0, 0, 0),
    }
}

/// Per-vertex markers of one serie layer.
///
/// Glyph geometry is derived from the serie vertex cache and must be re-synced whenever the
/// owning layer frame, the serie, or its vertices change.
#[derive(Clone, Debug, Default)]
pub struct DecorationLayer {
    frame: Rect,
    glyphs: Vec<BezPath>,
    color: Option<Rgba8>,
    hidden: bool,
}

impl DecorationLayer {
    /// Recompute glyphs from `serie`. No serie or no decoration clears the layer.
    pub fn sync(&mut self, serie: Option<&Serie>) {
        self.glyphs.clear();
        self.color = None;
        let Some(serie) = serie else {
            return;
        };
        let Some(decoration) = serie.decoration else {
            return;
        };
        self.glyphs
            .extend(serie.vertices.iter().map(|&v| glyph_path(decoration, v)));
        self.color = Some(glyph_color(serie));
    }

    /// Follow the owning layer frame and re-sync when it moves or resizes.
    pub fn set_frame(&mut self, frame: Rect, serie: Option<&Serie>) {
        if self.frame != frame {
            self.frame = frame;
            self.sync(serie);
        }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn glyphs(&self) -> &[BezPath] {
        &self.glyphs
    }

    pub fn color(&self) -> Option<Rgba8> {
        self.color
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/decoration/glyph.rs"]
mod tests;
