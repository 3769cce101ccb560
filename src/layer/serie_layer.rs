use crate::{
    animation::step::PathStep,
    decoration::glyph::DecorationLayer,
    foundation::core::{BezPath, Point, Rect},
    geometry::{layout::ChartLayout, polygon},
    model::{SeriesAnimation, Serie},
};

/// Stable handle of a layer inside its [`crate::LayerChain`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(pub u32);

impl LayerId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Animation state of one layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LayerState {
    #[default]
    Idle,
    /// A path morph is in flight.
    Animating(PathStep),
    /// The last step was cut short; the layer shows its full model path.
    Interrupted,
}

/// Renders one serie: its polygon, its decorations and its animation state.
#[derive(Clone, Debug)]
pub struct SerieLayer {
    id: LayerId,
    serie: Option<Serie>,
    path: Option<BezPath>,
    frame: Rect,
    hidden: bool,
    decoration: DecorationLayer,

    pub(crate) next: Option<LayerId>,
    pub(crate) state: LayerState,
    pub(crate) animation: SeriesAnimation,
    /// Cursor of the parameter-by-parameter reveal.
    pub(crate) last_animated_vertex_index: usize,
}

impl SerieLayer {
    pub(crate) fn new(id: LayerId, serie: Option<Serie>) -> Self {
        let mut layer = Self {
            id,
            serie: None,
            path: None,
            frame: Rect::ZERO,
            hidden: false,
            decoration: DecorationLayer::default(),
            next: None,
            state: LayerState::Idle,
            animation: SeriesAnimation::None,
            last_animated_vertex_index: 0,
        };
        layer.set_serie(serie);
        layer
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn serie(&self) -> Option<&Serie> {
        self.serie.as_ref()
    }

    /// Replace the serie. The model path is dropped until the next [`Self::generate_path`].
    pub fn set_serie(&mut self, serie: Option<Serie>) {
        self.serie = serie;
        self.path = None;
        self.decoration.sync(self.serie.as_ref());
    }

    /// Next layer in draw and animation order.
    pub fn next(&self) -> Option<LayerId> {
        self.next
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Move or resize the layer; the decoration layer follows.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.decoration.set_frame(frame, self.serie.as_ref());
    }

    /// Recompute the serie polygon for `layout`.
    ///
    /// No serie or an empty layout leaves the previous path and vertices untouched.
    pub fn generate_path(&mut self, layout: &ChartLayout) {
        let Some(serie) = self.serie.as_mut() else {
            return;
        };
        if let Some(path) = polygon::generate_path(serie, &layout.outer, layout.center) {
            self.path = Some(path);
            self.decoration.sync(self.serie.as_ref());
        }
    }

    /// Full model path, once generated.
    pub fn path(&self) -> Option<&BezPath> {
        self.path.as_ref()
    }

    /// Path as currently presented: the in-flight morph, else the model path.
    pub fn presentation_path(&self) -> Option<BezPath> {
        match &self.state {
            LayerState::Animating(step) => Some(step.current_path()),
            LayerState::Idle | LayerState::Interrupted => self.path.clone(),
        }
    }

    /// Cached serie vertices (empty without a serie or before path generation).
    pub fn vertices(&self) -> &[Point] {
        match &self.serie {
            Some(s) => &s.vertices,
            None => &[],
        }
    }

    pub fn decoration(&self) -> &DecorationLayer {
        &self.decoration
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub(crate) fn set_decoration_hidden(&mut self, hidden: bool) {
        self.decoration.set_hidden(hidden);
    }

    pub fn state(&self) -> &LayerState {
        &self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, LayerState::Animating(_))
    }

    /// Parameter-by-parameter cursor: number of vertices already revealed.
    pub fn last_animated_vertex_index(&self) -> usize {
        self.last_animated_vertex_index
    }

    /// Animation style this layer was last started with.
    pub fn animation(&self) -> SeriesAnimation {
        self.animation
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/serie_layer.rs"]
mod tests;
