use crate::{
    animation::{
        ease::Ease,
        sequencer::{ChainEvent, Sequencer},
    },
    foundation::core::{BezPath, Rect, Rgba8},
    geometry::{
        layout::ChartLayout,
        web::{WebGeometry, web_geometry},
    },
    layer::{
        chain::LayerChain,
        serie_layer::{LayerId, SerieLayer},
    },
    model::{ChartModel, FillMode, Parameter, Serie, SeriesAnimation},
};

/// Visual configuration of the chart.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Space kept between the outer polygon and the short side of the bounds.
    pub margin: f64,
    /// Number of web polygons; the last one is the outer polygon.
    pub gradations: usize,
    pub web_color: Rgba8,
    pub web_width: f64,
    pub background: Rgba8,
    /// Timing curve of every animation step.
    pub ease: Ease,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            margin: 24.0,
            gradations: 4,
            web_color: Rgba8::rgba(255, 255, 255, 160),
            web_width: 1.0,
            background: Rgba8::rgba(0, 200, 100, 150),
            ease: Ease::InOut,
        }
    }
}

/// A radar chart: parameters, one layer per serie, and the animation sequencer driving them.
#[derive(Debug)]
pub struct RadarChart {
    style: ChartStyle,
    parameters: Vec<Parameter>,
    bounds: Rect,
    layout: ChartLayout,
    chain: LayerChain,
    sequencer: Sequencer,
}

impl Default for RadarChart {
    fn default() -> Self {
        Self::new(ChartStyle::default())
    }
}

impl RadarChart {
    pub fn new(style: ChartStyle) -> Self {
        let sequencer = Sequencer::new(style.ease);
        Self {
            style,
            parameters: Vec::new(),
            bounds: Rect::ZERO,
            layout: ChartLayout::default(),
            chain: LayerChain::default(),
            sequencer,
        }
    }

    /// Chart laid out in `bounds` with the parameters and series of `model`.
    pub fn with_model(model: ChartModel, style: ChartStyle, bounds: Rect) -> Self {
        let mut chart = Self::new(style);
        chart.bounds = bounds;
        chart.set_parameters(model.parameters);
        chart.set_series(model.series);
        chart
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn chain(&self) -> &LayerChain {
        &self.chain
    }

    /// Layers in draw order.
    pub fn layers(&self) -> impl Iterator<Item = &SerieLayer> {
        self.chain.iter()
    }

    /// Replace the parameters and lay every serie out again.
    pub fn set_parameters(&mut self, parameters: Vec<Parameter>) {
        self.parameters = parameters;
        self.relayout();
    }

    /// Replace the series: rebuilds the layer chain and regenerates every path.
    ///
    /// An animation still in flight is interrupted first.
    #[tracing::instrument(skip(self, series), fields(series = series.len()))]
    pub fn set_series(&mut self, series: Vec<Serie>) {
        if self.chain.any_animating() {
            self.sequencer.interrupt(&mut self.chain);
        }
        self.chain = LayerChain::from_series(series);
        self.relayout();
    }

    /// Bounds changed: recompute outer vertices, paths and decoration frames.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.relayout();
    }

    fn relayout(&mut self) {
        self.layout =
            ChartLayout::from_bounds(self.bounds, self.style.margin, self.parameters.len());
        for layer in self.chain.layers_mut() {
            layer.generate_path(&self.layout);
            layer.set_frame(self.bounds);
        }
        tracing::debug!(
            parameters = self.parameters.len(),
            radius = self.layout.radius,
            "chart laid out"
        );
    }

    /// Start `mode`, preempting any animation in flight.
    pub fn animate(&mut self, mode: SeriesAnimation) {
        self.sequencer
            .start(&mut self.chain, self.layout.center, mode);
    }

    /// Advance the animation clock by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.sequencer
            .advance(&mut self.chain, self.layout.center, dt);
    }

    /// External "step finished" notification for `layer`.
    pub fn complete_step(&mut self, layer: LayerId) {
        self.sequencer
            .complete_step(&mut self.chain, self.layout.center, layer);
    }

    /// External "step cut short" notification for `layer`.
    pub fn interrupt_step(&mut self, layer: LayerId) {
        self.sequencer.interrupt_step(&mut self.chain, layer);
    }

    /// Stop everything and show the full chart.
    pub fn interrupt(&mut self) {
        self.sequencer.interrupt(&mut self.chain);
    }

    pub fn is_animating(&self) -> bool {
        self.sequencer.is_running()
    }

    pub fn drain_events(&mut self) -> Vec<ChainEvent> {
        self.sequencer.drain_events()
    }

    /// Everything a renderer needs to draw the current state, in paint order.
    pub fn snapshot(&self) -> ChartSnapshot {
        let layers = self
            .chain
            .iter()
            .filter(|layer| !layer.is_hidden())
            .filter_map(|layer| {
                let serie = layer.serie()?;
                let path = layer.presentation_path()?;
                let fill = match serie.fill_mode {
                    FillMode::None => None,
                    FillMode::Solid(c) => Some(c),
                };
                let decoration = layer.decoration();
                let glyphs = if decoration.is_hidden() {
                    Vec::new()
                } else {
                    decoration.glyphs().to_vec()
                };
                Some(LayerSnapshot {
                    id: layer.id(),
                    path,
                    fill,
                    stroke: serie.stroke_color.map(|c| (c, serie.stroke_width)),
                    glyphs,
                    glyph_color: decoration.color(),
                })
            })
            .collect();

        ChartSnapshot {
            background: self.style.background,
            web: web_geometry(&self.layout, self.style.gradations),
            web_color: self.style.web_color,
            web_width: self.style.web_width,
            layers,
        }
    }
}

/// Paint-ready view of a chart at one instant.
#[derive(Clone, Debug)]
pub struct ChartSnapshot {
    pub background: Rgba8,
    pub web: WebGeometry,
    pub web_color: Rgba8,
    pub web_width: f64,
    /// Visible layers in draw order.
    pub layers: Vec<LayerSnapshot>,
}

/// One visible serie layer.
#[derive(Clone, Debug)]
pub struct LayerSnapshot {
    pub id: LayerId,
    pub path: BezPath,
    pub fill: Option<Rgba8>,
    /// Stroke color and width.
    pub stroke: Option<(Rgba8, f64)>,
    /// Decoration glyphs; empty while decorations are hidden.
    pub glyphs: Vec<BezPath>,
    pub glyph_color: Option<Rgba8>,
}

#[cfg(test)]
#[path = "../tests/unit/chart.rs"]
mod tests;
