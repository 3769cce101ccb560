use vello_cpu::kurbo as vk;

use crate::{
    chart::{ChartSnapshot, LayerSnapshot},
    foundation::{
        core::{BezPath, Canvas, Rgba8},
        error::{RadarError, RadarResult},
    },
    render::backend::{FrameRGBA, RenderBackend},
};

/// CPU backend powered by `vello_cpu`.
///
/// The render context and target pixmap are kept between frames of the same size.
#[derive(Default)]
pub struct CpuBackend {
    ctx: Option<vello_cpu::RenderContext>,
    pixmap: Option<vello_cpu::Pixmap>,
}

impl std::fmt::Debug for CpuBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuBackend")
            .field("has_ctx", &self.ctx.is_some())
            .finish()
    }
}

impl CpuBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> RadarResult<R>,
    ) -> RadarResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn take_pixmap(&mut self, width: u16, height: u16) -> vello_cpu::Pixmap {
        match self.pixmap.take() {
            Some(mut pm) if pm.width() == width && pm.height() == height => {
                pm.data_as_u8_slice_mut().fill(0);
                pm
            }
            _ => vello_cpu::Pixmap::new(width, height),
        }
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(skip(self, snapshot), fields(layers = snapshot.layers.len()))]
    fn render_snapshot(
        &mut self,
        snapshot: &ChartSnapshot,
        canvas: Canvas,
    ) -> RadarResult<FrameRGBA> {
        let (w, h) = surface_size(canvas)?;
        let mut pixmap = self.take_pixmap(w, h);

        self.with_ctx_mut(w, h, |ctx| {
            ctx.set_transform(vk::Affine::IDENTITY);

            ctx.set_paint(paint(snapshot.background));
            ctx.fill_rect(&vk::Rect::new(0.0, 0.0, f64::from(w), f64::from(h)));

            if snapshot.web_width > 0.0 {
                ctx.set_stroke(vk::Stroke::new(snapshot.web_width));
                ctx.set_paint(paint(snapshot.web_color));
                for ring in &snapshot.web.rings {
                    ctx.stroke_path(&bezpath_to_cpu(ring));
                }
                ctx.stroke_path(&bezpath_to_cpu(&snapshot.web.spokes));
            }

            for layer in &snapshot.layers {
                draw_layer(ctx, layer);
            }

            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        let data = pixmap.data_as_u8_slice().to_vec();
        self.pixmap = Some(pixmap);
        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data,
            premultiplied: true,
        })
    }
}

fn draw_layer(ctx: &mut vello_cpu::RenderContext, layer: &LayerSnapshot) {
    let path = bezpath_to_cpu(&layer.path);
    if let Some(fill) = layer.fill {
        ctx.set_paint(paint(fill));
        ctx.fill_path(&path);
    }
    if let Some((color, width)) = layer.stroke
        && width > 0.0
    {
        ctx.set_stroke(vk::Stroke::new(width).with_join(vk::Join::Bevel));
        ctx.set_paint(paint(color));
        ctx.stroke_path(&path);
    }
    if let Some(color) = layer.glyph_color {
        ctx.set_paint(paint(color));
        for glyph in &layer.glyphs {
            ctx.fill_path(&bezpath_to_cpu(glyph));
        }
    }
}

fn surface_size(canvas: Canvas) -> RadarResult<(u16, u16)> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(RadarError::render("canvas width/height must be > 0"));
    }
    let w = u16::try_from(canvas.width)
        .map_err(|_| RadarError::render("canvas width exceeds u16::MAX"))?;
    let h = u16::try_from(canvas.height)
        .map_err(|_| RadarError::render("canvas height exceeds u16::MAX"))?;
    Ok((w, h))
}

fn paint(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn bezpath_to_cpu(path: &BezPath) -> vk::BezPath {
    use kurbo::PathEl;

    let mut out = vk::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vk::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vk::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vk::Point::new(p1.x, p1.y),
                vk::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vk::Point::new(p1.x, p1.y),
                vk::Point::new(p2.x, p2.y),
                vk::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
