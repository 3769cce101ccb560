use super::*;

use kurbo::Shape;

use crate::{foundation::core::Point, model::Decoration};

fn params(names: &[&str]) -> Vec<Parameter> {
    names.iter().map(|n| Parameter::new(*n)).collect()
}

fn serie(values: &[f64]) -> Serie {
    Serie {
        percentage_values: values.to_vec(),
        stroke_color: Some(Rgba8::rgb(0, 0, 255)),
        stroke_width: 4.0,
        fill_mode: FillMode::Solid(Rgba8::rgba(25, 25, 179, 179)),
        decoration: Some(Decoration::Square(8.0)),
        ..Serie::default()
    }
}

fn chart() -> RadarChart {
    let model = ChartModel {
        parameters: params(&["HP", "MP", "STR", "DF", "MGC"]),
        series: vec![
            serie(&[0.9, 0.5, 0.6, 0.2, 0.9]),
            serie(&[0.9, 0.1, 0.2, 0.9, 0.3]),
        ],
    };
    RadarChart::with_model(
        model,
        ChartStyle {
            margin: 0.0,
            ..ChartStyle::default()
        },
        Rect::new(0.0, 0.0, 200.0, 200.0),
    )
}

#[test]
fn with_model_lays_out_every_layer() {
    let chart = chart();
    assert_eq!(chart.layout().center, Point::new(100.0, 100.0));
    assert_eq!(chart.layout().radius, 100.0);
    assert_eq!(chart.layout().outer.len(), 5);
    for layer in chart.layers() {
        assert_eq!(layer.vertices().len(), 5);
        assert_eq!(layer.frame(), chart.bounds());
        assert_eq!(layer.decoration().glyphs().len(), 5);
    }
}

#[test]
fn bounds_change_regenerates_vertices_and_glyphs() {
    let mut chart = chart();
    let before = chart.layers().next().unwrap().vertices().to_vec();
    chart.set_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));
    let layer = chart.layers().next().unwrap();
    assert_ne!(layer.vertices(), before.as_slice());
    let top = layer.vertices()[0];
    assert!((top - Point::new(50.0, 50.0 - 45.0)).hypot() < 1e-9);
    let glyph_center = layer.decoration().glyphs()[0].control_box().center();
    assert!((glyph_center - top).hypot() < 1e-9);
}

#[test]
fn parameter_change_resizes_vertex_sets() {
    let mut chart = chart();
    chart.set_parameters(params(&["a", "b", "c"]));
    for layer in chart.layers() {
        assert_eq!(layer.vertices().len(), 3);
    }
}

#[test]
fn zero_parameters_keep_previous_rendering() {
    let mut chart = chart();
    let before: Vec<_> = chart.layers().map(|l| l.path().cloned()).collect();
    chart.set_parameters(Vec::new());
    let after: Vec<_> = chart.layers().map(|l| l.path().cloned()).collect();
    assert_eq!(before, after);
    assert!(chart.snapshot().web.rings.is_empty());
}

#[test]
fn snapshot_hides_layers_and_glyphs_during_reveal() {
    let mut chart = chart();
    chart.animate(SeriesAnimation::ScaleOneByOne(0.4));
    let snap = chart.snapshot();
    assert_eq!(snap.layers.len(), 1);
    assert!(snap.layers[0].glyphs.is_empty());

    while chart.is_animating() {
        chart.advance(0.05);
    }
    let snap = chart.snapshot();
    assert_eq!(snap.layers.len(), 2);
    assert!(snap.layers.iter().all(|l| l.glyphs.len() == 5));
    assert_eq!(snap.layers[0].stroke, Some((Rgba8::rgb(0, 0, 255), 4.0)));
    assert_eq!(snap.web.rings.len(), 4);
}

#[test]
fn set_series_during_animation_stops_it() {
    let mut chart = chart();
    chart.animate(SeriesAnimation::ParameterByParameter(0.4));
    chart.advance(0.1);
    chart.set_series(vec![serie(&[0.5; 5])]);
    assert!(!chart.is_animating());
    assert_eq!(chart.chain().len(), 1);
    let snap = chart.snapshot();
    assert_eq!(snap.layers.len(), 1);
    assert_eq!(snap.layers[0].glyphs.len(), 5);
}

#[test]
fn interrupt_and_external_events_reach_the_sequencer() {
    let mut chart = chart();
    chart.animate(SeriesAnimation::ScaleOneByOne(0.4));
    chart.complete_step(LayerId(0));
    assert!(chart.chain().get(LayerId(1)).unwrap().is_animating());
    chart.interrupt_step(LayerId(1));
    assert!(!chart.is_animating());
    let events = chart.drain_events();
    assert!(events.contains(&ChainEvent::Interrupted { from: LayerId(1) }));
    assert_eq!(events.last(), Some(&ChainEvent::ChainIdle));

    chart.animate(SeriesAnimation::ScaleAll(0.4));
    chart.interrupt();
    assert!(chart.snapshot().layers.iter().all(|l| !l.glyphs.is_empty()));
}

#[test]
fn serie_without_fill_or_stroke_is_still_listed() {
    let mut chart = chart();
    chart.set_series(vec![Serie {
        percentage_values: vec![0.5; 5],
        ..Serie::default()
    }]);
    let snap = chart.snapshot();
    assert_eq!(snap.layers.len(), 1);
    assert!(snap.layers[0].fill.is_none());
    assert!(snap.layers[0].stroke.is_none());
    assert!(snap.layers[0].glyphs.is_empty());
}
