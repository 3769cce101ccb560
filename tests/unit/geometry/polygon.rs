use super::*;

use kurbo::PathEl;

const EPS: f64 = 1e-9;

fn near(a: Point, b: Point) -> bool {
    (a - b).hypot() < EPS
}

fn serie(values: &[f64]) -> Serie {
    Serie {
        percentage_values: values.to_vec(),
        ..Serie::default()
    }
}

#[test]
fn outer_vertices_are_on_circle_with_even_spacing() {
    let center = Point::new(10.0, -4.0);
    for n in 1..=12 {
        let pts = outer_vertices(n, center, 50.0);
        assert_eq!(pts.len(), n);
        assert!(near(pts[0], Point::new(10.0, -54.0)), "first spoke points up");
        for (i, p) in pts.iter().enumerate() {
            assert!(((*p - center).hypot() - 50.0).abs() < EPS);
            let expected = -std::f64::consts::FRAC_PI_2 + std::f64::consts::TAU * i as f64 / n as f64;
            let got = (*p - center).atan2();
            let diff = (got - expected).rem_euclid(std::f64::consts::TAU);
            assert!(diff < 1e-9 || (std::f64::consts::TAU - diff) < 1e-9);
        }
    }
}

#[test]
fn outer_vertices_empty_for_zero_parameters() {
    assert!(outer_vertices(0, Point::ORIGIN, 100.0).is_empty());
}

#[test]
fn five_parameter_scenario() {
    let outer = outer_vertices(5, Point::ORIGIN, 100.0);
    for (p, deg) in outer.iter().zip([-90.0f64, -18.0, 54.0, 126.0, 198.0]) {
        let rad = deg.to_radians();
        assert!(near(*p, Point::new(100.0 * rad.cos(), 100.0 * rad.sin())));
    }

    let mut s = serie(&[0.9, 0.5, 0.6, 0.2, 0.9]);
    let path = generate_path(&mut s, &outer, Point::ORIGIN).unwrap();
    assert_eq!(s.vertices.len(), 5);
    for ((v, o), pct) in s.vertices.iter().zip(&outer).zip([0.9, 0.5, 0.6, 0.2, 0.9]) {
        assert!(((v.to_vec2().hypot()) - 100.0 * pct).abs() < 1e-9);
        assert!(near(*v, Point::new(o.x * pct, o.y * pct)));
    }

    let els: Vec<PathEl> = path.elements().to_vec();
    assert_eq!(els.len(), 6);
    assert!(matches!(els[0], PathEl::MoveTo(p) if near(p, s.vertices[0])));
    assert!(matches!(els[4], PathEl::LineTo(p) if near(p, s.vertices[4])));
    assert!(matches!(els[5], PathEl::ClosePath));
}

#[test]
fn vertex_lies_on_segment_at_fraction() {
    let center = Point::new(3.0, 4.0);
    let outer = outer_vertices(1, center, 20.0);
    for v in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let mut s = serie(&[v]);
        generate_path(&mut s, &outer, center).unwrap();
        let expected = Point::new(
            center.x + (outer[0].x - center.x) * v,
            center.y + (outer[0].y - center.y) * v,
        );
        assert!(near(s.vertices[0], expected));
    }

    let mut zero = serie(&[0.0]);
    generate_path(&mut zero, &outer, center).unwrap();
    assert!(near(zero.vertices[0], center));

    let mut full = serie(&[1.0]);
    generate_path(&mut full, &outer, center).unwrap();
    assert!(near(full.vertices[0], outer[0]));
}

#[test]
fn generate_path_is_idempotent() {
    let outer = outer_vertices(6, Point::new(50.0, 50.0), 40.0);
    let mut s = serie(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
    let a = generate_path(&mut s, &outer, Point::new(50.0, 50.0)).unwrap();
    let first = s.vertices.clone();
    let b = generate_path(&mut s, &outer, Point::new(50.0, 50.0)).unwrap();
    assert_eq!(first, s.vertices);
    assert_eq!(a, b);
}

#[test]
fn short_value_list_collapses_missing_vertices_to_center() {
    let center = Point::new(1.0, 1.0);
    let outer = outer_vertices(4, center, 10.0);
    let mut s = serie(&[1.0, 0.5]);
    generate_path(&mut s, &outer, center).unwrap();
    assert_eq!(s.vertices.len(), 4);
    assert!(near(s.vertices[2], center));
    assert!(near(s.vertices[3], center));
}

#[test]
fn out_of_range_values_are_not_clamped() {
    let outer = outer_vertices(2, Point::ORIGIN, 10.0);
    let mut s = serie(&[1.5, -0.5]);
    generate_path(&mut s, &outer, Point::ORIGIN).unwrap();
    assert!(near(s.vertices[0], Point::new(0.0, -15.0)));
    assert!(near(s.vertices[1], Point::new(0.0, -5.0)));
}

#[test]
fn empty_outer_vertices_is_a_no_op() {
    let mut s = serie(&[0.5]);
    s.vertices = vec![Point::new(7.0, 7.0)];
    assert!(generate_path(&mut s, &[], Point::ORIGIN).is_none());
    assert_eq!(s.vertices, vec![Point::new(7.0, 7.0)]);
}

#[test]
fn reveal_and_collapse_shapes() {
    let verts = [Point::new(1.0, 0.0), Point::new(2.0, 0.0), Point::new(3.0, 0.0)];
    let c = Point::ORIGIN;
    assert_eq!(collapsed(3, c), vec![c, c, c]);
    assert_eq!(reveal_until(&verts, c, 0), vec![c, c, c]);
    assert_eq!(reveal_until(&verts, c, 2), vec![verts[0], verts[1], c]);
    assert_eq!(reveal_until(&verts, c, 9), verts.to_vec());
}

#[test]
fn lerp_points_midpoint() {
    let a = [Point::ORIGIN, Point::new(2.0, 2.0)];
    let b = [Point::new(2.0, 0.0), Point::new(4.0, 4.0)];
    assert_eq!(
        lerp_points(&a, &b, 0.5),
        vec![Point::new(1.0, 0.0), Point::new(3.0, 3.0)]
    );
}

#[test]
fn closed_polygon_of_nothing_is_empty() {
    assert!(closed_polygon(&[]).elements().is_empty());
}

#[test]
fn layout_from_bounds_uses_short_side_and_margin() {
    use crate::geometry::layout::ChartLayout;
    use kurbo::Rect;

    let layout = ChartLayout::from_bounds(Rect::new(0.0, 0.0, 200.0, 100.0), 10.0, 3);
    assert_eq!(layout.center, Point::new(100.0, 50.0));
    assert_eq!(layout.radius, 40.0);
    assert_eq!(layout.parameter_count(), 3);

    let tiny = ChartLayout::from_bounds(Rect::new(0.0, 0.0, 4.0, 4.0), 10.0, 3);
    assert_eq!(tiny.radius, 0.0);
}
