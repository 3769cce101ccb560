use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn endpoints_are_fixed_for_every_curve() {
    for ease in [
        Ease::Linear,
        Ease::InOut,
        Ease::CubicBezier {
            x1: 0.25,
            y1: 0.1,
            x2: 0.25,
            y2: 1.0,
        },
    ] {
        assert!(close(ease.apply(0.0), 0.0), "{ease:?}");
        assert!(close(ease.apply(1.0), 1.0), "{ease:?}");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::Linear.apply(-3.0), 0.0);
    assert_eq!(Ease::Linear.apply(7.0), 1.0);
}

#[test]
fn standard_ease_in_out_is_symmetric_and_monotonic() {
    assert!(close(Ease::InOut.apply(0.5), 0.5));
    assert!(close(
        Ease::InOut.apply(0.2) + Ease::InOut.apply(0.8),
        1.0
    ));
    assert!(Ease::InOut.apply(0.1) < 0.1);

    let mut prev = 0.0;
    for i in 1..=100 {
        let v = Ease::InOut.apply(f64::from(i) / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn linear_bezier_matches_identity() {
    let ease = Ease::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };
    for t in [0.1, 0.33, 0.5, 0.9] {
        assert!(close(ease.apply(t), t));
    }
}

#[test]
fn default_is_standard_in_out() {
    assert_eq!(Ease::default(), Ease::InOut);
}
