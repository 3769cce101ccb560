use super::*;

fn square_step(duration: f64) -> PathStep {
    let from = vec![Point::ORIGIN; 4];
    let to = vec![
        Point::new(-1.0, -1.0),
        Point::new(1.0, -1.0),
        Point::new(1.0, 1.0),
        Point::new(-1.0, 1.0),
    ];
    PathStep::new(from, to, duration, Ease::Linear)
}

#[test]
fn tick_reports_completion_at_duration() {
    let mut step = square_step(0.4);
    assert!(!step.tick(0.1));
    assert!(!step.tick(0.2));
    assert!(step.tick(0.1 + 1e-9));
    assert_eq!(step.progress(), 1.0);
}

#[test]
fn summed_frame_ticks_land_on_the_boundary() {
    let mut step = square_step(0.4);
    for _ in 0..11 {
        assert!(!step.tick(1.0 / 30.0));
    }
    assert!(step.tick(1.0 / 30.0));
}

#[test]
fn overshoot_is_the_time_past_the_end() {
    let mut step = square_step(0.4);
    step.tick(0.3);
    assert_eq!(step.overshoot(), 0.0);
    step.tick(0.25);
    assert!((step.overshoot() - 0.15).abs() < 1e-12);

    let mut empty = PathStep::new(Vec::new(), Vec::new(), 0.4, Ease::Linear);
    empty.tick(0.25);
    assert_eq!(empty.overshoot(), 0.25);
}

#[test]
fn current_points_follow_progress() {
    let mut step = square_step(1.0);
    assert_eq!(step.current_points(), vec![Point::ORIGIN; 4]);
    step.tick(0.5);
    assert_eq!(step.current_points()[2], Point::new(0.5, 0.5));
    step.tick(10.0);
    assert_eq!(step.current_points(), step.to_points().to_vec());
}

#[test]
fn non_positive_or_bad_dt_does_not_move_clock() {
    let mut step = square_step(1.0);
    step.tick(-3.0);
    step.tick(f64::NAN);
    assert_eq!(step.progress(), 0.0);
}

#[test]
fn zero_duration_is_finished_immediately() {
    let step = square_step(0.0);
    assert!(step.is_finished());
    assert_eq!(step.progress(), 1.0);
}

#[test]
fn current_path_is_closed_polygon() {
    let step = square_step(1.0);
    let path = step.current_path();
    assert_eq!(path.elements().len(), 5);
    assert_eq!(step.point_count(), 4);
    assert_eq!(step.from_points().len(), 4);
}
