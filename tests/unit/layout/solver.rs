use super::*;

fn req(target: (f64, f64, f64, f64), label: (f64, f64), viewport: (f64, f64)) -> PlacementRequest {
    let (x, y, w, h) = target;
    PlacementRequest {
        target: Rect::new(x, y, x + w, y + h),
        label: Size::new(label.0, label.1),
        viewport: Size::new(viewport.0, viewport.1),
    }
}

fn label_rect(p: &Placement, r: &PlacementRequest) -> Rect {
    Rect::from_origin_size(p.origin, r.label)
}

#[test]
fn wide_target_prefers_right() {
    let r = req((20.0, 20.0, 60.0, 20.0), (40.0, 20.0), (400.0, 800.0));
    let p = solve_placement(&r).unwrap();
    assert_eq!(p.side, Side::Right);
    assert_eq!(p.origin, Point::new(80.0, 20.0));
    assert_eq!(p.transitions, 1);
}

#[test]
fn full_width_target_falls_through_to_below() {
    let r = req((0.0, 0.0, 400.0, 30.0), (100.0, 20.0), (400.0, 800.0));
    let p = solve_placement(&r).unwrap();
    assert_eq!(p.side, Side::Below);
    assert_eq!(p.origin, Point::new(150.0, 30.0));
    assert_eq!(p.transitions, 2);
}

#[test]
fn tall_target_prefers_above() {
    let r = req((100.0, 100.0, 20.0, 80.0), (40.0, 20.0), (400.0, 800.0));
    let p = solve_placement(&r).unwrap();
    assert_eq!(p.side, Side::Above);
    // x = 100 + 10 - 20, y = 100 - 20
    assert_eq!(p.origin, Point::new(90.0, 80.0));
}

#[test]
fn tall_target_at_top_goes_below() {
    let r = req((100.0, 10.0, 20.0, 80.0), (40.0, 20.0), (400.0, 800.0));
    let p = solve_placement(&r).unwrap();
    assert_eq!(p.side, Side::Below);
    assert_eq!(p.origin, Point::new(90.0, 90.0));
}

#[test]
fn right_edge_target_goes_left() {
    let r = req((340.0, 100.0, 50.0, 20.0), (60.0, 10.0), (400.0, 800.0));
    let p = solve_placement(&r).unwrap();
    assert_eq!(p.side, Side::Left);
    // x = 340 - 60, y = 100 + 10 - 5
    assert_eq!(p.origin, Point::new(280.0, 105.0));
}

#[test]
fn square_target_tries_x_first() {
    let r = req((100.0, 100.0, 40.0, 40.0), (20.0, 20.0), (400.0, 800.0));
    assert_eq!(solve_placement(&r).unwrap().side, Side::Right);
}

#[test]
fn cramped_center_uses_unchecked_fallback() {
    // Centered 20x20 target in a 60x60 viewport, 30x30 label: no side has room.
    let r = req((20.0, 20.0, 20.0, 20.0), (30.0, 30.0), (60.0, 60.0));
    let p = solve_placement(&r).unwrap();
    assert_eq!(p.side, Side::Fallback);
    assert_eq!(p.origin, Point::new(15.0, -10.0));
    assert!(p.transitions <= TRANSITION_BUDGET);
    assert_eq!(p.transitions, 3);
}

#[test]
fn bounds_checks_are_strict() {
    // 20 + 60 + 320 == 400 is not `< 400`, and 20 - 60 is not `> 0`; Y has room below.
    let r = req((20.0, 20.0, 60.0, 20.0), (320.0, 20.0), (400.0, 800.0));
    let p = solve_placement(&r).unwrap();
    assert_eq!(p.side, Side::Below);
}

#[test]
fn fractional_geometry_truncates_to_whole_pixels() {
    let r = req((20.5, 20.25, 61.0, 21.0), (40.0, 21.0), (400.0, 800.0));
    let p = solve_placement(&r).unwrap();
    assert_eq!(p.side, Side::Right);
    // tx=20 tw=61 th=21 -> x=81, y = 20 + 10 - 10
    assert_eq!(p.origin, Point::new(81.0, 20.0));
}

#[test]
fn exhausted_budget_is_a_solver_error() {
    let r = req((20.0, 20.0, 20.0, 20.0), (30.0, 30.0), (60.0, 60.0));
    let err = correlate(&r, 2).unwrap_err();
    assert!(matches!(err, CoachmarkError::Solver(_)));
    assert!(correlate(&r, 3).is_ok());
}

// Interior targets only, with labels no larger than the target: the left test compares against
// the target width, and cross-axis centering is not clamped to the viewport.
#[test]
fn interior_targets_get_clip_free_non_overlapping_labels() {
    let (vw, vh) = (400.0, 800.0);
    for x in (40..=320).step_by(40) {
        for y in (40..=720).step_by(80) {
            for (w, h) in [(60.0, 20.0), (20.0, 60.0), (40.0, 40.0)] {
                let r = req((f64::from(x), f64::from(y), w, h), (20.0, 10.0), (vw, vh));
                if r.target.x1 > vw || r.target.y1 > vh {
                    continue;
                }
                let p = solve_placement(&r).unwrap();
                assert_ne!(p.side, Side::Fallback, "target {:?}", r.target);
                let label = label_rect(&p, &r);
                assert_eq!(label.intersect(r.target).area(), 0.0, "{label:?}");
                assert!(
                    label.x0 >= 0.0 && label.y0 >= 0.0 && label.x1 <= vw && label.y1 <= vh,
                    "label {label:?} leaves the viewport"
                );
            }
        }
    }
}

#[test]
fn unit_scale_leaves_placement_unchanged() {
    let r = req((20.0, 20.0, 60.0, 20.0), (40.0, 20.0), (400.0, 800.0));
    let base = solve_placement(&r).unwrap();
    let scaled = place_label(&r, Vec2::new(1.0, 1.0)).unwrap();
    assert_eq!(base, scaled);
}

#[test]
fn scaled_target_shifts_along_the_placement_axis() {
    let r = req((20.0, 20.0, 60.0, 20.0), (40.0, 20.0), (400.0, 800.0));
    let p = place_label(&r, Vec2::new(0.5, 0.5)).unwrap();
    // Right of target: 60 * (1 - 0.5) * 2 = 60 further away; the cross axis stays centered.
    assert_eq!(p.origin, Point::new(140.0, 20.0));
    assert_eq!(p.side, Side::Right);
}

#[test]
fn cross_axis_centering_is_not_clamped() {
    // Tall 10x60 target near the left edge, 60x10 label: above, centered, starting at x = -20.
    let r = req((5.0, 100.0, 10.0, 60.0), (60.0, 10.0), (400.0, 800.0));
    let p = solve_placement(&r).unwrap();
    assert_eq!(p.side, Side::Above);
    assert_eq!(p.origin, Point::new(-20.0, 90.0));
}

#[test]
fn huge_coordinates_are_rejected_instead_of_overflowing() {
    let r = req((9.3e18, 10.0, 1.0e18, 5.0), (40.0, 20.0), (400.0, 800.0));
    let err = solve_placement(&r).unwrap_err();
    assert!(matches!(err, CoachmarkError::Validation(_)), "{err}");
    assert!(place_label(&r, Vec2::new(0.5, 0.5)).is_err());
}

#[test]
fn non_finite_geometry_is_rejected() {
    let nan_target = req((f64::NAN, 10.0, 60.0, 20.0), (40.0, 20.0), (400.0, 800.0));
    assert!(matches!(
        solve_placement(&nan_target),
        Err(CoachmarkError::Validation(_))
    ));
    let inf_label = req((20.0, 20.0, 60.0, 20.0), (f64::INFINITY, 20.0), (400.0, 800.0));
    assert!(solve_placement(&inf_label).is_err());

    let edge = req((MAX_COORDINATE - 100.0, 0.0, 60.0, 20.0), (40.0, 20.0), (400.0, 800.0));
    assert!(solve_placement(&edge).is_ok());
}
