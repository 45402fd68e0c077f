use super::*;

#[test]
fn ease_endpoints_are_fixed() {
    for ease in [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::OutCubic,
    ] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(2.0), 1.0);
    }
    assert_eq!(Ease::InOutQuad.apply(0.5), 0.5);
}

#[test]
fn fade_out_samples_linearly() {
    let f = Fade::fade_out(200, Ease::Linear);
    assert_eq!(f.opacity_at(0), 1.0);
    assert_eq!(f.opacity_at(100), 0.5);
    assert_eq!(f.opacity_at(200), 0.0);
    assert_eq!(f.opacity_at(10_000), 0.0);
}

#[test]
fn zero_length_fade_jumps_to_target() {
    let f = Fade::fade_in(0, Ease::OutQuad);
    assert_eq!(f.opacity_at(0), 1.0);
}

#[test]
fn non_positive_durations_disable_animation() {
    assert_eq!(fade_duration(0), None);
    assert_eq!(fade_duration(-5), None);
    assert_eq!(fade_duration(250), Some(250));
}

#[test]
fn ease_names_are_snake_case() {
    let e: Ease = serde_json::from_str("\"in_out_quad\"").unwrap();
    assert_eq!(e, Ease::InOutQuad);
}
