use super::*;

#[test]
fn hex_colors_parse_with_and_without_alpha() {
    assert_eq!(
        Rgba8::parse_hex("#ff3366").unwrap(),
        Rgba8::opaque(0xff, 0x33, 0x66)
    );
    assert_eq!(
        Rgba8::parse_hex("102030c0").unwrap(),
        Rgba8::new(0x10, 0x20, 0x30, 0xc0)
    );
    assert!(Rgba8::parse_hex("#12345").is_err());
    assert!(Rgba8::parse_hex("#gg0000").is_err());
}

#[test]
fn hex_colors_survive_json() {
    let c = Rgba8::new(1, 2, 3, 4);
    let s = serde_json::to_string(&c).unwrap();
    assert_eq!(s, "\"#01020304\"");
    let back: Rgba8 = serde_json::from_str(&s).unwrap();
    assert_eq!(back, c);
}

#[test]
fn viewport_rejects_degenerate_sizes() {
    assert!(Viewport::new(0.0, 10.0).is_err());
    assert!(Viewport::new(10.0, f64::NAN).is_err());
    assert!(Viewport::new(400.0, 800.0).is_ok());
}

#[test]
fn occlusion_checks_every_edge() {
    let vp = Viewport::new(100.0, 50.0).unwrap();
    assert!(!vp.occludes(Rect::new(0.0, 0.0, 100.0, 50.0)));
    assert!(vp.occludes(Rect::new(-1.0, 0.0, 10.0, 10.0)));
    assert!(vp.occludes(Rect::new(0.0, -1.0, 10.0, 10.0)));
    assert!(vp.occludes(Rect::new(95.0, 0.0, 101.0, 10.0)));
    assert!(vp.occludes(Rect::new(0.0, 45.0, 10.0, 51.0)));
}

#[test]
fn viewport_contains_is_inclusive() {
    let vp = Viewport::new(100.0, 50.0).unwrap();
    assert!(vp.contains(Point::new(100.0, 50.0)));
    assert!(vp.contains(Point::ORIGIN));
    assert!(!vp.contains(Point::new(100.5, 0.0)));
}
