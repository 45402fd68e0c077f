use super::*;

#[test]
fn missing_fields_take_defaults() {
    let cfg: OverlayConfig =
        serde_json::from_str(r##"{ "default_label_color": "#ff0000" }"##).unwrap();
    assert_eq!(cfg.default_label_color, Rgba8::opaque(0xff, 0, 0));
    assert_eq!(cfg.default_fade_ms, OverlayConfig::default().default_fade_ms);
    assert_eq!(cfg.fade_ease, Ease::OutQuad);
    cfg.validate().unwrap();
}

#[test]
fn negative_fade_is_rejected() {
    let cfg = OverlayConfig {
        default_fade_ms: -1,
        ..OverlayConfig::default()
    };
    assert!(cfg.validate().is_err());
}
