use super::*;

fn tree() -> MemoryTree {
    MemoryTree::new(Viewport::new(400.0, 800.0).unwrap())
}

#[test]
fn handles_are_unique_and_parents_resolve() {
    let mut t = tree();
    let root = t.insert(Rect::new(0.0, 0.0, 400.0, 800.0), None);
    let child = t.insert(Rect::new(10.0, 10.0, 50.0, 30.0), Some(root));
    assert_ne!(root, child);
    assert_eq!(t.element_parent(child), Some(root));
    assert_eq!(t.element_parent(root), None);
}

#[test]
fn detached_elements_lose_their_geometry() {
    let mut t = tree();
    let el = t.insert(Rect::new(10.0, 10.0, 50.0, 30.0), None);
    assert!(t.element_rect(el).is_some());
    assert!(t.detach(el));
    assert_eq!(t.element_rect(el), None);
    assert_eq!(t.element_visibility(el), ElementVisibility::Detached);
    assert_eq!(
        t.element_visibility(ElementHandle(999)),
        ElementVisibility::Detached
    );
}

#[test]
fn labels_wrap_at_the_wrap_width() {
    let t = tree().with_glyph_metrics(10.0, 20.0);
    assert_eq!(t.measure_label("abcd", 0), Size::new(40.0, 20.0));
    assert_eq!(t.measure_label("abcd", 100), Size::new(40.0, 20.0));
    // 3 glyphs per line -> 2 lines for 4 glyphs.
    assert_eq!(t.measure_label("abcd", 35), Size::new(30.0, 40.0));
}

#[test]
fn unknown_handles_report_unit_scale() {
    let t = tree();
    assert_eq!(t.element_scale(ElementHandle(42)), Vec2::new(1.0, 1.0));
}
