use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CoachmarkError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CoachmarkError::solver("x")
            .to_string()
            .contains("solver error:")
    );
    assert!(CoachmarkError::host("x").to_string().contains("host error:"));
    assert!(
        CoachmarkError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn only_detached_anchor_is_recoverable() {
    let detached = CoachmarkError::SceneUnavailable {
        index: 2,
        element: ElementHandle(7),
    };
    assert!(detached.is_recoverable());
    assert!(detached.to_string().contains("scene 2"));
    assert!(!CoachmarkError::AnchorIsContainer(ElementHandle(1)).is_recoverable());
    assert!(!CoachmarkError::solver("budget").is_recoverable());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CoachmarkError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
