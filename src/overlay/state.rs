use crate::{
    foundation::core::{Rect, Rgba8},
    host::tree::ElementHandle,
    scene::model::Anchor,
};

/// Logical visibility of the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Not shown (possibly still fading out).
    #[default]
    Hidden,
    /// Shown (possibly still fading in).
    Visible,
}

/// Resolved fields of the scene currently rendered.
///
/// A set target takes priority over the manual rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveScene {
    pub(crate) target: Option<ElementHandle>,
    pub(crate) manual: Rect,
    pub(crate) label_text: String,
    pub(crate) color: Rgba8,
    pub(crate) max_width: u32,
}

impl ActiveScene {
    pub(crate) fn new(label_text: String, color: Rgba8) -> Self {
        Self {
            target: None,
            manual: Rect::ZERO,
            label_text,
            color,
            max_width: 0,
        }
    }

    /// Anchor the next render resolves against.
    pub fn anchor(&self) -> Anchor {
        match self.target {
            Some(el) => Anchor::Element(el),
            None => Anchor::Manual(self.manual),
        }
    }

    /// Active label text.
    pub fn label_text(&self) -> &str {
        &self.label_text
    }

    /// Active label background.
    pub fn color(&self) -> Rgba8 {
        self.color
    }

    /// Active wrap width.
    pub fn max_width(&self) -> u32 {
        self.max_width
    }
}

/// Mutable overlay state owned by a [`crate::Sequencer`].
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayState {
    pub(crate) visibility: Visibility,
    pub(crate) cursor: usize,
    pub(crate) active: ActiveScene,
}

impl OverlayState {
    pub(crate) fn new(active: ActiveScene) -> Self {
        Self {
            visibility: Visibility::Hidden,
            cursor: 0,
            active,
        }
    }

    /// Current logical visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Index of the next scene to show, in `[0, scene count]`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The resolved scene fields.
    pub fn active(&self) -> &ActiveScene {
        &self.active
    }
}
