use crate::{
    foundation::core::{Rect, Rgba8, Viewport},
    foundation::error::{CoachmarkError, CoachmarkResult},
    host::tree::ElementHandle,
};

/// What a scene's label is positioned relative to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// A live element in the host tree.
    Element(ElementHandle),
    /// Fixed coordinates in the viewport.
    Manual(Rect),
}

/// Label background of a scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelBackground {
    /// The sequencer's configured default color.
    #[default]
    Default,
    /// An explicit color.
    Color(Rgba8),
}

impl LabelBackground {
    /// Resolve against the configured default color.
    pub fn resolve(self, default: Rgba8) -> Rgba8 {
        match self {
            Self::Default => default,
            Self::Color(c) => c,
        }
    }
}

impl From<Option<Rgba8>> for LabelBackground {
    fn from(value: Option<Rgba8>) -> Self {
        value.map_or(Self::Default, Self::Color)
    }
}

/// Manually specified anchor rectangle, validated against a viewport on use.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ManualRect {
    /// Left edge, `0 <= x <= viewport width`.
    pub x: f64,
    /// Top edge, `0 <= y <= viewport height`.
    pub y: f64,
    /// Width, `>= 0`.
    pub width: i64,
    /// Height, `>= 0`.
    pub height: i64,
}

impl ManualRect {
    /// Reject coordinates outside `viewport` and negative dimensions.
    pub fn validate(&self, viewport: Viewport) -> CoachmarkResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(CoachmarkError::validation(
                "manual rect position must be finite",
            ));
        }
        if self.x < 0.0 || self.x > viewport.width || self.y < 0.0 || self.y > viewport.height {
            return Err(CoachmarkError::validation(format!(
                "manual rect origin ({}, {}) is outside the {}x{} viewport",
                self.x, self.y, viewport.width, viewport.height
            )));
        }
        if self.width < 0 || self.height < 0 {
            return Err(CoachmarkError::validation(format!(
                "manual rect size {}x{} must be >= 0",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// The rectangle in layout coordinates.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.x,
            self.y,
            self.x + self.width as f64,
            self.y + self.height as f64,
        )
    }
}

/// One immutable step of a tutorial.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    label: String,
    anchor: Anchor,
    max_label_width: u32,
    background: LabelBackground,
}

impl Scene {
    /// A scene anchored to a live host element.
    pub fn anchored(label: impl Into<String>, target: ElementHandle) -> Self {
        Self {
            label: label.into(),
            anchor: Anchor::Element(target),
            max_label_width: 0,
            background: LabelBackground::Default,
        }
    }

    /// A scene anchored to fixed coordinates. Fails if `rect` leaves `viewport` or has a
    /// negative dimension.
    pub fn manual(
        label: impl Into<String>,
        rect: ManualRect,
        viewport: Viewport,
    ) -> CoachmarkResult<Self> {
        rect.validate(viewport)?;
        Ok(Self {
            label: label.into(),
            anchor: Anchor::Manual(rect.to_rect()),
            max_label_width: 0,
            background: LabelBackground::Default,
        })
    }

    /// Set the label wrap width (`0` means unconstrained).
    pub fn with_max_label_width(mut self, max_label_width: u32) -> Self {
        self.max_label_width = max_label_width;
        self
    }

    /// Set the label background.
    pub fn with_background(mut self, background: LabelBackground) -> Self {
        self.background = background;
        self
    }

    /// Label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Anchor of this scene.
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Label wrap width.
    pub fn max_label_width(&self) -> u32 {
        self.max_label_width
    }

    /// Label background.
    pub fn background(&self) -> LabelBackground {
        self.background
    }

    /// The anchored element, if this scene is element-anchored.
    pub fn target(&self) -> Option<ElementHandle> {
        match self.anchor {
            Anchor::Element(el) => Some(el),
            Anchor::Manual(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
