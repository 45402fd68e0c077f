use std::collections::BTreeMap;

use crate::foundation::core::{Rect, Size, Vec2, Viewport};
use crate::host::tree::{ElementHandle, ElementTree, ElementVisibility};

const DEFAULT_GLYPH_ADVANCE: f64 = 8.0;
const DEFAULT_LINE_HEIGHT: f64 = 16.0;

/// One element held by a [`MemoryTree`].
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryElement {
    /// Laid-out rectangle.
    pub rect: Rect,
    /// Own transform scale.
    pub scale: Vec2,
    /// Containing element.
    pub parent: Option<ElementHandle>,
    /// Reported visibility.
    pub visibility: ElementVisibility,
}

impl MemoryElement {
    /// A visible, unscaled element.
    pub fn new(rect: Rect, parent: Option<ElementHandle>) -> Self {
        Self {
            rect,
            scale: Vec2::new(1.0, 1.0),
            parent,
            visibility: ElementVisibility::Visible,
        }
    }
}

/// In-memory [`ElementTree`] for tests, scripts, and headless replay.
///
/// Labels are measured with a fixed glyph advance and line height; text wraps per character
/// once a line would exceed the wrap width.
#[derive(Clone, Debug)]
pub struct MemoryTree {
    viewport: Viewport,
    elements: BTreeMap<ElementHandle, MemoryElement>,
    next_id: u64,
    glyph_advance: f64,
    line_height: f64,
}

impl MemoryTree {
    /// Create an empty tree over `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            elements: BTreeMap::new(),
            next_id: 1,
            glyph_advance: DEFAULT_GLYPH_ADVANCE,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }

    /// Override the label metrics used by [`ElementTree::measure_label`].
    pub fn with_glyph_metrics(mut self, glyph_advance: f64, line_height: f64) -> Self {
        self.glyph_advance = glyph_advance.max(0.0);
        self.line_height = line_height.max(0.0);
        self
    }

    /// Add a visible, unscaled element.
    pub fn insert(&mut self, rect: Rect, parent: Option<ElementHandle>) -> ElementHandle {
        self.insert_element(MemoryElement::new(rect, parent))
    }

    /// Add a fully specified element.
    pub fn insert_element(&mut self, element: MemoryElement) -> ElementHandle {
        let handle = ElementHandle(self.next_id);
        self.next_id += 1;
        self.elements.insert(handle, element);
        handle
    }

    /// Borrow an element.
    pub fn element(&self, el: ElementHandle) -> Option<&MemoryElement> {
        self.elements.get(&el)
    }

    /// Mutably borrow an element.
    pub fn element_mut(&mut self, el: ElementHandle) -> Option<&mut MemoryElement> {
        self.elements.get_mut(&el)
    }

    /// Move or resize an element. Returns `false` for unknown handles.
    pub fn set_rect(&mut self, el: ElementHandle, rect: Rect) -> bool {
        self.element_mut(el).map(|e| e.rect = rect).is_some()
    }

    /// Change an element's own scale. Returns `false` for unknown handles.
    pub fn set_scale(&mut self, el: ElementHandle, scale: Vec2) -> bool {
        self.element_mut(el).map(|e| e.scale = scale).is_some()
    }

    /// Change an element's visibility. Returns `false` for unknown handles.
    pub fn set_visibility(&mut self, el: ElementHandle, visibility: ElementVisibility) -> bool {
        self.element_mut(el)
            .map(|e| e.visibility = visibility)
            .is_some()
    }

    /// Mark an element as removed from the tree.
    pub fn detach(&mut self, el: ElementHandle) -> bool {
        self.set_visibility(el, ElementVisibility::Detached)
    }

    /// Resize the viewport, e.g. after a rotation.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

impl ElementTree for MemoryTree {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn element_rect(&self, el: ElementHandle) -> Option<Rect> {
        self.elements
            .get(&el)
            .filter(|e| e.visibility != ElementVisibility::Detached)
            .map(|e| e.rect)
    }

    fn element_scale(&self, el: ElementHandle) -> Vec2 {
        self.elements
            .get(&el)
            .map(|e| e.scale)
            .unwrap_or_else(|| Vec2::new(1.0, 1.0))
    }

    fn element_parent(&self, el: ElementHandle) -> Option<ElementHandle> {
        self.elements.get(&el).and_then(|e| e.parent)
    }

    fn element_visibility(&self, el: ElementHandle) -> ElementVisibility {
        self.elements
            .get(&el)
            .map(|e| e.visibility)
            .unwrap_or(ElementVisibility::Detached)
    }

    fn measure_label(&self, text: &str, wrap_width: u32) -> Size {
        let glyphs = text.chars().count();
        let full_w = glyphs as f64 * self.glyph_advance;
        if wrap_width == 0 || full_w <= f64::from(wrap_width) || self.glyph_advance <= 0.0 {
            return Size::new(full_w, self.line_height);
        }
        let per_line = ((f64::from(wrap_width) / self.glyph_advance).floor() as usize).max(1);
        let lines = glyphs.div_ceil(per_line);
        Size::new(
            per_line as f64 * self.glyph_advance,
            lines as f64 * self.line_height,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/memory.rs"]
mod tests;
