use crate::foundation::core::{Rect, Size, Vec2, Viewport};

/// Opaque reference to an element in the host's view tree.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementHandle(pub u64);

/// Visibility of a host element as reported by the toolkit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementVisibility {
    /// Laid out and drawn.
    #[default]
    Visible,
    /// Laid out but not drawn.
    Invisible,
    /// Neither laid out nor drawn.
    Gone,
    /// No longer part of the tree; geometry reads are meaningless.
    Detached,
}

/// Read-only geometry capability exposed by a tree-shaped UI host.
///
/// All reads happen on the UI thread and must not block. Geometry is reported in layout
/// coordinates, before any ancestor scale transform is applied.
pub trait ElementTree {
    /// Size of the visible display area.
    fn viewport(&self) -> Viewport;

    /// Laid-out rectangle of `el`, or `None` if the host no longer knows it.
    fn element_rect(&self, el: ElementHandle) -> Option<Rect>;

    /// The element's own transform scale, not including ancestors.
    fn element_scale(&self, el: ElementHandle) -> Vec2;

    /// The containing element, or `None` at the root.
    fn element_parent(&self, el: ElementHandle) -> Option<ElementHandle>;

    /// Current visibility of `el`.
    fn element_visibility(&self, el: ElementHandle) -> ElementVisibility;

    /// Size the overlay label takes when showing `text` wrapped at `wrap_width`
    /// (`0` means unconstrained).
    fn measure_label(&self, text: &str, wrap_width: u32) -> Size;
}
