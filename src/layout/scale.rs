use crate::{
    foundation::core::{Point, Rect, Vec2},
    foundation::error::{CoachmarkError, CoachmarkResult},
    host::tree::{ElementHandle, ElementTree},
    layout::solver::{Axis, Placement},
};

/// Deepest container chain walked before the tree is assumed to contain a cycle.
pub const MAX_TREE_DEPTH: usize = 1024;

/// Product of `el`'s own scale and the scale of every container above it.
pub fn inherited_scale<T>(tree: &T, el: ElementHandle) -> CoachmarkResult<Vec2>
where
    T: ElementTree + ?Sized,
{
    let own = tree.element_scale(el);
    let (mut sx, mut sy) = (own.x, own.y);
    let mut current = tree.element_parent(el);
    let mut depth = 0usize;

    while let Some(parent) = current {
        depth += 1;
        if depth > MAX_TREE_DEPTH {
            return Err(CoachmarkError::host(format!(
                "container chain of {el:?} is deeper than {MAX_TREE_DEPTH}; parent cycle?"
            )));
        }
        let s = tree.element_scale(parent);
        sx *= s.x;
        sy *= s.y;
        current = tree.element_parent(parent);
    }

    Ok(Vec2::new(sx, sy))
}

/// Shift a base placement so the label hugs the rendered (scaled) footprint of the target.
///
/// Only the placement axis is adjusted, by `dimension * (1 - scale) * 2`; a positive offset
/// moves the label away from the target on whichever side it sits. A scale of exactly `1.0`
/// leaves the placement untouched.
pub fn compensate_scale(placement: Placement, target: Rect, scale: Vec2) -> Placement {
    let Point { mut x, mut y } = placement.origin;
    match placement.side.axis() {
        Axis::X if scale.x != 1.0 => {
            let offset = target.width() * (1.0 - scale.x) * 2.0;
            x = if x > target.x0 { x + offset } else { x - offset };
        }
        Axis::Y if scale.y != 1.0 => {
            let offset = target.height() * (1.0 - scale.y) * 2.0;
            y = if y > target.y0 { y + offset } else { y - offset };
        }
        _ => {}
    }
    Placement {
        origin: Point::new(x, y),
        ..placement
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/scale.rs"]
mod tests;
