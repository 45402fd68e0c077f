use crate::{
    foundation::core::{Point, Rect, Size, Vec2},
    foundation::error::{CoachmarkError, CoachmarkResult},
    layout::scale::compensate_scale,
};

/// Upper bound on state transitions of the placement engine.
///
/// The longest legal path is preferred axis -> other axis -> fallback (3 transitions).
pub const TRANSITION_BUDGET: u8 = 5;

/// Largest coordinate or size magnitude the solver accepts, in pixels.
pub const MAX_COORDINATE: f64 = 1.0e12;

/// Axis a label is placed along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Right or left of the target.
    X,
    /// Above or below the target.
    Y,
}

impl Axis {
    fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// Which side of the target the label sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Right of the target, vertically centered.
    Right,
    /// Left of the target, vertically centered.
    Left,
    /// Above the target, horizontally centered.
    Above,
    /// Below the target, horizontally centered.
    Below,
    /// Above the target, horizontally centered, without any bounds check.
    Fallback,
}

impl Side {
    /// Axis along which the label is adjacent to the target.
    pub fn axis(self) -> Axis {
        match self {
            Self::Right | Self::Left => Axis::X,
            Self::Above | Self::Below | Self::Fallback => Axis::Y,
        }
    }
}

/// Inputs to the placement engine, all in layout coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementRequest {
    /// Anchor rectangle.
    pub target: Rect,
    /// Measured label size.
    pub label: Size,
    /// Viewport size.
    pub viewport: Size,
}

impl PlacementRequest {
    /// Reject non-finite values and magnitudes beyond [`MAX_COORDINATE`].
    pub fn validate(&self) -> CoachmarkResult<()> {
        let fields = [
            ("target.x0", self.target.x0),
            ("target.y0", self.target.y0),
            ("target.x1", self.target.x1),
            ("target.y1", self.target.y1),
            ("label.width", self.label.width),
            ("label.height", self.label.height),
            ("viewport.width", self.viewport.width),
            ("viewport.height", self.viewport.height),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v.abs() > MAX_COORDINATE {
                return Err(CoachmarkError::validation(format!(
                    "placement {name} = {v} must be finite and within +/-{MAX_COORDINATE}"
                )));
            }
        }
        Ok(())
    }
}

/// Computed label position.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Placement {
    /// Top-left corner of the label.
    pub origin: Point,
    /// Side of the target the label sits on.
    pub side: Side,
    /// State transitions the engine took, `1..=TRANSITION_BUDGET`.
    pub transitions: u8,
}

// The engine works on whole pixels; fractional layout positions truncate toward zero.
// Built only from validated requests, so sums of a few fields stay far from i64 bounds.
#[derive(Clone, Copy, Debug)]
struct Px {
    tx: i64,
    ty: i64,
    tw: i64,
    th: i64,
    lw: i64,
    lh: i64,
    vw: i64,
    vh: i64,
}

impl From<&PlacementRequest> for Px {
    fn from(req: &PlacementRequest) -> Self {
        Self {
            tx: req.target.x0 as i64,
            ty: req.target.y0 as i64,
            tw: req.target.width() as i64,
            th: req.target.height() as i64,
            lw: req.label.width as i64,
            lh: req.label.height as i64,
            vw: req.viewport.width as i64,
            vh: req.viewport.height as i64,
        }
    }
}

impl Px {
    fn center_y(self) -> i64 {
        self.ty + self.th / 2 - self.lh / 2
    }

    fn center_x(self) -> i64 {
        self.tx + self.tw / 2 - self.lw / 2
    }

    fn try_axis(self, axis: Axis) -> Option<(Side, i64, i64)> {
        match axis {
            Axis::X => {
                if self.tx + self.tw + self.lw < self.vw {
                    Some((Side::Right, self.tx + self.tw, self.center_y()))
                } else if self.tx - self.tw > 0 {
                    Some((Side::Left, self.tx - self.lw, self.center_y()))
                } else {
                    None
                }
            }
            Axis::Y => {
                if self.ty - self.lh > 0 {
                    Some((Side::Above, self.center_x(), self.ty - self.lh))
                } else if self.ty + self.th + self.lh < self.vh {
                    Some((Side::Below, self.center_x(), self.ty + self.th))
                } else {
                    None
                }
            }
        }
    }

    fn fallback(self, transitions: u8) -> Placement {
        Placement {
            origin: Point::new(self.center_x() as f64, (self.ty - self.lh) as f64),
            side: Side::Fallback,
            transitions,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Axis(Axis),
    Fallback,
}

/// Choose a clip-free side of `req.target` for the label.
///
/// Tall targets try above/below first, everything else tries right/left first. When the
/// preferred axis has no room the other axis is tried once; when neither has room the label
/// goes above the target, centered, unconditionally.
///
/// Centering on the cross axis is not clamped: a label wider than its target near a viewport
/// edge can start outside the viewport even on the above/below sides.
///
/// Non-finite or oversized request values are rejected with [`CoachmarkError::Validation`].
/// Overrunning [`TRANSITION_BUDGET`] is a logic defect: debug builds return
/// [`CoachmarkError::Solver`], release builds log it and use the fallback placement.
pub fn solve_placement(req: &PlacementRequest) -> CoachmarkResult<Placement> {
    req.validate()?;
    match correlate(req, TRANSITION_BUDGET) {
        Ok(p) => Ok(p),
        Err(err) if cfg!(debug_assertions) => Err(err),
        Err(err) => {
            tracing::error!(%err, "placement engine overran its budget; using fallback");
            Ok(Px::from(req).fallback(TRANSITION_BUDGET))
        }
    }
}

/// [`solve_placement`] followed by scale compensation for the target's inherited scale.
pub fn place_label(req: &PlacementRequest, inherited_scale: Vec2) -> CoachmarkResult<Placement> {
    let base = solve_placement(req)?;
    Ok(compensate_scale(base, req.target, inherited_scale))
}

pub(crate) fn correlate(req: &PlacementRequest, budget: u8) -> CoachmarkResult<Placement> {
    let px = Px::from(req);
    let preferred = if px.th > px.tw { Axis::Y } else { Axis::X };
    let mut state = State::Axis(preferred);
    let mut retried = false;

    for step in 1..=budget {
        let next = match state {
            State::Axis(axis) => match px.try_axis(axis) {
                Some((side, x, y)) => {
                    tracing::debug!(?side, transitions = step, "label placed");
                    return Ok(Placement {
                        origin: Point::new(x as f64, y as f64),
                        side,
                        transitions: step,
                    });
                }
                None if retried => State::Fallback,
                None => {
                    retried = true;
                    State::Axis(axis.other())
                }
            },
            State::Fallback => {
                tracing::debug!(transitions = step, "no side fits; label placed above");
                return Ok(px.fallback(step));
            }
        };
        state = next;
    }

    Err(CoachmarkError::solver(format!(
        "no placement after {budget} transitions (last state {state:?})"
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
