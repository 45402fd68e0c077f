//! Coachmark is a headless engine for anchored tutorial overlays.
//!
//! A [`Sequencer`] walks a queue of [`Scene`]s. Each scene highlights a window (a host element
//! or a fixed rectangle) and places a text label next to it so that the label stays inside the
//! viewport and never covers the window. The host supplies geometry through [`ElementTree`] and
//! draws through [`RenderSink`]:
//!
//! - Build scenes with [`Scene::anchored`] or [`Scene::manual`]
//! - Call [`Sequencer::advance`] on every user tap
//! - Forward delayed hides back through [`Sequencer::commit`]
//!
//! See [`guide`] for a walkthrough of placement rules and sequencing states.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod host;
pub(crate) mod layout;
pub(crate) mod overlay;
pub(crate) mod scene;

/// Walkthrough of placement and sequencing.
pub mod guide;

pub use crate::foundation::core::{Point, Rect, Rgba8, Size, Vec2, Viewport};
pub use crate::foundation::error::{CoachmarkError, CoachmarkResult};

pub use crate::animation::fade::{Ease, Fade};
pub use crate::host::memory::{MemoryElement, MemoryTree};
pub use crate::host::sink::{
    CommitToken, OverlayFrame, PendingCommit, RecordingSink, RenderSink, SinkEvent,
};
pub use crate::host::tree::{ElementHandle, ElementTree, ElementVisibility};
pub use crate::layout::scale::{MAX_TREE_DEPTH, compensate_scale, inherited_scale};
pub use crate::layout::solver::{
    Axis, MAX_COORDINATE, Placement, PlacementRequest, Side, TRANSITION_BUDGET, place_label,
    solve_placement,
};
pub use crate::overlay::config::OverlayConfig;
pub use crate::overlay::sequencer::{Advance, Sequencer};
pub use crate::overlay::state::{ActiveScene, OverlayState, Visibility};
pub use crate::scene::model::{Anchor, LabelBackground, ManualRect, Scene};
pub use crate::scene::script::{
    AnchorSpec, ElementSpec, HostFixture, LoadedScript, RectSpec, SceneSpec, TutorialScript,
};
pub use crate::scene::store::SceneStore;
