use crate::animation::fade::Fade;
use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::CoachmarkResult;
use crate::layout::solver::Side;
use crate::overlay::state::Visibility;

/// Everything the host needs to draw one overlay scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OverlayFrame {
    /// Label text.
    pub label_text: String,
    /// Label wrap width in pixels (`0` means unconstrained).
    pub wrap_width: u32,
    /// Label background color.
    pub background: Rgba8,
    /// Display window, sized and placed over the anchor's laid-out rectangle.
    pub window: Rect,
    /// Top-left corner of the label.
    pub label_origin: Point,
    /// Side of the anchor the label ended up on.
    pub side: Side,
}

/// Token identifying one delayed visibility commit.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CommitToken(pub u64);

/// Follow-up commit the host must deliver back to the sequencer once `delay_ms` has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PendingCommit {
    /// Token to pass to [`crate::Sequencer::commit`].
    pub token: CommitToken,
    /// Delay in milliseconds, equal to the fade duration.
    pub delay_ms: u64,
}

/// Sink contract for the host's overlay widget.
///
/// Ordering contract: within one sequencer call, `render` precedes the visibility commands it
/// enables, and `schedule_commit` follows the `fade` it belongs to.
pub trait RenderSink {
    /// Draw the label and display window.
    fn render(&mut self, frame: &OverlayFrame) -> CoachmarkResult<()>;
    /// Switch the overlay's drawn visibility immediately.
    fn commit_visibility(&mut self, visibility: Visibility) -> CoachmarkResult<()>;
    /// Start a fire-and-forget opacity animation.
    fn fade(&mut self, fade: &Fade) -> CoachmarkResult<()>;
    /// Arrange for [`crate::Sequencer::commit`] to be called after `commit.delay_ms`.
    fn schedule_commit(&mut self, commit: PendingCommit) -> CoachmarkResult<()>;
}

/// One call observed by a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SinkEvent {
    /// A `render` call.
    Render(OverlayFrame),
    /// A `commit_visibility` call.
    Visibility {
        /// Committed visibility.
        visibility: Visibility,
    },
    /// A `fade` call.
    Fade(Fade),
    /// A `schedule_commit` call.
    Schedule(PendingCommit),
}

/// Sink that records every call, for tests, debugging, and the CLI.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
    pending: Vec<PendingCommit>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded call, in order.
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Take the commits scheduled since the last call, leaving none pending.
    pub fn take_pending(&mut self) -> Vec<PendingCommit> {
        std::mem::take(&mut self.pending)
    }

    /// The rendered frames, in order.
    pub fn frames(&self) -> impl Iterator<Item = &OverlayFrame> {
        self.events.iter().filter_map(|e| match e {
            SinkEvent::Render(f) => Some(f),
            _ => None,
        })
    }

    /// The last rendered frame, if any.
    pub fn last_frame(&self) -> Option<&OverlayFrame> {
        self.frames().last()
    }

    /// Committed visibility changes, in order.
    pub fn visibility_commits(&self) -> Vec<Visibility> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Visibility { visibility } => Some(*visibility),
                _ => None,
            })
            .collect()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
        self.pending.clear();
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, frame: &OverlayFrame) -> CoachmarkResult<()> {
        self.events.push(SinkEvent::Render(frame.clone()));
        Ok(())
    }

    fn commit_visibility(&mut self, visibility: Visibility) -> CoachmarkResult<()> {
        self.events.push(SinkEvent::Visibility { visibility });
        Ok(())
    }

    fn fade(&mut self, fade: &Fade) -> CoachmarkResult<()> {
        self.events.push(SinkEvent::Fade(*fade));
        Ok(())
    }

    fn schedule_commit(&mut self, commit: PendingCommit) -> CoachmarkResult<()> {
        self.events.push(SinkEvent::Schedule(commit));
        self.pending.push(commit);
        Ok(())
    }
}
