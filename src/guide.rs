//! # Coachmark guide
//!
//! A short tour of how an overlay goes from a scene list to a label on screen.
//!
//! ## Core concepts
//!
//! - [`Scene`](crate::Scene): label text plus an anchor, either a host element or a
//!   [`ManualRect`](crate::ManualRect) validated against the viewport
//! - [`Sequencer`](crate::Sequencer): owns the scene queue, the cursor and the logical visibility
//! - [`ElementTree`](crate::ElementTree): read-only view of the host layout (rects, scale, parents)
//! - [`RenderSink`](crate::RenderSink): where frames, fades and visibility commits go
//!
//! [`MemoryTree`](crate::MemoryTree) and [`RecordingSink`](crate::RecordingSink) implement the two
//! host traits in memory and back the tests and the `coachmark` CLI.
//!
//! ## Placement
//!
//! [`solve_placement`](crate::solve_placement) works in whole pixels. Tall targets try the Y axis
//! first, everything else tries X first:
//!
//! | axis | first choice | second choice | cross position |
//! |------|--------------|---------------|----------------|
//! | X | right of target | left of target | vertically centered |
//! | Y | above target | below target | horizontally centered |
//!
//! A failed axis retries the other axis once. If both fail the label goes above the target,
//! centered, with no bounds check ([`Side::Fallback`](crate::Side::Fallback)). The engine never
//! takes more than [`TRANSITION_BUDGET`](crate::TRANSITION_BUDGET) steps.
//!
//! [`place_label`](crate::place_label) then compensates for a scaled anchor: along the placement
//! axis the label moves by `size * (1 - scale) * 2`, away from the target when the scale shrinks.
//!
//! ## Sequencing
//!
//! The sequencer has two states, `Hidden` and `Visible(cursor)`.
//!
//! 1. `advance` from `Hidden` rewinds to scene 0, renders it and fades in
//! 2. `advance` while visible renders the next scene in place, without another fade
//! 3. `advance` after the last scene hides the overlay and returns
//!    [`Advance::Finished`](crate::Advance::Finished)
//!
//! Hiding with a fade reports a [`PendingCommit`](crate::PendingCommit). The host calls
//! [`Sequencer::commit`](crate::Sequencer::commit) with its token when the timer fires; if the
//! overlay was shown again in between, the token is stale and the commit does nothing.
//!
//! A scene whose anchor has been detached still moves the cursor and returns
//! [`CoachmarkError::SceneUnavailable`](crate::CoachmarkError::SceneUnavailable). Advance again to
//! skip it or hide to abort.
//!
//! ## Scripts
//!
//! [`TutorialScript`](crate::TutorialScript) describes a host fixture and a scene list in JSON.
//! `coachmark replay --in script.json` runs one through a full pass and prints every sink event.
