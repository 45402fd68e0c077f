use crate::{
    animation::fade::{Fade, fade_duration},
    foundation::core::{Rect, Rgba8, Size, Vec2, Viewport},
    foundation::error::{CoachmarkError, CoachmarkResult},
    host::sink::{CommitToken, OverlayFrame, PendingCommit, RenderSink},
    host::tree::{ElementHandle, ElementTree, ElementVisibility},
    layout::scale::inherited_scale,
    layout::solver::{PlacementRequest, place_label},
    overlay::config::OverlayConfig,
    overlay::state::{ActiveScene, OverlayState, Visibility},
    scene::model::{Anchor, LabelBackground, Scene},
    scene::store::SceneStore,
};

/// What a call to [`Sequencer::advance`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Advance {
    /// The scene list is empty; nothing happened.
    Idle,
    /// The scene at `index` is now rendered.
    Shown {
        /// Queue index of the rendered scene.
        index: usize,
    },
    /// The last scene had been shown; the overlay is now hidden and the cursor is back at 0.
    Finished,
}

// Geometry read from the host in one go before any placement math runs.
#[derive(Clone, Copy, Debug)]
struct GeometrySnapshot {
    viewport: Viewport,
    window: Rect,
    scale: Vec2,
    label: Size,
}

/// Drives a tutorial overlay through its scene queue.
///
/// States are `Hidden` and `Visible(cursor)`. Entering `Visible` from `Hidden` always restarts
/// the queue at scene 0. All calls run on the UI thread; fades are fire-and-forget and the
/// trailing hide is committed through [`Sequencer::commit`] once the host's timer fires.
#[derive(Debug)]
pub struct Sequencer {
    config: OverlayConfig,
    container: ElementHandle,
    store: SceneStore,
    state: OverlayState,
    pending: Option<CommitToken>,
    next_token: u64,
}

impl Sequencer {
    /// Create a hidden sequencer with no scenes for the overlay living in `container`.
    pub fn new(container: ElementHandle, config: OverlayConfig) -> CoachmarkResult<Self> {
        config.validate()?;
        let active = ActiveScene::new(
            config.default_label_text.clone(),
            config.default_label_color,
        );
        Ok(Self {
            config,
            container,
            store: SceneStore::new(),
            state: OverlayState::new(active),
            pending: None,
            next_token: 1,
        })
    }

    /// [`Sequencer::new`] followed by [`Sequencer::add_scene`] for each scene.
    pub fn with_scenes<I>(
        container: ElementHandle,
        config: OverlayConfig,
        scenes: I,
    ) -> CoachmarkResult<Self>
    where
        I: IntoIterator<Item = Scene>,
    {
        let mut seq = Self::new(container, config)?;
        for scene in scenes {
            seq.add_scene(scene)?;
        }
        Ok(seq)
    }

    /// Append a scene. Scenes anchored to the overlay container are rejected.
    pub fn add_scene(&mut self, scene: Scene) -> CoachmarkResult<()> {
        self.check_anchor(scene.target())?;
        self.store.add_scene(scene);
        Ok(())
    }

    /// Drop every scene and rewind the cursor.
    pub fn clear_scene_list(&mut self) {
        self.store.clear_scene_list();
        self.state.cursor = 0;
    }

    /// A copy of the scene list.
    pub fn scenes(&self) -> Vec<Scene> {
        self.store.scenes()
    }

    /// The overlay's own container element.
    pub fn container(&self) -> ElementHandle {
        self.container
    }

    /// Active configuration.
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// Current logical visibility.
    pub fn visibility(&self) -> Visibility {
        self.state.visibility
    }

    /// Index of the next scene to show.
    pub fn cursor(&self) -> usize {
        self.state.cursor
    }

    /// Set the label text; `None` restores the configured default.
    pub fn set_label_text(&mut self, text: Option<String>) {
        self.state.active.label_text =
            text.unwrap_or_else(|| self.config.default_label_text.clone());
    }

    /// Active label text.
    pub fn label_text(&self) -> &str {
        &self.state.active.label_text
    }

    /// Set the label background.
    pub fn set_label_color(&mut self, background: LabelBackground) {
        self.state.active.color = background.resolve(self.config.default_label_color);
    }

    /// Active label background.
    pub fn label_color(&self) -> Rgba8 {
        self.state.active.color
    }

    /// Set the label wrap width; negative values become `0` (unconstrained).
    pub fn set_max_label_width(&mut self, max: i64) {
        self.state.active.max_width = u32::try_from(max.max(0)).unwrap_or(u32::MAX);
    }

    /// Active wrap width.
    pub fn max_label_width(&self) -> u32 {
        self.state.active.max_width
    }

    /// Anchor the overlay to `target`; `None` falls back to the manual rectangle.
    pub fn set_target(&mut self, target: Option<ElementHandle>) -> CoachmarkResult<()> {
        self.check_anchor(target)?;
        self.state.active.target = target;
        Ok(())
    }

    /// The anchored element, if any.
    pub fn target(&self) -> Option<ElementHandle> {
        self.state.active.target
    }

    /// Set the manual anchor rectangle; negative values clamp to `0`.
    pub fn set_manual_values(&mut self, x: f64, y: f64, width: i64, height: i64) {
        let x = x.max(0.0);
        let y = y.max(0.0);
        self.state.active.manual = Rect::new(
            x,
            y,
            x + width.max(0) as f64,
            y + height.max(0) as f64,
        );
    }

    /// The manual anchor rectangle.
    pub fn manual_values(&self) -> Rect {
        self.state.active.manual
    }

    /// Show the next scene, hiding the overlay after the last one.
    ///
    /// `animation_ms <= 0` switches visibility without a fade. When the scene's anchor is
    /// detached the cursor still moves on and any Hidden -> Visible transition still happens;
    /// the returned [`CoachmarkError::SceneUnavailable`] lets the host skip (advance again) or
    /// abort (hide).
    #[tracing::instrument(skip(self, tree, sink), fields(cursor = self.state.cursor))]
    pub fn advance<T, S>(
        &mut self,
        tree: &T,
        sink: &mut S,
        animation_ms: i64,
    ) -> CoachmarkResult<Advance>
    where
        T: ElementTree + ?Sized,
        S: RenderSink + ?Sized,
    {
        if self.store.is_empty() {
            return Ok(Advance::Idle);
        }

        let was_hidden = self.state.visibility == Visibility::Hidden;
        if was_hidden {
            self.state.cursor = 0;
        }

        if self.state.cursor >= self.store.len() {
            tracing::debug!("last scene shown; hiding overlay");
            self.state.cursor = 0;
            self.hide_overlay(sink, animation_ms)?;
            return Ok(Advance::Finished);
        }

        let index = self.state.cursor;
        if let Some(scene) = self.store.get(index) {
            resolve_scene(&mut self.state.active, scene, &self.config);
        }
        self.state.cursor += 1;
        tracing::debug!(index, "showing scene");

        let rendered = self.render(tree, sink);
        if was_hidden {
            self.enter_visible(sink, animation_ms)?;
        }
        rendered.map(|_| Advance::Shown { index })
    }

    /// Render the active fields and make the overlay visible. No-op while already visible.
    ///
    /// Returns whether the visibility changed.
    #[tracing::instrument(skip(self, tree, sink))]
    pub fn show_overlay<T, S>(
        &mut self,
        tree: &T,
        sink: &mut S,
        animation_ms: i64,
    ) -> CoachmarkResult<bool>
    where
        T: ElementTree + ?Sized,
        S: RenderSink + ?Sized,
    {
        if self.state.visibility == Visibility::Visible {
            return Ok(false);
        }
        self.state.cursor = 0;
        let rendered = self.render(tree, sink);
        self.enter_visible(sink, animation_ms)?;
        rendered.map(|_| true)
    }

    /// Hide the overlay, keeping its settings. No-op while already hidden.
    ///
    /// With a fade, the drawn visibility is committed later through [`Sequencer::commit`].
    /// Returns whether the visibility changed.
    #[tracing::instrument(skip(self, sink))]
    pub fn hide_overlay<S>(&mut self, sink: &mut S, animation_ms: i64) -> CoachmarkResult<bool>
    where
        S: RenderSink + ?Sized,
    {
        if self.state.visibility == Visibility::Hidden {
            return Ok(false);
        }
        self.state.visibility = Visibility::Hidden;

        match fade_duration(animation_ms) {
            None => {
                self.pending = None;
                sink.commit_visibility(Visibility::Hidden)?;
            }
            Some(delay_ms) => {
                sink.fade(&Fade::fade_out(delay_ms, self.config.fade_ease))?;
                let token = CommitToken(self.next_token);
                self.next_token += 1;
                self.pending = Some(token);
                sink.schedule_commit(PendingCommit { token, delay_ms })?;
            }
        }
        Ok(true)
    }

    /// Deliver a delayed hide scheduled by [`Sequencer::hide_overlay`].
    ///
    /// Stale tokens (the overlay was shown again, or hidden again, since) are ignored.
    /// Returns whether the commit was applied.
    pub fn commit<S>(&mut self, sink: &mut S, token: CommitToken) -> CoachmarkResult<bool>
    where
        S: RenderSink + ?Sized,
    {
        if self.pending != Some(token) || self.state.visibility != Visibility::Hidden {
            tracing::debug!(?token, "ignoring stale visibility commit");
            return Ok(false);
        }
        self.pending = None;
        sink.commit_visibility(Visibility::Hidden)?;
        Ok(true)
    }

    /// Re-render the active fields regardless of visibility.
    pub fn update_overlay<T, S>(&mut self, tree: &T, sink: &mut S) -> CoachmarkResult<OverlayFrame>
    where
        T: ElementTree + ?Sized,
        S: RenderSink + ?Sized,
    {
        self.render(tree, sink)
    }

    /// Re-resolve the current scene's placement after the host moved the target or resized
    /// the viewport. Does not move the cursor; does nothing while hidden.
    pub fn on_geometry_changed<T, S>(
        &mut self,
        tree: &T,
        sink: &mut S,
    ) -> CoachmarkResult<Option<OverlayFrame>>
    where
        T: ElementTree + ?Sized,
        S: RenderSink + ?Sized,
    {
        if self.state.visibility == Visibility::Hidden {
            return Ok(None);
        }
        self.render(tree, sink).map(Some)
    }

    fn check_anchor(&self, target: Option<ElementHandle>) -> CoachmarkResult<()> {
        match target {
            Some(el) if el == self.container => Err(CoachmarkError::AnchorIsContainer(el)),
            _ => Ok(()),
        }
    }

    fn enter_visible<S>(&mut self, sink: &mut S, animation_ms: i64) -> CoachmarkResult<()>
    where
        S: RenderSink + ?Sized,
    {
        self.pending = None;
        self.state.visibility = Visibility::Visible;
        sink.commit_visibility(Visibility::Visible)?;
        if let Some(ms) = fade_duration(animation_ms) {
            sink.fade(&Fade::fade_in(ms, self.config.fade_ease))?;
        }
        Ok(())
    }

    fn snapshot<T>(&self, tree: &T) -> CoachmarkResult<GeometrySnapshot>
    where
        T: ElementTree + ?Sized,
    {
        let active = &self.state.active;
        let viewport = tree.viewport();
        let (window, scale) = match active.anchor() {
            Anchor::Manual(rect) => (rect, Vec2::new(1.0, 1.0)),
            Anchor::Element(el) => {
                let unavailable = || CoachmarkError::SceneUnavailable {
                    index: self.state.cursor.saturating_sub(1),
                    element: el,
                };
                if tree.element_visibility(el) == ElementVisibility::Detached {
                    tracing::warn!(?el, "anchor element is detached");
                    return Err(unavailable());
                }
                let rect = tree.element_rect(el).ok_or_else(unavailable)?;
                (rect, inherited_scale(tree, el)?)
            }
        };
        let label = tree.measure_label(&active.label_text, active.max_width);
        Ok(GeometrySnapshot {
            viewport,
            window,
            scale,
            label,
        })
    }

    fn render<T, S>(&self, tree: &T, sink: &mut S) -> CoachmarkResult<OverlayFrame>
    where
        T: ElementTree + ?Sized,
        S: RenderSink + ?Sized,
    {
        let snap = self.snapshot(tree)?;
        if snap.viewport.occludes(snap.window) {
            tracing::warn!(window = ?snap.window, "anchor is clipped by the viewport");
        }

        let req = PlacementRequest {
            target: snap.window,
            label: snap.label,
            viewport: snap.viewport.size(),
        };
        let placement = place_label(&req, snap.scale)?;

        let active = &self.state.active;
        let frame = OverlayFrame {
            label_text: active.label_text.clone(),
            wrap_width: active.max_width,
            background: active.color,
            window: snap.window,
            label_origin: placement.origin,
            side: placement.side,
        };
        sink.render(&frame)?;
        Ok(frame)
    }
}

fn resolve_scene(active: &mut ActiveScene, scene: &Scene, config: &OverlayConfig) {
    active.label_text = scene.label().to_string();
    active.color = scene.background().resolve(config.default_label_color);
    active.max_width = scene.max_label_width();
    match scene.anchor() {
        Anchor::Element(el) => active.target = Some(el),
        Anchor::Manual(rect) => {
            active.target = None;
            active.manual = rect;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/sequencer.rs"]
mod tests;
