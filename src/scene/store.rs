use crate::scene::model::Scene;

/// Ordered, append-only list of scenes.
///
/// No deduplication: scenes may repeat anchors or text.
#[derive(Clone, Debug, Default)]
pub struct SceneStore {
    scenes: Vec<Scene>,
}

impl SceneStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scene to the end of the queue.
    pub fn add_scene(&mut self, scene: Scene) {
        self.scenes.push(scene);
    }

    /// Drop every scene.
    pub fn clear_scene_list(&mut self) {
        self.scenes.clear();
    }

    /// A copy of the current scene list; changing it does not affect the store.
    pub fn scenes(&self) -> Vec<Scene> {
        self.scenes.clone()
    }

    /// Borrow the scene at `index`.
    pub fn get(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the store holds no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl FromIterator<Scene> for SceneStore {
    fn from_iter<I: IntoIterator<Item = Scene>>(iter: I) -> Self {
        Self {
            scenes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/store.rs"]
mod tests;
