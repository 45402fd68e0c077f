use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    foundation::core::{Rect, Rgba8, Vec2, Viewport},
    foundation::error::{CoachmarkError, CoachmarkResult},
    host::memory::{MemoryElement, MemoryTree},
    host::tree::{ElementHandle, ElementVisibility},
    overlay::config::OverlayConfig,
    overlay::sequencer::Sequencer,
    scene::model::{LabelBackground, ManualRect, Scene},
};

/// A tutorial described as JSON: configuration, a headless host fixture, and the scene list.
///
/// ```json
/// {
///   "config": { "default_label_color": "#202020e0" },
///   "host": {
///     "viewport": { "width": 400, "height": 800 },
///     "container": "overlay",
///     "elements": [
///       { "name": "root", "rect": { "x": 0, "y": 0, "width": 400, "height": 800 } },
///       { "name": "overlay", "rect": { "x": 0, "y": 0, "width": 400, "height": 800 }, "parent": "root" },
///       { "name": "save", "rect": { "x": 20, "y": 20, "width": 60, "height": 20 }, "parent": "root" }
///     ]
///   },
///   "scenes": [
///     { "label": "Saves your work", "anchor": { "element": "save" } },
///     { "label": "Free space", "anchor": { "rect": { "x": 100, "y": 300, "width": 50, "height": 50 } } }
///   ]
/// }
/// ```
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TutorialScript {
    /// Sequencer defaults.
    #[serde(default)]
    pub config: OverlayConfig,
    /// Host fixture the scenes refer to by element name.
    pub host: HostFixture,
    /// Scenes in queue order.
    #[serde(default)]
    pub scenes: Vec<SceneSpec>,
}

/// In-memory host described by name.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HostFixture {
    /// Viewport size.
    pub viewport: Viewport,
    /// Name of the overlay's own container element.
    pub container: String,
    /// Elements; a parent must be listed before its children.
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
    /// Label glyph advance override.
    #[serde(default)]
    pub glyph_advance: Option<f64>,
    /// Label line height override.
    #[serde(default)]
    pub line_height: Option<f64>,
}

/// One named element of a [`HostFixture`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ElementSpec {
    /// Unique element name.
    pub name: String,
    /// Laid-out rectangle.
    pub rect: RectSpec,
    /// Own scale.
    #[serde(default = "unit_scale")]
    pub scale: Vec2,
    /// Name of the containing element.
    #[serde(default)]
    pub parent: Option<String>,
    /// Reported visibility.
    #[serde(default)]
    pub visibility: ElementVisibility,
}

/// Rectangle as origin plus size.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RectSpec {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl From<RectSpec> for Rect {
    fn from(r: RectSpec) -> Self {
        Rect::new(r.x, r.y, r.x + r.width, r.y + r.height)
    }
}

/// One scene of a [`TutorialScript`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneSpec {
    /// Label text.
    pub label: String,
    /// Element name or manual rectangle.
    pub anchor: AnchorSpec,
    /// Label wrap width (`0` means unconstrained).
    #[serde(default)]
    pub max_label_width: u32,
    /// Label background; absent means the configured default.
    #[serde(default)]
    pub background: Option<Rgba8>,
}

/// Scene anchor as written in JSON.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorSpec {
    /// `{ "element": "name" }`
    Element(String),
    /// `{ "rect": { "x", "y", "width", "height" } }`
    Rect(ManualRect),
}

fn unit_scale() -> Vec2 {
    Vec2::new(1.0, 1.0)
}

/// A script turned into live objects.
#[derive(Debug)]
pub struct LoadedScript {
    /// The host fixture.
    pub tree: MemoryTree,
    /// Element handles by fixture name.
    pub names: BTreeMap<String, ElementHandle>,
    /// Hidden sequencer holding every scene.
    pub sequencer: Sequencer,
}

impl TutorialScript {
    /// Parse a script from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CoachmarkResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CoachmarkError::serde(format!("parse tutorial script JSON: {e}")))
    }

    /// Parse a script from a JSON string.
    pub fn from_json_str(s: &str) -> CoachmarkResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a script from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CoachmarkResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CoachmarkError::Other(
                anyhow::Error::new(e)
                    .context(format!("open tutorial script '{}'", path.display())),
            )
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Build the host fixture and a sequencer holding every scene.
    ///
    /// Scenes go through the same construction checks as programmatic scenes.
    pub fn load(&self) -> CoachmarkResult<LoadedScript> {
        let host = &self.host;
        let viewport = Viewport::new(host.viewport.width, host.viewport.height)?;
        let mut tree = MemoryTree::new(viewport);
        if let (Some(advance), Some(line)) = (host.glyph_advance, host.line_height) {
            tree = tree.with_glyph_metrics(advance, line);
        }

        let mut names = BTreeMap::<String, ElementHandle>::new();
        for spec in &host.elements {
            if names.contains_key(&spec.name) {
                return Err(CoachmarkError::validation(format!(
                    "duplicate element name '{}'",
                    spec.name
                )));
            }
            let parent = match &spec.parent {
                None => None,
                Some(p) => Some(lookup(&names, p, "parent")?),
            };
            let handle = tree.insert_element(MemoryElement {
                rect: spec.rect.into(),
                scale: spec.scale,
                parent,
                visibility: spec.visibility,
            });
            names.insert(spec.name.clone(), handle);
        }

        let container = lookup(&names, &host.container, "container")?;
        let mut sequencer = Sequencer::new(container, self.config.clone())?;
        for (idx, spec) in self.scenes.iter().enumerate() {
            let scene = match &spec.anchor {
                AnchorSpec::Element(name) => {
                    Scene::anchored(spec.label.clone(), lookup(&names, name, "anchor")?)
                }
                AnchorSpec::Rect(rect) => Scene::manual(spec.label.clone(), *rect, viewport)
                    .map_err(|e| CoachmarkError::validation(format!("scene {idx}: {e}")))?,
            }
            .with_max_label_width(spec.max_label_width)
            .with_background(LabelBackground::from(spec.background));
            sequencer.add_scene(scene)?;
        }

        Ok(LoadedScript {
            tree,
            names,
            sequencer,
        })
    }
}

fn lookup(
    names: &BTreeMap<String, ElementHandle>,
    name: &str,
    role: &str,
) -> CoachmarkResult<ElementHandle> {
    names
        .get(name)
        .copied()
        .ok_or_else(|| CoachmarkError::validation(format!("unknown {role} element '{name}'")))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/script.rs"]
mod tests;
