use crate::{
    animation::fade::Ease,
    foundation::core::Rgba8,
    foundation::error::{CoachmarkError, CoachmarkResult},
};

/// Sequencer-wide defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Label background used by scenes without an explicit color.
    pub default_label_color: Rgba8,
    /// Label text used when the text is reset.
    pub default_label_text: String,
    /// Easing curve for fade-in and fade-out.
    pub fade_ease: Ease,
    /// Fade length used by callers that do not pick one (the CLI, scripts).
    pub default_fade_ms: i64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            default_label_color: Rgba8::new(0x21, 0x21, 0x21, 0xe6),
            default_label_text: "Tap anywhere to continue.".to_string(),
            fade_ease: Ease::OutQuad,
            default_fade_ms: 250,
        }
    }
}

impl OverlayConfig {
    /// Check field ranges.
    pub fn validate(&self) -> CoachmarkResult<()> {
        if self.default_fade_ms < 0 {
            return Err(CoachmarkError::validation("default_fade_ms must be >= 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/config.rs"]
mod tests;
