use crate::host::tree::ElementHandle;

/// Convenience result type used across coachmark.
pub type CoachmarkResult<T> = Result<T, CoachmarkError>;

/// Top-level error taxonomy used by overlay APIs.
#[derive(thiserror::Error, Debug)]
pub enum CoachmarkError {
    /// Invalid user-provided scene or configuration data, rejected at construction time.
    #[error("validation error: {0}")]
    Validation(String),

    /// An anchor was set to the overlay's own container element.
    #[error("anchor {0:?} is the overlay container")]
    AnchorIsContainer(ElementHandle),

    /// The anchor element of a scene is detached from the host tree.
    #[error("scene {index} unavailable: element {element:?} is detached")]
    SceneUnavailable {
        /// Queue index of the scene that could not be resolved.
        index: usize,
        /// The detached element.
        element: ElementHandle,
    },

    /// The placement state engine ran past its transition budget.
    #[error("solver error: {0}")]
    Solver(String),

    /// The host tree answered inconsistently (for example a parent cycle).
    #[error("host error: {0}")]
    Host(String),

    /// Errors when serializing or deserializing scripts and configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoachmarkError {
    /// Build a [`CoachmarkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CoachmarkError::Solver`] value.
    pub fn solver(msg: impl Into<String>) -> Self {
        Self::Solver(msg.into())
    }

    /// Build a [`CoachmarkError::Host`] value.
    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }

    /// Build a [`CoachmarkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether the tutorial may keep going after this error.
    ///
    /// Only a detached anchor is recoverable: the host can skip to the next scene or abort.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::SceneUnavailable { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
