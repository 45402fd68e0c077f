/// Easing curve applied to fade progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant rate.
    #[default]
    Linear,
    /// Slow start.
    InQuad,
    /// Slow finish.
    OutQuad,
    /// Slow start and finish.
    InOutQuad,
    /// Fast start, long tail.
    OutCubic,
}

impl Ease {
    /// Map linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Opacity animation handed to the host.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Fade {
    /// Starting opacity in `[0, 1]`.
    pub from: f64,
    /// Final opacity in `[0, 1]`.
    pub to: f64,
    /// Animation length.
    pub duration_ms: u64,
    /// Progress curve.
    pub ease: Ease,
}

impl Fade {
    /// Transparent to opaque.
    pub fn fade_in(duration_ms: u64, ease: Ease) -> Self {
        Self {
            from: 0.0,
            to: 1.0,
            duration_ms,
            ease,
        }
    }

    /// Opaque to transparent.
    pub fn fade_out(duration_ms: u64, ease: Ease) -> Self {
        Self {
            from: 1.0,
            to: 0.0,
            duration_ms,
            ease,
        }
    }

    /// Opacity `elapsed_ms` after the fade started. Holds `to` once the fade is over.
    pub fn opacity_at(&self, elapsed_ms: u64) -> f64 {
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms {
            return self.to;
        }
        let t = elapsed_ms as f64 / self.duration_ms as f64;
        self.from + (self.to - self.from) * self.ease.apply(t)
    }
}

/// Convert a host-supplied duration into a fade length; `<= 0` means no animation.
pub(crate) fn fade_duration(duration_ms: i64) -> Option<u64> {
    u64::try_from(duration_ms).ok().filter(|&ms| ms > 0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/fade.rs"]
mod tests;
