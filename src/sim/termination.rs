use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Surfacing policies
// ---------------------------------------------------------------------------

/// When the runner tests for the surface relative to each RK4 step.
///
/// Each model has its own default; either policy can be forced through
/// `SimConfig::policy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurfacingPolicy {
    /// Step while `t < max_time`, stop right after a step that ends with
    /// `y >= 0`. Always takes at least one step and may overshoot the
    /// surface by up to one step.
    PostCheck,
    /// Step while `t < max_time && y < 0`. Never takes a step that starts
    /// at or above the surface.
    PreCheck,
}

impl SurfacingPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            SurfacingPolicy::PostCheck => "post-check",
            SurfacingPolicy::PreCheck => "pre-check",
        }
    }
}

impl fmt::Display for SurfacingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

// ---------------------------------------------------------------------------
// Run outcome
// ---------------------------------------------------------------------------

/// How a run ended. Neither outcome is an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum Termination {
    /// Depth reached `y >= 0` at `time`.
    Surfaced { time: f64 },
    /// The time bound ran out while still submerged.
    TimeLimit { time: f64, max_time: f64 },
}

impl Termination {
    pub fn surfaced(&self) -> bool {
        matches!(self, Termination::Surfaced { .. })
    }

    pub fn time_to_surface(&self) -> Option<f64> {
        match *self {
            Termination::Surfaced { time } => Some(time),
            Termination::TimeLimit { .. } => None,
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Termination::Surfaced { time } => write!(f, "Time to surface: {:.2} s", time),
            Termination::TimeLimit { max_time, .. } => {
                write!(f, "Surface not reached within {:.2} s", max_time)
            }
        }
    }
}
