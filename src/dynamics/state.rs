use nalgebra::{Vector2, Vector4};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Smallest mass (kg) the thrusted model will divide by once the ballast
/// budget is spent. `m(t) = max(rho1_0 * V - mu * t, MIN_MASS_FLOOR)`.
pub const MIN_MASS_FLOOR: f64 = 1e-5;

// ---------------------------------------------------------------------------
// Integrated state vectors
// ---------------------------------------------------------------------------

/// Depth-only state `[y, z]`: depth (m, negative below the surface) and
/// vertical velocity (m/s).
pub type DepthState = Vector2<f64>;

/// Planar state `[x, y, vx, vy]`.
pub type PlanarState = Vector4<f64>;

// ---------------------------------------------------------------------------
// Trajectory snapshot
// ---------------------------------------------------------------------------

/// One trajectory point, recorded at the start of a run and after every
/// accepted step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub time: f64, // s
    pub x: f64,    // m, horizontal position
    pub y: f64,    // m, depth (0 = surface)
    pub vx: f64,   // m/s
    pub vy: f64,   // m/s
    pub mass: f64, // kg
}

impl Sample {
    pub fn speed(&self) -> f64 {
        Vector2::new(self.vx, self.vy).norm()
    }

    pub fn is_surfaced(&self) -> bool {
        self.y >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_is_planar_norm() {
        let s = Sample { time: 0.0, x: 0.0, y: -1.0, vx: 3.0, vy: 4.0, mass: 1.0 };
        assert!((s.speed() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn surface_counts_as_surfaced() {
        let s = Sample { time: 1.0, x: 0.0, y: 0.0, vx: 0.0, vy: 0.1, mass: 1.0 };
        assert!(s.is_surfaced());
        let below = Sample { y: -1e-9, ..s };
        assert!(!below.is_surfaced());
    }
}
