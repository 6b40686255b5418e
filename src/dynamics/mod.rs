pub mod state;
pub mod buoyant;
pub mod thrusted;

use nalgebra::SVector;

use crate::sim::termination::SurfacingPolicy;

pub use buoyant::BuoyantAscent;
pub use state::{DepthState, PlanarState, Sample, MIN_MASS_FLOOR};
pub use thrusted::ThrustedAscent;

// ---------------------------------------------------------------------------
// ODE right-hand side
// ---------------------------------------------------------------------------

/// Right-hand side of a fixed-arity ODE system `ds/dt = f(t, s)`.
///
/// Implementations are pure: the same `(t, state)` always yields the same
/// derivative, and nothing is retained between calls.
pub trait Dynamics<const N: usize> {
    fn derivatives(&self, t: f64, state: &SVector<f64, N>) -> SVector<f64, N>;
}

/// A submerged vehicle that the runner carries from its start depth toward
/// the surface.
pub trait Ascent<const N: usize>: Dynamics<N> {
    fn initial_state(&self) -> SVector<f64, N>;

    /// Vertical position (m) read out of the integrated state.
    fn depth(&self, state: &SVector<f64, N>) -> f64;

    /// Horizontal speed advanced outside the RK4 update (`x' = x + v * h`).
    /// Zero when `x` is part of the integrated state.
    fn kinematic_speed(&self) -> f64 {
        0.0
    }

    fn default_policy(&self) -> SurfacingPolicy;

    fn sample(&self, time: f64, drift_x: f64, state: &SVector<f64, N>) -> Sample;
}

/// Drag growth with normalized depth: `1 + alpha * |y| / |H|`.
///
/// `H = 0` is not guarded; the resulting non-finite value is reported by the
/// runner.
pub fn depth_drag_factor(alpha: f64, y: f64, initial_depth: f64) -> f64 {
    1.0 + alpha * y.abs() / initial_depth.abs()
}
