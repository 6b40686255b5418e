use nalgebra::Vector2;

use super::state::{DepthState, Sample};
use super::{depth_drag_factor, Ascent, Dynamics};
use crate::sim::termination::SurfacingPolicy;
use crate::vehicle::AscentParams;

// ---------------------------------------------------------------------------
// Buoyant ascent: depth-only equations of motion
// ---------------------------------------------------------------------------

/// Passive ascent under buoyancy and depth-scaled linear drag.
///
/// State is `[y, z]`:
///   dy/dt = z
///   dz/dt = g (rho0/rho1 - 1) - (eta k)/(rho1 V) (1 + alpha |y|/|H|) z
///
/// Horizontal position is not integrated; it drifts at `horizontal_speed`.
#[derive(Debug, Clone)]
pub struct BuoyantAscent {
    params: AscentParams,
}

impl BuoyantAscent {
    pub fn new(params: AscentParams) -> Self {
        Self { params }
    }

    /// Net buoyancy acceleration `g (rho0/rho1 - 1)`.
    pub fn buoyancy_accel(&self) -> f64 {
        let p = &self.params;
        p.gravity * (p.water_density / p.hull_density - 1.0)
    }

    /// Drag deceleration at depth `y` and vertical velocity `z`.
    pub fn drag_accel(&self, y: f64, z: f64) -> f64 {
        let p = &self.params;
        (p.viscosity * p.drag_coeff) / (p.hull_density * p.volume)
            * depth_drag_factor(p.depth_coeff, y, p.initial_depth)
            * z
    }
}

impl Dynamics<2> for BuoyantAscent {
    fn derivatives(&self, _t: f64, state: &DepthState) -> DepthState {
        let (y, z) = (state[0], state[1]);
        Vector2::new(z, self.buoyancy_accel() - self.drag_accel(y, z))
    }
}

impl Ascent<2> for BuoyantAscent {
    fn initial_state(&self) -> DepthState {
        Vector2::new(self.params.initial_depth, 0.0)
    }

    fn depth(&self, state: &DepthState) -> f64 {
        state[0]
    }

    fn kinematic_speed(&self) -> f64 {
        self.params.horizontal_speed
    }

    fn default_policy(&self) -> SurfacingPolicy {
        SurfacingPolicy::PostCheck
    }

    fn sample(&self, time: f64, drift_x: f64, state: &DepthState) -> Sample {
        Sample {
            time,
            x: drift_x,
            y: state[0],
            vx: self.params.horizontal_speed,
            vy: state[1],
            mass: self.params.mass(),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn reference() -> BuoyantAscent {
        BuoyantAscent::new(AscentParams::default())
    }

    #[test]
    fn at_rest_only_buoyancy_acts() {
        let m = reference();
        let d = m.derivatives(0.0, &Vector2::new(-50.0, 0.0));
        assert_eq!(d[0], 0.0);
        assert_relative_eq!(d[1], 9.81 * (1025.0 / 1000.0 - 1.0), max_relative = 1e-12);
    }

    #[test]
    fn drag_opposes_ascent() {
        let m = reference();
        let still = m.derivatives(0.0, &Vector2::new(-20.0, 0.0));
        let rising = m.derivatives(0.0, &Vector2::new(-20.0, 2.0));
        assert_eq!(rising[0], 2.0);
        assert!(rising[1] < still[1], "drag should slow a rising hull");
    }

    #[test]
    fn drag_is_stronger_at_depth() {
        let m = BuoyantAscent::new(AscentParams { depth_coeff: 1.0, ..AscentParams::default() });
        let shallow = m.drag_accel(-5.0, 1.0);
        let deep = m.drag_accel(-50.0, 1.0);
        assert_relative_eq!(deep / shallow, 2.0 / 1.1, max_relative = 1e-12);
    }

    #[test]
    fn heavy_hull_sinks() {
        let m = BuoyantAscent::new(AscentParams { hull_density: 1100.0, ..AscentParams::default() });
        assert!(m.buoyancy_accel() < 0.0);
    }

    #[test]
    fn time_does_not_enter() {
        let m = reference();
        let s = Vector2::new(-10.0, 0.5);
        assert_eq!(m.derivatives(0.0, &s), m.derivatives(123.0, &s));
    }

    #[test]
    fn sample_carries_drift_and_mass() {
        let m = reference();
        let s = m.sample(1.0, 4.0, &Vector2::new(-49.0, 0.3));
        assert_eq!(s.x, 4.0);
        assert_eq!(s.vx, 4.0);
        assert_eq!(s.vy, 0.3);
        assert_eq!(s.mass, 100_000.0);
    }
}
