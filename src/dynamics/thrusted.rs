use nalgebra::{Vector2, Vector4};

use super::state::{PlanarState, Sample, MIN_MASS_FLOOR};
use super::{depth_drag_factor, Ascent, Dynamics};
use crate::sim::termination::SurfacingPolicy;
use crate::vehicle::ThrustParams;

// ---------------------------------------------------------------------------
// Thrust-assisted ascent: planar equations of motion with mass loss
// ---------------------------------------------------------------------------

/// Planar ascent under buoyancy, gravity, per-axis drag and a fixed thrust
/// vector, while ballast is ejected at a constant rate.
///
/// State is `[x, y, vx, vy]`. Time enters through the remaining mass.
#[derive(Debug, Clone)]
pub struct ThrustedAscent {
    params: ThrustParams,
}

impl ThrustedAscent {
    pub fn new(params: ThrustParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ThrustParams {
        &self.params
    }

    /// Remaining mass `max(rho1_0 V - mu t, MIN_MASS_FLOOR)`.
    pub fn mass_at(&self, t: f64) -> f64 {
        let p = &self.params;
        (p.initial_density * p.volume - p.ballast_rate * t).max(MIN_MASS_FLOOR)
    }

    /// Instantaneous vehicle density `m(t) / V`.
    pub fn density_at(&self, t: f64) -> f64 {
        self.mass_at(t) / self.params.volume
    }

    /// Thrust vector `[F cos(theta), F sin(theta)]`, theta in degrees.
    pub fn thrust_vector(&self) -> Vector2<f64> {
        let theta = self.params.thrust_angle_deg.to_radians();
        Vector2::new(
            self.params.thrust * theta.cos(),
            self.params.thrust * theta.sin(),
        )
    }

    /// Net force on the vehicle at time `t` (N).
    pub fn net_force(&self, t: f64, state: &PlanarState) -> Vector2<f64> {
        let p = &self.params;
        let (y, vx, vy) = (state[1], state[2], state[3]);

        // --- Buoyancy and weight ---
        let f_buoyant = p.water_density * p.volume * p.gravity;
        let f_weight = self.density_at(t) * p.volume * p.gravity;

        // --- Drag magnitudes, depth scaling on the vertical axis only ---
        let drag_x = p.viscosity * p.drag_coeff * vx.abs();
        let drag_y = p.viscosity
            * p.drag_coeff
            * depth_drag_factor(p.depth_coeff, y, p.initial_depth)
            * vy.abs();

        let thrust = self.thrust_vector();

        Vector2::new(
            thrust.x - vx.signum() * drag_x,
            (f_buoyant - f_weight) + thrust.y - vy.signum() * drag_y,
        )
    }
}

impl Dynamics<4> for ThrustedAscent {
    fn derivatives(&self, t: f64, state: &PlanarState) -> PlanarState {
        let mass = self.mass_at(t);
        let force = self.net_force(t, state);
        Vector4::new(state[2], state[3], force.x / mass, force.y / mass)
    }
}

impl Ascent<4> for ThrustedAscent {
    fn initial_state(&self) -> PlanarState {
        Vector4::new(0.0, self.params.initial_depth, 0.0, 0.0)
    }

    fn depth(&self, state: &PlanarState) -> f64 {
        state[1]
    }

    fn default_policy(&self) -> SurfacingPolicy {
        SurfacingPolicy::PreCheck
    }

    fn sample(&self, time: f64, _drift_x: f64, state: &PlanarState) -> Sample {
        Sample {
            time,
            x: state[0],
            y: state[1],
            vx: state[2],
            vy: state[3],
            mass: self.mass_at(time),
        }
    }
}
