use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

// ---------------------------------------------------------------------------
// Buoyant ascent parameters (depth-only model)
// ---------------------------------------------------------------------------

/// Physical constants for one buoyant-ascent run. Read-only while integrating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AscentParams {
    #[serde(alias = "rho0")]
    pub water_density: f64, // kg/m^3
    #[serde(alias = "rho1")]
    pub hull_density: f64, // kg/m^3
    #[serde(alias = "V")]
    pub volume: f64, // m^3
    #[serde(alias = "eta")]
    pub viscosity: f64, // Pa·s
    #[serde(alias = "k")]
    pub drag_coeff: f64,
    #[serde(alias = "alpha")]
    pub depth_coeff: f64,
    #[serde(alias = "H")]
    pub initial_depth: f64, // m, negative below the surface
    #[serde(alias = "g")]
    pub gravity: f64, // m/s^2
    #[serde(alias = "v")]
    pub horizontal_speed: f64, // m/s, constant drift
}

impl Default for AscentParams {
    fn default() -> Self {
        Self {
            water_density: 1025.0,
            hull_density: 1000.0,
            volume: 100.0,
            viscosity: 0.001,
            drag_coeff: 0.5,
            depth_coeff: 0.01,
            initial_depth: -50.0,
            gravity: 9.81,
            horizontal_speed: 4.0,
        }
    }
}

impl AscentParams {
    /// Vehicle mass, constant over the run.
    pub fn mass(&self) -> f64 {
        self.hull_density * self.volume
    }

    pub fn validate(&self) -> SimResult<()> {
        check_range("rho0", self.water_density, 800.0..=1200.0)?;
        check_range("rho1", self.hull_density, 800.0..=2000.0)?;
        check_hull(self.volume, self.viscosity, self.drag_coeff, self.depth_coeff)?;
        check_depth(self.initial_depth)?;
        check_range("g", self.gravity, 9.0..=10.0)?;
        check_range("v", self.horizontal_speed, 0.1..=100.0)
    }
}

// ---------------------------------------------------------------------------
// Thrust-assisted ascent parameters (planar model with ballast ejection)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThrustParams {
    #[serde(alias = "rho0")]
    pub water_density: f64, // kg/m^3
    #[serde(alias = "rho1_0", alias = "rho1")]
    pub initial_density: f64, // kg/m^3, vehicle + ballast at t = 0
    #[serde(alias = "V")]
    pub volume: f64, // m^3
    #[serde(alias = "eta")]
    pub viscosity: f64,
    #[serde(alias = "k")]
    pub drag_coeff: f64,
    #[serde(alias = "alpha")]
    pub depth_coeff: f64,
    #[serde(alias = "H")]
    pub initial_depth: f64, // m
    #[serde(alias = "g")]
    pub gravity: f64, // m/s^2
    #[serde(alias = "mu")]
    pub ballast_rate: f64, // kg/s ejected
    #[serde(alias = "F_thrust")]
    pub thrust: f64, // N
    #[serde(alias = "theta")]
    pub thrust_angle_deg: f64, // deg from horizontal
}

impl Default for ThrustParams {
    fn default() -> Self {
        Self {
            water_density: 1025.0,
            initial_density: 1040.0,
            volume: 100.0,
            viscosity: 0.001,
            drag_coeff: 0.5,
            depth_coeff: 0.01,
            initial_depth: -50.0,
            gravity: 9.81,
            ballast_rate: 100.0,
            thrust: 50_000.0,
            thrust_angle_deg: 60.0,
        }
    }
}

impl ThrustParams {
    /// Vehicle + ballast mass at ignition.
    pub fn initial_mass(&self) -> f64 {
        self.initial_density * self.volume
    }

    /// Time at which the unclamped mass `rho1_0 * V - mu * t` reaches zero.
    pub fn depletion_time(&self) -> Option<f64> {
        (self.ballast_rate > 0.0).then(|| self.initial_mass() / self.ballast_rate)
    }

    pub fn validate(&self) -> SimResult<()> {
        check_range("rho0", self.water_density, 800.0..=1200.0)?;
        check_range("rho1_0", self.initial_density, 800.0..=2000.0)?;
        check_hull(self.volume, self.viscosity, self.drag_coeff, self.depth_coeff)?;
        check_depth(self.initial_depth)?;
        check_range("g", self.gravity, 9.0..=10.0)?;
        check_range("mu", self.ballast_rate, 0.0..=10_000.0)?;
        check_range("F_thrust", self.thrust, 0.0..=1e7)?;
        check_range("theta", self.thrust_angle_deg, -180.0..=180.0)
    }
}

// ---------------------------------------------------------------------------
// Range checks
// ---------------------------------------------------------------------------

pub(crate) fn check_range(
    name: &'static str,
    value: f64,
    range: RangeInclusive<f64>,
) -> SimResult<()> {
    if value.is_finite() && range.contains(&value) {
        Ok(())
    } else {
        Err(SimError::InvalidParameter {
            name,
            value,
            expected: format!("{}..={}", range.start(), range.end()),
        })
    }
}

fn check_hull(volume: f64, viscosity: f64, drag_coeff: f64, depth_coeff: f64) -> SimResult<()> {
    check_range("V", volume, 0.01..=100.0)?;
    check_range("eta", viscosity, 0.00001..=1.0)?;
    check_range("k", drag_coeff, 0.1..=100.0)?;
    check_range("alpha", depth_coeff, 0.0..=100.0)
}

fn check_depth(depth: f64) -> SimResult<()> {
    if depth.is_finite() && depth < 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidParameter {
            name: "H",
            value: depth,
            expected: "a negative depth (below the surface)".into(),
        })
    }
}

// ---------------------------------------------------------------------------
// Preset vehicles
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// Brackish water, heavier hull: weaker buoyancy, longer ascent.
    pub fn brackish_ascent() -> AscentParams {
        AscentParams {
            water_density: 1010.0,
            hull_density: 1002.0,
            initial_depth: -120.0,
            depth_coeff: 0.5,
            ..AscentParams::default()
        }
    }

    /// Negatively buoyant hull that needs thrust and ballast blow to surface.
    pub fn ballast_blow() -> ThrustParams {
        ThrustParams::default()
    }

    /// Vertical thrust only, no ballast ejection.
    pub fn vertical_thruster() -> ThrustParams {
        ThrustParams {
            ballast_rate: 0.0,
            thrust_angle_deg: 90.0,
            ..ThrustParams::default()
        }
    }
}
