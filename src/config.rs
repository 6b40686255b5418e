//! Run configuration and TOML scenario files.
//!
//! A scenario names the model, the integration settings and the physical
//! parameters. Every table and field is optional; missing values fall back
//! to the reference vehicle.
//!
//! ```toml
//! model = "thrusted"
//!
//! [simulation]
//! dt = 0.05
//! max_time = 500.0
//! policy = "pre-check"     # or "post-check"; omit for the model default
//!
//! [params]
//! rho0 = 1025.0
//! rho1_0 = 1040.0
//! mu = 100.0
//! F_thrust = 50000.0
//! theta = 60.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SimResult;
use crate::sim::runner::{simulate_ascent, simulate_thrusted, Run};
use crate::sim::termination::SurfacingPolicy;
use crate::vehicle::params::check_range;
use crate::vehicle::{AscentParams, ThrustParams};

// ---------------------------------------------------------------------------
// Integration settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    #[serde(alias = "h")]
    pub dt: f64, // s, fixed step
    pub max_time: f64, // s, hard stop
    /// Overrides the model's own surfacing policy when set.
    pub policy: Option<SurfacingPolicy>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.1,
            max_time: 1000.0,
            policy: None,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> SimResult<()> {
        check_range("h", self.dt, 0.0001..=1.0)?;
        check_range("max_time", self.max_time, 1.0..=10_000.0)
    }

    /// Upper bound on the number of steps a run can take.
    pub fn max_steps(&self) -> usize {
        ((self.max_time / self.dt).ceil() as usize).saturating_add(1)
    }
}

// ---------------------------------------------------------------------------
// Scenario files
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Ascent,
    Thrusted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "kebab-case", deny_unknown_fields)]
pub enum Scenario {
    Ascent {
        #[serde(default)]
        simulation: SimConfig,
        #[serde(default)]
        params: AscentParams,
    },
    Thrusted {
        #[serde(default)]
        simulation: SimConfig,
        #[serde(default)]
        params: ThrustParams,
    },
}

impl Scenario {
    /// Reference parameters for `kind` with default integration settings.
    pub fn defaults(kind: ModelKind) -> Self {
        match kind {
            ModelKind::Ascent => Scenario::Ascent {
                simulation: SimConfig::default(),
                params: AscentParams::default(),
            },
            ModelKind::Thrusted => Scenario::Thrusted {
                simulation: SimConfig::default(),
                params: ThrustParams::default(),
            },
        }
    }

    /// Parse and validate a TOML scenario.
    pub fn from_toml_str(text: &str) -> SimResult<Self> {
        let scenario: Scenario = toml::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            Scenario::Ascent { .. } => ModelKind::Ascent,
            Scenario::Thrusted { .. } => ModelKind::Thrusted,
        }
    }

    pub fn name(&self) -> &'static str {
        match self.kind() {
            ModelKind::Ascent => "Buoyant ascent",
            ModelKind::Thrusted => "Thrust-assisted ascent",
        }
    }

    pub fn simulation(&self) -> &SimConfig {
        match self {
            Scenario::Ascent { simulation, .. } | Scenario::Thrusted { simulation, .. } => {
                simulation
            }
        }
    }

    pub fn simulation_mut(&mut self) -> &mut SimConfig {
        match self {
            Scenario::Ascent { simulation, .. } | Scenario::Thrusted { simulation, .. } => {
                simulation
            }
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        self.simulation().validate()?;
        match self {
            Scenario::Ascent { params, .. } => params.validate(),
            Scenario::Thrusted { params, .. } => params.validate(),
        }
    }

    /// Run the scenario as is. Validation is the caller's business.
    pub fn run(&self) -> SimResult<Run> {
        match self {
            Scenario::Ascent { simulation, params } => simulate_ascent(params, simulation),
            Scenario::Thrusted { simulation, params } => simulate_thrusted(params, simulation),
        }
    }
}
