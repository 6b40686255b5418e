pub mod config;
pub mod dynamics;
pub mod error;
pub mod io;
pub mod sim;
pub mod vehicle;

pub use config::{ModelKind, Scenario, SimConfig};
pub use error::{SimError, SimResult};
pub use sim::{simulate, simulate_ascent, simulate_thrusted, Run, SurfacingPolicy, Termination};
