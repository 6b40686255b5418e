pub mod integrator;
pub mod runner;
pub mod termination;

pub use integrator::rk4_step;
pub use runner::{simulate, simulate_ascent, simulate_thrusted, Run};
pub use termination::{SurfacingPolicy, Termination};
