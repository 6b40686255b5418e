pub mod params;

pub use params::{presets, AscentParams, ThrustParams};
