use nalgebra::SVector;

use super::integrator::rk4_step;
use super::termination::{SurfacingPolicy, Termination};
use crate::config::SimConfig;
use crate::dynamics::{Ascent, BuoyantAscent, Sample, ThrustedAscent};
use crate::error::{SimError, SimResult};
use crate::vehicle::{AscentParams, ThrustParams};

// ---------------------------------------------------------------------------
// Run result
// ---------------------------------------------------------------------------

/// Trajectory plus terminal status of one run.
///
/// Only the runner builds one, so the trajectory always holds at least the
/// initial condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    /// Initial condition first, then one sample per accepted step.
    pub(crate) trajectory: Vec<Sample>,
    pub(crate) termination: Termination,
    pub(crate) policy: SurfacingPolicy,
}

impl Run {
    pub fn trajectory(&self) -> &[Sample] {
        &self.trajectory
    }

    pub fn termination(&self) -> &Termination {
        &self.termination
    }

    pub fn policy(&self) -> SurfacingPolicy {
        self.policy
    }

    pub fn steps(&self) -> usize {
        self.trajectory.len() - 1
    }

    pub fn initial(&self) -> &Sample {
        &self.trajectory[0]
    }

    pub fn last(&self) -> &Sample {
        &self.trajectory[self.trajectory.len() - 1]
    }

    pub fn surfaced(&self) -> bool {
        self.termination.surfaced()
    }

    pub fn time_to_surface(&self) -> Option<f64> {
        self.termination.time_to_surface()
    }

    pub fn status_message(&self) -> String {
        self.termination.to_string()
    }
}

// ---------------------------------------------------------------------------
// Time-stepping loop
// ---------------------------------------------------------------------------

struct Sweep<'a, A, const N: usize> {
    vehicle: &'a A,
    h: f64,
    time: f64,
    drift_x: f64,
    state: SVector<f64, N>,
    trajectory: Vec<Sample>,
}

impl<'a, A: Ascent<N>, const N: usize> Sweep<'a, A, N> {
    fn new(vehicle: &'a A, config: &SimConfig) -> Self {
        let state = vehicle.initial_state();
        let mut trajectory = Vec::with_capacity(config.max_steps().min(200_000));
        trajectory.push(vehicle.sample(0.0, 0.0, &state));
        Self {
            vehicle,
            h: config.dt,
            time: 0.0,
            drift_x: 0.0,
            state,
            trajectory,
        }
    }

    fn depth(&self) -> f64 {
        self.vehicle.depth(&self.state)
    }

    fn advance(&mut self) -> SimResult<()> {
        let next = rk4_step(self.vehicle, self.time, &self.state, self.h);
        let time = self.time + self.h;
        if next.iter().any(|v| !v.is_finite()) {
            return Err(SimError::NonFiniteState {
                step: self.trajectory.len(),
                time,
            });
        }

        self.state = next;
        self.time = time;
        self.drift_x += self.vehicle.kinematic_speed() * self.h;
        self.trajectory
            .push(self.vehicle.sample(self.time, self.drift_x, &self.state));
        Ok(())
    }
}

/// Integrate `vehicle` from its initial state until it surfaces or
/// `config.max_time` runs out.
///
/// Uses `config.policy` when set, the vehicle's own policy otherwise.
/// A non-finite state aborts the run with [`SimError::NonFiniteState`].
pub fn simulate<A: Ascent<N>, const N: usize>(vehicle: &A, config: &SimConfig) -> SimResult<Run> {
    let policy = config.policy.unwrap_or_else(|| vehicle.default_policy());
    let mut sweep: Sweep<A, N> = Sweep::new(vehicle, config);

    let surfaced = match policy {
        SurfacingPolicy::PostCheck => loop {
            if sweep.time >= config.max_time {
                break false;
            }
            sweep.advance()?;
            if sweep.depth() >= 0.0 {
                break true;
            }
        },
        SurfacingPolicy::PreCheck => {
            while sweep.time < config.max_time && sweep.depth() < 0.0 {
                sweep.advance()?;
            }
            sweep.depth() >= 0.0
        }
    };

    let termination = if surfaced {
        Termination::Surfaced { time: sweep.time }
    } else {
        Termination::TimeLimit {
            time: sweep.time,
            max_time: config.max_time,
        }
    };

    Ok(Run {
        trajectory: sweep.trajectory,
        termination,
        policy,
    })
}

pub fn simulate_ascent(params: &AscentParams, config: &SimConfig) -> SimResult<Run> {
    simulate(&BuoyantAscent::new(params.clone()), config)
}

pub fn simulate_thrusted(params: &ThrustParams, config: &SimConfig) -> SimResult<Run> {
    simulate(&ThrustedAscent::new(params.clone()), config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dt: f64, max_time: f64) -> SimConfig {
        SimConfig { dt, max_time, policy: None }
    }

    #[test]
    fn reference_ascent_surfaces() {
        let run = simulate_ascent(&AscentParams::default(), &config(0.1, 1000.0)).unwrap();
        assert!(run.surfaced());
        assert_eq!(run.policy, SurfacingPolicy::PostCheck);
        let first = run.initial();
        assert_eq!((first.time, first.x, first.y, first.vy), (0.0, 0.0, -50.0, 0.0));
        let last = run.last();
        assert!(last.y >= 0.0);
        assert!(last.time <= 1000.0);
        // Only the final sample is at or above the surface.
        assert!(run.trajectory[..run.trajectory.len() - 1].iter().all(|s| s.y < 0.0));
    }

    #[test]
    fn horizontal_drift_is_kinematic() {
        let run = simulate_ascent(&AscentParams::default(), &config(0.1, 1000.0)).unwrap();
        let mut x = 0.0;
        for s in &run.trajectory[1..] {
            x += 4.0 * 0.1;
            assert_eq!(s.x, x);
        }
    }

    #[test]
    fn sinking_hull_hits_time_limit() {
        let params = AscentParams { hull_density: 1100.0, ..AscentParams::default() };
        let run = simulate_ascent(&params, &config(0.5, 20.0)).unwrap();
        assert!(!run.surfaced());
        assert_eq!(run.termination, Termination::TimeLimit { time: 20.0, max_time: 20.0 });
        assert_eq!(run.steps(), 40);
        assert!(run.last().y < -50.0);
    }

    #[test]
    fn step_count_is_bounded() {
        let params = AscentParams { hull_density: 1100.0, ..AscentParams::default() };
        for (dt, max_time) in [(0.3, 1.0), (0.7, 10.0), (0.1, 3.0), (1.0, 1.0)] {
            let c = config(dt, max_time);
            let run = simulate_ascent(&params, &c).unwrap();
            assert!(run.steps() <= c.max_steps(), "dt={} max_time={}", dt, max_time);
            assert!(run.steps() >= 1);
        }
    }

    #[test]
    fn post_check_always_takes_a_step() {
        let params = AscentParams { initial_depth: 1.0, ..AscentParams::default() };
        let run = simulate_ascent(&params, &config(0.1, 10.0)).unwrap();
        assert_eq!(run.steps(), 1);
        assert!(run.surfaced());
    }

    #[test]
    fn pre_check_never_steps_from_the_surface() {
        let params = ThrustParams { initial_depth: 0.0, ..ThrustParams::default() };
        let run = simulate_thrusted(&params, &config(0.1, 10.0)).unwrap();
        assert_eq!(run.steps(), 0);
        assert_eq!(run.termination(), &Termination::Surfaced { time: 0.0 });
        // The initial condition alone backs both ends of the trajectory.
        assert_eq!(run.trajectory().len(), 1);
        assert_eq!(run.initial(), run.last());
    }

    #[test]
    fn policy_override_applies_to_either_model() {
        let c = SimConfig { policy: Some(SurfacingPolicy::PreCheck), ..config(0.1, 1000.0) };
        let run = simulate_ascent(&AscentParams::default(), &c).unwrap();
        assert_eq!(run.policy, SurfacingPolicy::PreCheck);
        let default = simulate_ascent(&AscentParams::default(), &config(0.1, 1000.0)).unwrap();
        // Starting submerged, both policies stop after the same step.
        assert_eq!(run.trajectory, default.trajectory);
    }

    #[test]
    fn thrusted_default_surfaces_before_ballast_runs_out() {
        let run = simulate_thrusted(&ThrustParams::default(), &config(0.05, 500.0)).unwrap();
        assert!(run.surfaced());
        assert_eq!(run.policy, SurfacingPolicy::PreCheck);
        assert!(run.last().x > 0.0, "60 degree thrust pushes the hull forward");
        assert!(run.last().mass < run.initial().mass);
        assert!(run.trajectory[..run.trajectory.len() - 1].iter().all(|s| s.y < 0.0));
    }

    #[test]
    fn zero_depth_scale_reports_non_finite_state() {
        let params = AscentParams { initial_depth: 0.0, ..AscentParams::default() };
        match simulate_ascent(&params, &config(0.1, 10.0)) {
            Err(SimError::NonFiniteState { step, .. }) => assert_eq!(step, 1),
            other => panic!("expected non-finite state, got {:?}", other),
        }
    }

    #[test]
    fn reruns_are_bit_identical() {
        let a = simulate_thrusted(&ThrustParams::default(), &config(0.1, 300.0)).unwrap();
        let b = simulate_thrusted(&ThrustParams::default(), &config(0.1, 300.0)).unwrap();
        assert_eq!(a, b);
    }
}
