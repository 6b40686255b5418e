use surfacing_sim::sim;
use surfacing_sim::vehicle::AscentParams;
use surfacing_sim::{SimConfig, SurfacingPolicy};

/// Both surfacing checks agree for a hull that starts submerged. They only
/// part ways when the run starts at or above the surface: post-check still
/// takes one step, pre-check takes none.
fn main() -> anyhow::Result<()> {
    let params = AscentParams { initial_depth: -0.05, ..AscentParams::default() };

    for dt in [0.1, 1.0] {
        for policy in [SurfacingPolicy::PostCheck, SurfacingPolicy::PreCheck] {
            let config = SimConfig { dt, max_time: 100.0, policy: Some(policy) };
            let run = sim::simulate_ascent(&params, &config)?;
            println!(
                "dt={:<4} {:<11} steps={:<4} final depth={:>8.4} m  {}",
                dt,
                policy,
                run.steps(),
                run.last().y,
                run.status_message()
            );
        }
    }

    let at_surface = AscentParams { initial_depth: 0.5, ..AscentParams::default() };
    for policy in [SurfacingPolicy::PostCheck, SurfacingPolicy::PreCheck] {
        let config = SimConfig { policy: Some(policy), ..SimConfig::default() };
        let run = sim::simulate_ascent(&at_surface, &config)?;
        println!("start above surface, {:<11} steps={}", policy, run.steps());
    }
    Ok(())
}
