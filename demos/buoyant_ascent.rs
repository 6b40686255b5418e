use surfacing_sim::io::{self as report, RunSummary};
use surfacing_sim::sim;
use surfacing_sim::vehicle::presets;
use surfacing_sim::SimConfig;

fn main() -> anyhow::Result<()> {
    let params = presets::brackish_ascent();
    let config = SimConfig { dt: 0.05, max_time: 2000.0, policy: None };

    println!("Simulating buoyant ascent from {:.0} m ...", params.initial_depth);
    let run = sim::simulate_ascent(&params, &config)?;

    let summary = RunSummary::from_run(&run);
    let mut out = std::io::stdout().lock();
    report::write_summary(&mut out, "Brackish ascent", &summary)?;
    println!();
    report::write_table(&mut out, run.trajectory(), 20)?;
    Ok(())
}
