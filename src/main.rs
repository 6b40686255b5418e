use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use surfacing_sim::io::{self as report, RunSummary};
use surfacing_sim::{ModelKind, Scenario, SurfacingPolicy};

#[derive(Parser, Debug)]
#[command(name = "surfacing-sim", about = "Simulate a submerged vehicle rising to the surface")]
struct Args {
    /// TOML scenario file; the model defaults are used when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Model to run when no scenario file is given
    #[arg(short, long, value_enum, default_value_t = Model::Ascent, conflicts_with = "scenario")]
    model: Model,

    /// Integration step (s)
    #[arg(long)]
    dt: Option<f64>,

    /// Time bound (s)
    #[arg(long)]
    max_time: Option<f64>,

    /// Surfacing check relative to each step
    #[arg(long, value_enum)]
    policy: Option<Policy>,

    /// Approximate number of trajectory rows to print
    #[arg(long, default_value_t = 30)]
    rows: usize,

    /// Print summary and full trajectory as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Model {
    Ascent,
    Thrusted,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    PostCheck,
    PreCheck,
}

impl From<Model> for ModelKind {
    fn from(m: Model) -> Self {
        match m {
            Model::Ascent => ModelKind::Ascent,
            Model::Thrusted => ModelKind::Thrusted,
        }
    }
}

impl From<Policy> for SurfacingPolicy {
    fn from(p: Policy) -> Self {
        match p {
            Policy::PostCheck => SurfacingPolicy::PostCheck,
            Policy::PreCheck => SurfacingPolicy::PreCheck,
        }
    }
}

fn load_scenario(args: &Args) -> Result<Scenario> {
    let mut scenario = match &args.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => Scenario::defaults(args.model.into()),
    };

    let sim = scenario.simulation_mut();
    if let Some(dt) = args.dt {
        sim.dt = dt;
    }
    if let Some(max_time) = args.max_time {
        sim.max_time = max_time;
    }
    if let Some(policy) = args.policy {
        sim.policy = Some(policy.into());
    }

    scenario.validate().context("invalid parameters")?;
    Ok(scenario)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let scenario = load_scenario(&args)?;

    let run = scenario
        .run()
        .with_context(|| format!("{} failed", scenario.name()))?;
    let summary = RunSummary::from_run(&run);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.json {
        report::write_json(&mut out, scenario.name(), &run, &summary)?;
        return Ok(());
    }

    let sim = scenario.simulation();
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(70))?;
    writeln!(out, "  SURFACING SIMULATION — {}", scenario.name())?;
    writeln!(out, "{}", "=".repeat(70))?;
    writeln!(out)?;
    writeln!(
        out,
        "  Step:          {:>9} s     Time bound:   {:>9} s",
        sim.dt, sim.max_time
    )?;
    writeln!(out)?;

    report::write_summary(&mut out, "Outcome", &summary)?;
    writeln!(out)?;

    writeln!(out, "  Trajectory")?;
    report::write_table(&mut out, run.trajectory(), args.rows)?;
    writeln!(out, "{}", "=".repeat(70))?;
    writeln!(out)?;

    Ok(())
}
