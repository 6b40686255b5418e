use std::io::{self, Write};

use serde::Serialize;

use crate::dynamics::Sample;
use crate::sim::{Run, SurfacingPolicy, Termination};

/// Summary statistics computed from a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub start_depth: f64,
    pub final_depth: f64,
    pub deepest: f64,
    pub horizontal_distance: f64,
    pub max_ascent_rate: f64,
    pub max_speed: f64,
    pub initial_mass: f64,
    pub final_mass: f64,
    pub elapsed: f64,
    pub steps: usize,
    pub time_to_surface: Option<f64>,
    pub policy: SurfacingPolicy,
    pub status: String,
}

impl RunSummary {
    pub fn from_run(run: &Run) -> Self {
        let first = run.initial();
        let last = run.last();

        let deepest = run
            .trajectory
            .iter()
            .map(|s| s.y)
            .fold(f64::INFINITY, f64::min);

        let max_ascent_rate = run
            .trajectory
            .iter()
            .map(|s| s.vy)
            .fold(f64::NEG_INFINITY, f64::max);

        let max_speed = run
            .trajectory
            .iter()
            .map(Sample::speed)
            .fold(0.0_f64, f64::max);

        RunSummary {
            start_depth: first.y,
            final_depth: last.y,
            deepest,
            horizontal_distance: last.x - first.x,
            max_ascent_rate,
            max_speed,
            initial_mass: first.mass,
            final_mass: last.mass,
            elapsed: last.time,
            steps: run.steps(),
            time_to_surface: run.time_to_surface(),
            policy: run.policy,
            status: run.status_message(),
        }
    }
}

/// Write the summary as an aligned text block.
pub fn write_summary<W: Write>(writer: &mut W, title: &str, summary: &RunSummary) -> io::Result<()> {
    let rule = "─".repeat(66);
    writeln!(writer, "  {}", title)?;
    writeln!(writer, "  {}", rule)?;
    writeln!(
        writer,
        "  Start depth:   {:>9.2} m     Final depth:  {:>9.2} m",
        summary.start_depth, summary.final_depth
    )?;
    writeln!(
        writer,
        "  Deepest:       {:>9.2} m     Distance:     {:>9.2} m",
        summary.deepest, summary.horizontal_distance
    )?;
    writeln!(
        writer,
        "  Max ascent:    {:>9.3} m/s   Max speed:    {:>9.3} m/s",
        summary.max_ascent_rate, summary.max_speed
    )?;
    writeln!(
        writer,
        "  Mass:          {:>9.1} kg -> {:.1} kg",
        summary.initial_mass, summary.final_mass
    )?;
    writeln!(
        writer,
        "  Elapsed:       {:>9.2} s     Steps:        {:>9}",
        summary.elapsed, summary.steps
    )?;
    writeln!(writer, "  Policy:        {:>9}", summary.policy)?;
    writeln!(writer)?;
    writeln!(writer, "  {}", summary.status)?;
    Ok(())
}

#[derive(Serialize)]
struct RunDocument<'a> {
    scenario: &'a str,
    termination: &'a Termination,
    summary: &'a RunSummary,
    trajectory: &'a [Sample],
}

/// Write summary, termination and full trajectory as pretty JSON.
pub fn write_json<W: Write>(
    writer: &mut W,
    scenario: &str,
    run: &Run,
    summary: &RunSummary,
) -> io::Result<()> {
    let doc = RunDocument {
        scenario,
        termination: &run.termination,
        summary,
        trajectory: &run.trajectory,
    };
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)
}
