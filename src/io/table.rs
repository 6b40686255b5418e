use std::io::{self, Write};

use crate::dynamics::Sample;

/// Write roughly `rows` evenly spaced trajectory samples as a text table.
/// The first and last samples are always included.
///
/// Columns: t, x, depth, vx, vy, mass, phase
pub fn write_table<W: Write>(writer: &mut W, trajectory: &[Sample], rows: usize) -> io::Result<()> {
    writeln!(
        writer,
        "  {:>8}  {:>9}  {:>9}  {:>8}  {:>8}  {:>11}  {:>8}",
        "t (s)", "x (m)", "depth (m)", "vx (m/s)", "vy (m/s)", "mass (kg)", "phase"
    )?;
    writeln!(writer, "  {}", "─".repeat(73))?;

    let interval = (trajectory.len() / rows.max(1)).max(1);
    let last = trajectory.len().saturating_sub(1);
    for (i, s) in trajectory.iter().enumerate() {
        if i % interval != 0 && i != last {
            continue;
        }
        writeln!(
            writer,
            "  {:>8.2}  {:>9.2}  {:>9.3}  {:>8.3}  {:>8.3}  {:>11.3}  {:>8}",
            s.time,
            s.x,
            s.y,
            s.vx,
            s.vy,
            s.mass,
            phase(s)
        )?;
    }

    Ok(())
}

fn phase(s: &Sample) -> &'static str {
    if s.is_surfaced() {
        "SURFACED"
    } else if s.vy > 0.0 {
        "ASCENT"
    } else if s.vy < 0.0 {
        "SINK"
    } else {
        "HOLD"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trajectory(n: usize) -> Vec<Sample> {
        (0..n)
            .map(|i| Sample {
                time: i as f64,
                x: 0.0,
                y: -10.0 + i as f64,
                vx: 0.0,
                vy: 1.0,
                mass: 1.0,
            })
            .collect()
    }

    #[test]
    fn table_has_header_and_sampled_rows() {
        let mut buf = Vec::new();
        write_table(&mut buf, &trajectory(100), 10).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains("t (s)"));
        // header + rule + rows 0, 10, ..., 90 + final row 99
        assert_eq!(lines.len(), 2 + 10 + 1);
        assert!(lines.last().unwrap().contains("99.00"));
    }

    #[test]
    fn short_trajectory_prints_every_row() {
        let mut buf = Vec::new();
        write_table(&mut buf, &trajectory(3), 30).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2 + 3);
        assert!(text.contains("ASCENT"));
    }

    #[test]
    fn surfaced_rows_are_marked() {
        let mut buf = Vec::new();
        write_table(&mut buf, &trajectory(12), 12).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.lines().last().unwrap().ends_with("SURFACED"));
    }
}
