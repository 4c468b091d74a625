//! Text rendering of flood tables.

use std::fmt::Write;

use rational_core::{Distribution, FloodSample, FloodSeries};

fn rows(series: &FloodSeries) -> impl Iterator<Item = FloodSample> + '_ {
    (0..series.len()).map_while(|i| series.row(i))
}

/// Fixed-width table; `detail` adds the rainfall and intensity columns.
pub fn render_table(series: &FloodSeries, detail: bool) -> String {
    let mut out = String::new();
    if detail {
        let _ = writeln!(
            out,
            "{:>10} | {:>10} | {:>10} | {:>12}",
            "Time", "Rainfall", "Intensity", "Flow"
        );
        let _ = writeln!(out, "-----------|------------|------------|-------------");
    } else {
        let _ = writeln!(out, "{:>10} | {:>12}", "Time", "Flow");
        let _ = writeln!(out, "-----------|-------------");
    }

    for s in rows(series) {
        if detail {
            let _ = writeln!(
                out,
                "{:>10.3} | {:>10.4} | {:>10.4} | {:>12.3}",
                s.time, s.rainfall, s.intensity, s.flow
            );
        } else {
            let _ = writeln!(out, "{:>10.3} | {:>12.3}", s.time, s.flow);
        }
    }
    out
}

/// Comma-separated values with a header row of every column.
pub fn render_csv(series: &FloodSeries) -> String {
    let mut out = FloodSample::field_names().join(",");
    out.push('\n');
    for s in rows(series) {
        let _ = writeln!(out, "{},{},{},{}", s.time, s.rainfall, s.intensity, s.flow);
    }
    out
}

/// Peak flow and runoff volume of a hydrograph.
pub fn render_summary(hydrograph: &Distribution) -> String {
    let (peak_time, peak_flow) = hydrograph.peak();
    format!(
        "Peak: Q={:.3} at t={:.3}\nVolume: {:.3} (flow x time unit)\n",
        peak_flow,
        peak_time,
        hydrograph.volume()
    )
}
