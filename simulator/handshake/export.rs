//! CSV export of comparison results
//!
//! Two sections in one file: per-protocol summary rows, then the dense
//! scenario projection table. Consumers split on the blank line.

use super::stats::SimResult;
use std::fs::File;
use std::io::{BufWriter, Write};

pub fn write_csv(path: &str, result: &SimResult) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    writeln!(
        w,
        "protocol,mean_latency_ms,std_latency_ms,overhead_bytes,efficiency_pct"
    )?;
    for report in &result.reports {
        let efficiency = report
            .efficiency_vs_baseline
            .map(|e| format!("{:.4}", e))
            .unwrap_or_else(|| "undefined".to_string());
        writeln!(
            w,
            "{},{:.6},{:.6},{},{}",
            report.protocol.display_name(),
            report.latency.mean,
            report.latency.std_dev,
            report.overhead_bytes,
            efficiency
        )?;
    }

    writeln!(w)?;
    writeln!(w, "scenario,protocol,total_latency_ms")?;
    for (scenario, rows) in &result.projections {
        for row in rows {
            writeln!(
                w,
                "{},{},{:.6}",
                scenario,
                row.protocol.display_name(),
                row.total_latency_ms
            )?;
        }
    }

    w.flush()
}
