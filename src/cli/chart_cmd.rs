//! Status commands (stats, chart)

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use super::session::Session;
use crate::chart::{completion_percent, count_by_status, to_percentages, DonutChart};
use crate::storage::load_snapshot;

/// Shows status counts and percentages
pub fn stats(output: &Output, snapshot: &Path) -> Result<()> {
    let item = load_snapshot(snapshot)?;
    let total = item.deliverables.len();
    let counts = count_by_status(&item.deliverables);
    let shares = to_percentages(&counts, total);
    output.verbose_ctx("stats", &format!("Counted {} deliverables", total));

    if output.is_json() {
        output.data(&serde_json::json!({
            "total": total,
            "counts": counts,
            "shares": shares,
            "completionPercent": completion_percent(&counts),
        }));
        return Ok(());
    }

    if shares.is_empty() {
        output.line("No deliverables.");
        return Ok(());
    }

    output.line(&format!("{:<22} {:>5} {:>8}", "STATUS", "COUNT", "PERCENT"));
    output.line(&"-".repeat(37));
    for share in &shares {
        output.line(&format!(
            "{:<22} {:>5} {:>7}%",
            share.status.label(),
            share.count,
            share.percent
        ));
    }
    output.line("");
    output.line(&format!(
        "Completion: {}% ({}/{})",
        completion_percent(&counts),
        item.completed_count(),
        total
    ));
    Ok(())
}

/// Lays out the status donut, as data or SVG
pub fn chart(session: &Session, output: &Output, snapshot: &Path, svg: bool) -> Result<()> {
    let item = load_snapshot(snapshot)?;
    let chart = DonutChart::from_deliverables(&item.deliverables, &session.config.chart);
    output.verbose_ctx("chart", &format!("{} segments", chart.segments.len()));

    if svg {
        print!("{}", chart.render_svg());
        return Ok(());
    }

    if output.is_json() {
        output.data(&chart);
        return Ok(());
    }

    if chart.is_empty() {
        output.line("No deliverables.");
        return Ok(());
    }

    output.line(&format!(
        "{:<12} {:>5} {:>5} {:>9} {:>9}",
        "STATUS", "COUNT", "PCT", "START", "END"
    ));
    output.line(&"-".repeat(44));
    for segment in &chart.segments {
        output.line(&format!(
            "{:<12} {:>5} {:>4}% {:>9.2} {:>9.2}",
            segment.status.short_label(),
            segment.count,
            segment.percent,
            segment.start_angle,
            segment.end_angle
        ));
    }
    output.line("");
    output.line(&format!("{}% complete", chart.completion_percent));
    Ok(())
}
