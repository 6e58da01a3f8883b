//! Scheduling commands (project, span, next-start, occupied)

use std::path::Path;

use anyhow::Result;
use clap::Args;

use super::output::Output;
use super::session::{today_or, Session};
use crate::domain::{CalendarDate, DurationDays, ExclusionConfig, Slot};
use crate::storage::load_snapshot;

/// Exclusion flags for a candidate slot; unset flags fall back to config
#[derive(Args, Debug, Default)]
pub struct ExclusionArgs {
    /// Skip Saturdays
    #[arg(long, conflicts_with = "work_saturdays")]
    pub exclude_saturdays: bool,

    /// Count Saturdays as working days
    #[arg(long)]
    pub work_saturdays: bool,

    /// Skip listed holidays
    #[arg(long, conflicts_with = "include_holidays")]
    pub exclude_holidays: bool,

    /// Count listed holidays as working days
    #[arg(long)]
    pub include_holidays: bool,
}

impl ExclusionArgs {
    pub fn resolve(&self, defaults: ExclusionConfig) -> ExclusionConfig {
        ExclusionConfig {
            exclude_saturdays: pick(
                self.exclude_saturdays,
                self.work_saturdays,
                defaults.exclude_saturdays,
            ),
            exclude_holidays: pick(
                self.exclude_holidays,
                self.include_holidays,
                defaults.exclude_holidays,
            ),
        }
    }
}

fn pick(on: bool, off: bool, default: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}

/// Builds a validated slot from command-line text
fn parse_slot(start: &str, days: i64, exclusions: ExclusionConfig) -> Result<Slot> {
    let start: CalendarDate = start.parse()?;
    let duration = DurationDays::try_from(days)?;
    Ok(Slot::new(start, duration, exclusions))
}

/// Projects the end date of a single slot
pub fn project(
    session: &Session,
    output: &Output,
    start: &str,
    days: i64,
    exclusions: &ExclusionArgs,
) -> Result<()> {
    let exclusions = exclusions.resolve(session.config.schedule.default_exclusions());
    let slot = parse_slot(start, days, exclusions)?;
    output.verbose_ctx("project", &format!("{:?}", slot));

    let end = session.calendar().project_end(&slot)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "startDate": slot.start,
            "durationDays": slot.duration,
            "endDate": end,
            "excludeSaturdays": exclusions.exclude_saturdays,
            "excludeHolidays": exclusions.exclude_holidays,
        }));
    } else {
        output.line(&end.to_string());
    }
    Ok(())
}

/// Shows the span enclosing a snapshot's deliverables
pub fn span(session: &Session, output: &Output, snapshot: &Path) -> Result<()> {
    let item = load_snapshot(snapshot)?;
    output.verbose_ctx(
        "span",
        &format!("Loaded {} deliverables from {}", item.deliverables.len(), snapshot.display()),
    );

    let span = item.span(&session.calendar())?;

    if output.is_json() {
        output.data(&span);
    } else {
        match span {
            Some(span) => output.line(&format!(
                "{} .. {} ({} days)",
                span.start, span.end, span.duration_days
            )),
            None => output.line("No deliverables."),
        }
    }
    Ok(())
}

/// Suggests a start date for the next deliverable
pub fn next_start(
    session: &Session,
    output: &Output,
    snapshot: &Path,
    today: Option<&str>,
) -> Result<()> {
    let item = load_snapshot(snapshot)?;
    let today = today_or(today)?;
    output.verbose_ctx("next-start", &format!("Today is {}", today));

    let next = item.next_available_start(&session.calendar(), today)?;

    if output.is_json() {
        output.data(&serde_json::json!({ "nextStart": next }));
    } else {
        output.line(&next.to_string());
    }
    Ok(())
}

/// Checks a candidate slot against a snapshot's deliverables
pub fn occupied(
    session: &Session,
    output: &Output,
    snapshot: &Path,
    start: &str,
    days: i64,
    exclude_id: Option<&str>,
    exclusions: &ExclusionArgs,
) -> Result<()> {
    let item = load_snapshot(snapshot)?;
    let exclusions = exclusions.resolve(session.config.schedule.default_exclusions());
    let slot = parse_slot(start, days, exclusions)?;
    let calendar = session.calendar();

    let range = calendar.project(&slot)?;
    let occupied = calendar.is_occupied(&item.deliverables, &slot, exclude_id)?;
    let conflicts = if occupied {
        calendar.find_conflicts(&item.deliverables, &slot, exclude_id)?
    } else {
        Vec::new()
    };
    output.verbose_ctx(
        "occupied",
        &format!(
            "Candidate {} checked against {} deliverables",
            range,
            item.deliverables.len()
        ),
    );

    if output.is_json() {
        let ids: Vec<&str> = conflicts.iter().map(|d| d.id.as_str()).collect();
        output.data(&serde_json::json!({
            "occupied": occupied,
            "startDate": range.start(),
            "endDate": range.end(),
            "conflicts": ids,
        }));
    } else if occupied {
        output.line(&format!("Occupied: {} overlaps {} deliverable(s)", range, conflicts.len()));
        output.line(&format!("{:<12} {:<25} TITLE", "ID", "DATES"));
        output.line(&"-".repeat(60));
        for deliverable in conflicts {
            let taken = calendar.project(&deliverable.slot())?;
            output.line(&format!(
                "{:<12} {:<25} {}",
                deliverable.id,
                taken.to_string(),
                deliverable.text
            ));
        }
    } else {
        output.line(&format!("Free: {}", range));
    }
    Ok(())
}
