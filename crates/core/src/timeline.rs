//! Timeline geometry: project date ranges mapped onto a shared
//! month-aligned horizontal axis.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::model::Project;

/// Minimum span of the timeline axis, in months.
pub const MIN_SPAN_MONTHS: u32 = 3;

/// Horizontal placement of one project bar, in percent of the axis width.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TimelineBar {
    pub project_id: String,
    pub left_percent: f64,
    pub width_percent: f64,
}

/// The computed axis range and one bar per project.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TimelineLayout {
    /// First day of the earliest start month.
    pub range_start: NaiveDate,
    /// Last day of the latest deadline month (after the minimum-span rule).
    pub range_end: NaiveDate,
    pub bars: Vec<TimelineBar>,
}

/// Lay out all projects on a shared date axis. Returns `None` when there
/// are no projects to place.
pub fn timeline_layout(projects: &[Project]) -> Option<TimelineLayout> {
    let earliest = projects.iter().map(|p| p.start_date).min()?;
    let mut latest = projects.iter().map(|p| p.deadline).max()?;

    // Stretch short ranges to the minimum span before month alignment.
    let min_end = earliest + Months::new(MIN_SPAN_MONTHS);
    if latest < min_end {
        latest = min_end;
    }

    let range_start = month_floor(earliest);
    let range_end = month_end(latest);
    let total_days = (range_end - range_start).num_days();

    let bars = projects
        .iter()
        .map(|project| {
            let offset_days = (project.start_date - range_start).num_days();
            let duration_days = (project.deadline - project.start_date).num_days() + 1;
            TimelineBar {
                project_id: project.id.clone(),
                left_percent: offset_days as f64 / total_days as f64 * 100.0,
                width_percent: duration_days as f64 / total_days as f64 * 100.0,
            }
        })
        .collect();

    Some(TimelineLayout {
        range_start,
        range_end,
        bars,
    })
}

/// First day of each month covered by the layout, for header cells.
pub fn month_starts(layout: &TimelineLayout) -> Vec<NaiveDate> {
    let mut months = Vec::new();
    let mut cursor = layout.range_start;
    while cursor <= layout.range_end {
        months.push(cursor);
        cursor = cursor + Months::new(1);
    }
    months
}

fn month_floor(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("first of month is a valid date")
}

fn month_end(date: NaiveDate) -> NaiveDate {
    month_floor(date) + Months::new(1) - Days::new(1)
}
