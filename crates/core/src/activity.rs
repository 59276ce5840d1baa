//! Recent-activity classification.
//!
//! Only the bucket boundaries are contract here; turning a bucket into
//! display text is the presentation layer's concern.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use crate::model::Project;

/// What the most recent change to a project was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Created,
    Updated,
}

/// Timestamp of the last change: `updatedAt`, falling back to `createdAt`.
pub fn last_activity(project: &Project) -> DateTime<Utc> {
    project.updated_at.unwrap_or(project.created_at)
}

/// Whether the project's latest activity was its creation or an update.
pub fn activity_kind(project: &Project) -> ActivityKind {
    if project.updated_at.is_some() {
        ActivityKind::Updated
    } else {
        ActivityKind::Created
    }
}

/// Relative-time bucket for an activity timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
    /// Under an hour ago.
    MinutesAgo(i64),
    /// Under a day ago.
    HoursAgo(i64),
    /// Exactly one calendar day ago.
    Yesterday,
    /// Two to six days ago.
    DaysAgo(i64),
    /// A week or more ago; render as an absolute date.
    OnDate(NaiveDate),
}

/// Bucket a timestamp relative to `now`. Timestamps in the future clamp
/// to "0 minutes ago".
pub fn relative_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> RelativeTime {
    let elapsed = (now - ts).max(TimeDelta::zero());
    let days = elapsed.num_days();

    if days == 0 {
        let hours = elapsed.num_hours();
        if hours == 0 {
            RelativeTime::MinutesAgo(elapsed.num_minutes())
        } else {
            RelativeTime::HoursAgo(hours)
        }
    } else if days == 1 {
        RelativeTime::Yesterday
    } else if days < 7 {
        RelativeTime::DaysAgo(days)
    } else {
        RelativeTime::OnDate(ts.date_naive())
    }
}
