//! Status and priority tags with a single canonicalization path.
//!
//! The persisted JSON stores both as free-form strings. Parsing is
//! case-insensitive; unrecognized status values canonicalize to
//! `NotStarted`, while priorities stay open-ended.

use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Project status
// ---------------------------------------------------------------------------

/// Project lifecycle tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectStatus {
    #[default]
    NotStarted,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
}

/// All statuses, in lifecycle order.
pub const ALL_STATUSES: &[ProjectStatus] = &[
    ProjectStatus::NotStarted,
    ProjectStatus::InProgress,
    ProjectStatus::OnHold,
    ProjectStatus::Completed,
    ProjectStatus::Cancelled,
];

impl ProjectStatus {
    /// Canonicalize a stored or user-supplied status string.
    ///
    /// Matching is case-insensitive; anything unrecognized (including the
    /// empty string) maps to `NotStarted`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "in progress" => Self::InProgress,
            "on hold" => Self::OnHold,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            _ => Self::NotStarted,
        }
    }

    /// Canonical lowercase label, as persisted.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::OnHold => "on hold",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// CSS-style class tag used by the presentation layer.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "progress",
            Self::OnHold => "hold",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether the project is still being worked on.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ProjectStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Status filter with an "all" sentinel that disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProjectStatus),
}

impl StatusFilter {
    /// Parse a filter-control value; `"all"` (or anything blank) disables
    /// the filter, everything else canonicalizes as a status.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(ProjectStatus::parse(trimmed))
        }
    }

    pub fn matches(self, status: ProjectStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => status == wanted,
        }
    }
}

// ---------------------------------------------------------------------------
// Task priority
// ---------------------------------------------------------------------------

/// Task priority. Open-ended: the well-known levels get variants, anything
/// else is preserved verbatim (lowercased) rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Other(String),
}

impl Priority {
    pub fn parse(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        match lower.as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Other(lower),
        }
    }

    /// Canonical lowercase label, also used as the CSS class suffix.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ProjectStatus::parse -----------------------------------------------

    #[test]
    fn parse_canonical_forms() {
        assert_eq!(ProjectStatus::parse("not started"), ProjectStatus::NotStarted);
        assert_eq!(ProjectStatus::parse("in progress"), ProjectStatus::InProgress);
        assert_eq!(ProjectStatus::parse("on hold"), ProjectStatus::OnHold);
        assert_eq!(ProjectStatus::parse("completed"), ProjectStatus::Completed);
        assert_eq!(ProjectStatus::parse("cancelled"), ProjectStatus::Cancelled);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ProjectStatus::parse("In Progress"), ProjectStatus::InProgress);
        assert_eq!(ProjectStatus::parse("COMPLETED"), ProjectStatus::Completed);
    }

    #[test]
    fn parse_unrecognized_maps_to_not_started() {
        assert_eq!(ProjectStatus::parse("bogus"), ProjectStatus::NotStarted);
        assert_eq!(ProjectStatus::parse(""), ProjectStatus::NotStarted);
    }

    // -- css_class ----------------------------------------------------------

    #[test]
    fn css_class_for_each_status() {
        assert_eq!(ProjectStatus::parse("In Progress").css_class(), "progress");
        assert_eq!(ProjectStatus::OnHold.css_class(), "hold");
        assert_eq!(ProjectStatus::NotStarted.css_class(), "not-started");
        assert_eq!(ProjectStatus::parse("bogus").css_class(), "not-started");
    }

    // -- is_active ----------------------------------------------------------

    #[test]
    fn completed_and_cancelled_are_not_active() {
        assert!(!ProjectStatus::Completed.is_active());
        assert!(!ProjectStatus::Cancelled.is_active());
    }

    #[test]
    fn other_statuses_are_active() {
        assert!(ProjectStatus::NotStarted.is_active());
        assert!(ProjectStatus::InProgress.is_active());
        assert!(ProjectStatus::OnHold.is_active());
    }

    // -- serde round-trip ---------------------------------------------------

    #[test]
    fn status_serializes_to_lowercase_label() {
        let json = serde_json::to_string(&ProjectStatus::OnHold).unwrap();
        assert_eq!(json, "\"on hold\"");
    }

    #[test]
    fn status_deserialize_is_lenient() {
        let status: ProjectStatus = serde_json::from_str("\"On Hold\"").unwrap();
        assert_eq!(status, ProjectStatus::OnHold);

        let status: ProjectStatus = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(status, ProjectStatus::NotStarted);
    }

    // -- StatusFilter -------------------------------------------------------

    #[test]
    fn all_sentinel_matches_everything() {
        for status in ALL_STATUSES {
            assert!(StatusFilter::All.matches(*status));
        }
    }

    #[test]
    fn filter_parse_recognizes_all_sentinel() {
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
        assert_eq!(StatusFilter::parse("ALL"), StatusFilter::All);
        assert_eq!(StatusFilter::parse(""), StatusFilter::All);
    }

    #[test]
    fn only_filter_matches_exactly() {
        let filter = StatusFilter::parse("On Hold");
        assert!(filter.matches(ProjectStatus::OnHold));
        assert!(!filter.matches(ProjectStatus::InProgress));
    }

    // -- Priority -----------------------------------------------------------

    #[test]
    fn priority_parse_known_levels() {
        assert_eq!(Priority::parse("low"), Priority::Low);
        assert_eq!(Priority::parse("Medium"), Priority::Medium);
        assert_eq!(Priority::parse("HIGH"), Priority::High);
    }

    #[test]
    fn priority_preserves_unknown_levels() {
        assert_eq!(
            Priority::parse("Critical"),
            Priority::Other("critical".to_string())
        );
        assert_eq!(Priority::parse("Critical").as_str(), "critical");
    }

    #[test]
    fn priority_serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let p: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(p, Priority::Low);
    }
}
