//! Filtering and sorting over in-memory project and task collections.
//!
//! All functions are pure: they take slices, return owned vectors, and
//! rely on stable sorts so ties keep their original collection order.

use crate::activity::last_activity;
use crate::model::{Project, Task};
use crate::progress::progress_percentage;
use crate::status::StatusFilter;

// ---------------------------------------------------------------------------
// Project filtering
// ---------------------------------------------------------------------------

/// Keep only projects that are still being worked on (neither completed
/// nor cancelled).
pub fn filter_active(projects: &[Project]) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| p.status.is_active())
        .cloned()
        .collect()
}

/// Case-insensitive substring match against name or description. An empty
/// or whitespace-only term is a no-op.
pub fn filter_by_search_term(projects: &[Project], term: &str) -> Vec<Project> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return projects.to_vec();
    }
    projects
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&term)
                || p.description.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Exact status match after canonicalization; `StatusFilter::All` disables
/// filtering.
pub fn filter_by_status(projects: &[Project], filter: StatusFilter) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| filter.matches(p.status))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Project sorting
// ---------------------------------------------------------------------------

/// Sort orders offered by the project list and dashboard widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectSort {
    /// Newest first (by `createdAt`). The default.
    #[default]
    CreatedDesc,
    /// Oldest first.
    CreatedAsc,
    /// Closest deadline first.
    DeadlineAsc,
    NameAsc,
    NameDesc,
    /// Least-complete first (dashboard progress widget).
    ProgressAsc,
    /// Most recently touched first (`updatedAt` falling back to
    /// `createdAt`).
    RecentActivity,
}

impl ProjectSort {
    /// Parse a sort-control value; unrecognized values fall back to
    /// newest-first.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "oldest" => Self::CreatedAsc,
            "deadline" => Self::DeadlineAsc,
            "name-asc" => Self::NameAsc,
            "name-desc" => Self::NameDesc,
            "progress" => Self::ProgressAsc,
            "activity" => Self::RecentActivity,
            _ => Self::CreatedDesc,
        }
    }
}

/// Stable sort; ties keep their original order.
pub fn sort_projects(mut projects: Vec<Project>, sort: ProjectSort) -> Vec<Project> {
    match sort {
        ProjectSort::CreatedDesc => {
            projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        ProjectSort::CreatedAsc => {
            projects.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        }
        ProjectSort::DeadlineAsc => {
            projects.sort_by(|a, b| a.deadline.cmp(&b.deadline));
        }
        ProjectSort::NameAsc => {
            projects.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        ProjectSort::NameDesc => {
            projects.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()));
        }
        ProjectSort::ProgressAsc => {
            projects.sort_by_key(|p| progress_percentage(p));
        }
        ProjectSort::RecentActivity => {
            projects.sort_by(|a, b| last_activity(b).cmp(&last_activity(a)));
        }
    }
    projects
}

// ---------------------------------------------------------------------------
// Task views
// ---------------------------------------------------------------------------

/// Completion filter for the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl TaskFilter {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "completed" => Self::Completed,
            "pending" => Self::Pending,
            _ => Self::All,
        }
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Pending => !task.completed,
        }
    }
}

/// Apply the completion filter and a case-insensitive search over task
/// name and description.
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter, term: &str) -> Vec<Task> {
    let term = term.trim().to_lowercase();
    tasks
        .iter()
        .filter(|t| filter.matches(t))
        .filter(|t| {
            term.is_empty()
                || t.name.to_lowercase().contains(&term)
                || t.description.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Display order for the task list: incomplete tasks first, then due date
/// ascending; stable within each group.
pub fn sort_tasks_for_display(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then_with(|| a.due_date.cmp(&b.due_date))
    });
    tasks
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
