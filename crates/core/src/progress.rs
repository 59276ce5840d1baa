//! Task-completion aggregates for a single project.

use crate::model::Project;

/// Completed/pending/total task counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TaskCounts {
    pub completed: usize,
    pub pending: usize,
    pub total: usize,
}

/// Count completed, pending, and total tasks.
pub fn task_counts(project: &Project) -> TaskCounts {
    let total = project.tasks.len();
    let completed = project.tasks.iter().filter(|t| t.completed).count();
    TaskCounts {
        completed,
        pending: total - completed,
        total,
    }
}

/// Completion percentage, rounded half-up. A project with no tasks is 0%.
pub fn progress_percentage(project: &Project) -> u8 {
    let counts = task_counts(project);
    if counts.total == 0 {
        return 0;
    }
    ((counts.completed as f64 / counts.total as f64) * 100.0).round() as u8
}
