//! Task mutations on a loaded project, including the status
//! auto-transition rule.
//!
//! These functions only touch the in-memory project; the caller persists
//! the result through the repository afterwards.

use chrono::Utc;

use crate::error::CoreError;
use crate::model::{Project, Task, TaskDraft, TaskPatch};
use crate::progress::{progress_percentage, task_counts};
use crate::status::ProjectStatus;

/// Add a task to the project. The new task starts incomplete.
pub fn add_task(project: &mut Project, draft: TaskDraft) -> Result<Task, CoreError> {
    let task = Task::from_draft(draft)?;
    project.tasks.push(task.clone());
    apply_status_transition(project);
    Ok(task)
}

/// Merge a patch into an existing task and stamp its `updatedAt`.
pub fn update_task(
    project: &mut Project,
    task_id: &str,
    patch: TaskPatch,
) -> Result<Task, CoreError> {
    let task = find_task_mut(project, task_id)?;
    patch.apply(task)?;
    task.updated_at = Some(Utc::now());
    Ok(task.clone())
}

/// Set a task's completion flag. Completing records `completedAt`;
/// uncompleting removes it.
pub fn set_completion(
    project: &mut Project,
    task_id: &str,
    completed: bool,
) -> Result<Task, CoreError> {
    let task = find_task_mut(project, task_id)?;
    task.completed = completed;
    task.completed_at = if completed { Some(Utc::now()) } else { None };
    let task = task.clone();
    apply_status_transition(project);
    Ok(task)
}

/// Remove a task from the project.
pub fn delete_task(project: &mut Project, task_id: &str) -> Result<(), CoreError> {
    let index = project
        .tasks
        .iter()
        .position(|t| t.id == task_id)
        .ok_or_else(|| CoreError::not_found("Task", task_id))?;
    project.tasks.remove(index);
    apply_status_transition(project);
    Ok(())
}

/// The completion-boundary rule: with at least one task, hitting 100%
/// progress flips the status to `completed`, and dropping back under 100%
/// while `completed` reverts it to `in progress`. No other status is ever
/// touched, and a project with zero tasks is left alone.
///
/// Returns whether the status changed; a change also stamps the project's
/// `updatedAt`.
pub fn apply_status_transition(project: &mut Project) -> bool {
    if task_counts(project).total == 0 {
        return false;
    }

    let progress = progress_percentage(project);
    let new_status = if progress == 100 && project.status != ProjectStatus::Completed {
        ProjectStatus::Completed
    } else if progress < 100 && project.status == ProjectStatus::Completed {
        ProjectStatus::InProgress
    } else {
        return false;
    };

    project.status = new_status;
    project.updated_at = Some(Utc::now());
    true
}

fn find_task_mut<'a>(project: &'a mut Project, task_id: &str) -> Result<&'a mut Task, CoreError> {
    project
        .tasks
        .iter_mut()
        .find(|t| t.id == task_id)
        .ok_or_else(|| CoreError::not_found("Task", task_id))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
