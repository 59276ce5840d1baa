//! Persisted record types, creation drafts, and patch application.
//!
//! Field names mirror the persisted JSON shape (camelCase keys). Drafts
//! carry caller input and are validated on construction; patches are
//! shallow merges over an existing record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::status::{Priority, ProjectStatus};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Top-level trackable unit: a date range, a status, and the tasks it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub team: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Unit of work owned by exactly one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Team member record. A separate collection; projects reference members
/// by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Drafts
// ---------------------------------------------------------------------------

/// Caller input for creating a project. Dates are optional here so that
/// validation can name the missing field.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub status: Option<ProjectStatus>,
    pub team: Vec<String>,
}

/// Caller input for creating a task.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}

impl Project {
    /// Validate a draft and build the record.
    ///
    /// Note: `deadline >= startDate` is deliberately NOT enforced; the
    /// date-range math downstream tolerates inverted ranges.
    pub fn from_draft(draft: ProjectDraft) -> Result<Self, CoreError> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Validation("Project name is required".into()));
        }
        let start_date = draft
            .start_date
            .ok_or_else(|| CoreError::Validation("Start date is required".into()))?;
        let deadline = draft
            .deadline
            .ok_or_else(|| CoreError::Validation("Deadline is required".into()))?;

        Ok(Self {
            id: Uuid::now_v7().to_string(),
            name,
            description: draft.description.trim().to_string(),
            start_date,
            deadline,
            status: draft.status.unwrap_or_default(),
            team: draft.team,
            tasks: Vec::new(),
            created_at: Utc::now(),
            updated_at: None,
        })
    }
}

impl Task {
    /// Validate a draft and build the record.
    pub fn from_draft(draft: TaskDraft) -> Result<Self, CoreError> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Validation("Task name is required".into()));
        }
        let due_date = draft
            .due_date
            .ok_or_else(|| CoreError::Validation("Due date is required".into()))?;

        Ok(Self {
            id: Uuid::now_v7().to_string(),
            name,
            description: draft.description.trim().to_string(),
            due_date,
            priority: draft.priority,
            completed: false,
            completed_at: None,
            created_at: Utc::now(),
            updated_at: None,
        })
    }
}

// ---------------------------------------------------------------------------
// Patches
// ---------------------------------------------------------------------------

/// Shallow merge over an existing project. `tasks` stay untouched unless
/// the patch explicitly includes them.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub status: Option<ProjectStatus>,
    pub team: Option<Vec<String>>,
    pub tasks: Option<Vec<Task>>,
}

impl ProjectPatch {
    /// Apply the patch. Does not touch `updated_at`; that is the
    /// repository's job on persist.
    pub fn apply(self, project: &mut Project) -> Result<(), CoreError> {
        if let Some(name) = self.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(CoreError::Validation("Project name is required".into()));
            }
            project.name = name;
        }
        if let Some(description) = self.description {
            project.description = description.trim().to_string();
        }
        if let Some(start_date) = self.start_date {
            project.start_date = start_date;
        }
        if let Some(deadline) = self.deadline {
            project.deadline = deadline;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(team) = self.team {
            project.team = team;
        }
        if let Some(tasks) = self.tasks {
            project.tasks = tasks;
        }
        Ok(())
    }
}

/// Shallow merge over an existing task.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
}

impl TaskPatch {
    pub fn apply(self, task: &mut Task) -> Result<(), CoreError> {
        if let Some(name) = self.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(CoreError::Validation("Task name is required".into()));
            }
            task.name = name;
        }
        if let Some(description) = self.description {
            task.description = description.trim().to_string();
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
