//! Project repository: owns one user's project collection.
//!
//! Every mutating call performs a full read-modify-write of the
//! collection (one JSON array per user). That is fine for the intended
//! single synchronous actor; two concurrent writers to the same user's
//! key would race last-write-wins, silently discarding interleaved
//! writes. Callers needing real concurrency must serialize writes
//! through a single owner.

use chrono::Utc;

use tangerine_core::model::{Project, ProjectDraft, ProjectPatch};
use tangerine_core::CoreError;

use crate::adapter::StoreAdapter;
use crate::codec::{decode_collection, encode_collection};
use crate::error::{RepoError, StoreError};
use crate::keys::projects_key;

/// Repository over the project collection of exactly one user.
pub struct ProjectRepository<S: StoreAdapter> {
    store: S,
    user_id: String,
    projects: Vec<Project>,
}

impl<S: StoreAdapter> ProjectRepository<S> {
    /// Load the user's collection. A missing key or malformed value
    /// bootstraps an empty collection; malformed records are dropped.
    pub fn open(store: S, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let key = projects_key(&user_id);
        let projects = match store.get(&key) {
            Some(raw) => decode_collection(&key, &raw),
            None => Vec::new(),
        };
        tracing::debug!(user_id, count = projects.len(), "Loaded projects");
        Self {
            store,
            user_id,
            projects,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn find_by_id(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    /// Validate a draft, append the new project, and persist.
    pub fn create(&mut self, draft: ProjectDraft) -> Result<Project, RepoError> {
        let project = Project::from_draft(draft)?;
        self.projects.push(project.clone());

        if let Err(e) = self.persist() {
            self.projects.pop();
            return Err(e.into());
        }
        tracing::debug!(user_id = self.user_id, project_id = project.id, "Created project");
        Ok(project)
    }

    /// Shallow-merge a patch over an existing project, stamp `updatedAt`,
    /// and persist.
    pub fn update(&mut self, project_id: &str, patch: ProjectPatch) -> Result<Project, RepoError> {
        let index = self.index_of(project_id)?;

        let mut updated = self.projects[index].clone();
        patch.apply(&mut updated)?;
        updated.updated_at = Some(Utc::now());

        let previous = std::mem::replace(&mut self.projects[index], updated.clone());
        if let Err(e) = self.persist() {
            self.projects[index] = previous;
            return Err(e.into());
        }
        Ok(updated)
    }

    /// Replace an existing record wholesale (the task-mutation flow:
    /// the caller edited a loaded clone) and persist. Stamps `updatedAt`.
    pub fn save(&mut self, mut project: Project) -> Result<Project, RepoError> {
        let index = self.index_of(&project.id)?;
        project.updated_at = Some(Utc::now());

        let previous = std::mem::replace(&mut self.projects[index], project.clone());
        if let Err(e) = self.persist() {
            self.projects[index] = previous;
            return Err(e.into());
        }
        Ok(project)
    }

    /// Hard-delete a project. Deleting an id that is absent (including a
    /// second delete of the same id) fails with `NotFound`, never
    /// silently succeeds.
    pub fn delete(&mut self, project_id: &str) -> Result<(), RepoError> {
        let index = self.index_of(project_id)?;

        let removed = self.projects.remove(index);
        if let Err(e) = self.persist() {
            self.projects.insert(index, removed);
            return Err(e.into());
        }
        tracing::debug!(user_id = self.user_id, project_id, "Deleted project");
        Ok(())
    }

    /// Hand the underlying store back (e.g. to reopen or share it).
    pub fn into_store(self) -> S {
        self.store
    }

    fn index_of(&self, project_id: &str) -> Result<usize, CoreError> {
        self.projects
            .iter()
            .position(|p| p.id == project_id)
            .ok_or_else(|| CoreError::not_found("Project", project_id))
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let key = projects_key(&self.user_id);
        let raw = encode_collection(&self.projects);
        self.store.set(&key, &raw)?;
        tracing::debug!(user_id = self.user_id, count = self.projects.len(), "Saved projects");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
