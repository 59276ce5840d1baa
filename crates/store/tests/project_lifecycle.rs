//! End-to-end lifecycle over a real store: identity, project CRUD, task
//! mutations with the status auto-transition, and the persisted JSON
//! shape a fresh load sees.

use assert_matches::assert_matches;
use chrono::NaiveDate;

use tangerine_core::model::{ProjectDraft, ProjectPatch, TaskDraft};
use tangerine_core::progress::progress_percentage;
use tangerine_core::{tasks, CoreError, ProjectStatus};
use tangerine_store::{
    session, JsonFileStore, MemoryStore, ProjectRepository, RepoError, Session, StoreAdapter,
    StoreError,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn project_draft(name: &str) -> ProjectDraft {
    ProjectDraft {
        name: name.into(),
        description: "integration fixture".into(),
        start_date: Some(date(2024, 1, 1)),
        deadline: Some(date(2024, 1, 31)),
        ..Default::default()
    }
}

fn task_draft(name: &str) -> TaskDraft {
    TaskDraft {
        name: name.into(),
        due_date: Some(date(2024, 1, 15)),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Full lifecycle: create -> tasks -> auto-complete -> reopen -> delete
// ---------------------------------------------------------------------------

#[test]
fn full_project_lifecycle_survives_reload() {
    let mut store = MemoryStore::new();
    session::sign_in(
        &mut store,
        Session {
            user_id: "u1".into(),
            fullname: "Jordan Doe".into(),
            email: "jordan@example.com".into(),
            logged_in: false,
        },
    )
    .unwrap();
    let user = session::current_user(&store);
    assert_eq!(user.user_id, "u1");

    let mut repo = ProjectRepository::open(store, &user.user_id);
    let created = repo.create(project_draft("Apollo")).unwrap();

    // Attach two tasks and complete both through the task subsystem.
    let mut working = repo.find_by_id(&created.id).unwrap().clone();
    let t1 = tasks::add_task(&mut working, task_draft("design")).unwrap();
    let t2 = tasks::add_task(&mut working, task_draft("build")).unwrap();
    tasks::set_completion(&mut working, &t1.id, true).unwrap();
    tasks::set_completion(&mut working, &t2.id, true).unwrap();
    assert_eq!(working.status, ProjectStatus::Completed);
    repo.save(working).unwrap();

    // A fresh repository over the same store sees the persisted state.
    let mut repo = ProjectRepository::open(repo.into_store(), "u1");
    let loaded = repo.find_by_id(&created.id).unwrap().clone();
    assert_eq!(loaded.status, ProjectStatus::Completed);
    assert_eq!(progress_percentage(&loaded), 100);
    assert!(loaded.updated_at.is_some());

    // Uncompleting one task reverts the status on the next save.
    let mut working = loaded;
    tasks::set_completion(&mut working, &t1.id, false).unwrap();
    assert_eq!(working.status, ProjectStatus::InProgress);
    repo.save(working).unwrap();

    repo.delete(&created.id).unwrap();
    let err = repo.delete(&created.id).unwrap_err();
    assert_matches!(err, RepoError::Core(CoreError::NotFound { .. }));
}

// ---------------------------------------------------------------------------
// Persisted JSON shape
// ---------------------------------------------------------------------------

#[test]
fn stored_collection_uses_the_expected_json_shape() {
    let mut repo = ProjectRepository::open(MemoryStore::new(), "u1");
    let created = repo.create(project_draft("Apollo")).unwrap();

    let mut working = repo.find_by_id(&created.id).unwrap().clone();
    let task = tasks::add_task(&mut working, task_draft("design")).unwrap();
    tasks::set_completion(&mut working, &task.id, true).unwrap();
    repo.save(working).unwrap();

    let store = repo.into_store();
    let raw = store.get("projects_u1").unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let record = &json.as_array().unwrap()[0];
    assert_eq!(record["name"], "Apollo");
    assert_eq!(record["startDate"], "2024-01-01");
    assert_eq!(record["status"], "completed");
    assert!(record["createdAt"].is_string());
    assert!(record["updatedAt"].is_string());

    let stored_task = &record["tasks"].as_array().unwrap()[0];
    assert_eq!(stored_task["dueDate"], "2024-01-15");
    assert_eq!(stored_task["priority"], "medium");
    assert_eq!(stored_task["completed"], true);
    assert!(stored_task["completedAt"].is_string());
}

// ---------------------------------------------------------------------------
// Write failure leaves no torn state
// ---------------------------------------------------------------------------

/// Adapter that accepts a fixed number of writes, then refuses.
struct FlakyStore {
    inner: MemoryStore,
    writes_left: usize,
}

impl StoreAdapter for FlakyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.writes_left == 0 {
            return Err(StoreError::Write {
                key: key.to_string(),
                reason: "storage quota exceeded".into(),
            });
        }
        self.writes_left -= 1;
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(key)
    }
}

#[test]
fn failed_write_rolls_back_the_in_memory_mutation() {
    let store = FlakyStore {
        inner: MemoryStore::new(),
        writes_left: 1,
    };
    let mut repo = ProjectRepository::open(store, "u1");
    let created = repo.create(project_draft("Apollo")).unwrap();

    // The quota is spent; the next mutation must fail AND leave both the
    // repository and the store exactly as they were.
    let err = repo
        .update(
            &created.id,
            ProjectPatch {
                name: Some("Renamed".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_matches!(err, RepoError::Store(StoreError::Write { .. }));
    assert_eq!(repo.find_by_id(&created.id).unwrap().name, "Apollo");

    let err = repo.delete(&created.id).unwrap_err();
    assert_matches!(err, RepoError::Store(StoreError::Write { .. }));
    assert!(repo.find_by_id(&created.id).is_some());

    // Reload from the store: the original record is intact.
    let repo = ProjectRepository::open(repo.into_store(), "u1");
    assert_eq!(repo.find_by_id(&created.id).unwrap().name, "Apollo");
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

#[test]
fn file_store_backs_a_repository_across_processes() {
    let dir = tempfile::tempdir().unwrap();

    let created = {
        let store = JsonFileStore::open(dir.path()).unwrap();
        let mut repo = ProjectRepository::open(store, "u1");
        repo.create(project_draft("Durable")).unwrap()
    };

    let store = JsonFileStore::open(dir.path()).unwrap();
    let repo = ProjectRepository::open(store, "u1");
    assert_eq!(repo.find_by_id(&created.id).unwrap().name, "Durable");
}
