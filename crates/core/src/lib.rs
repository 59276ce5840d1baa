//! Domain core for the tangerine project tracker.
//!
//! Pure state model and derived-view computations: project/task records,
//! status canonicalization, the task subsystem with its completion-boundary
//! status rule, and the aggregation functions the presentation layer renders
//! (progress, deadline urgency, sorting/filtering, timeline geometry,
//! relative-time buckets). No I/O lives here; persistence is the `store`
//! crate's concern.

pub mod activity;
pub mod deadline;
pub mod error;
pub mod model;
pub mod progress;
pub mod status;
pub mod tasks;
pub mod timeline;
pub mod views;

pub use error::CoreError;
pub use model::{Project, ProjectDraft, ProjectPatch, Task, TaskDraft, TaskPatch, TeamMember};
pub use status::{Priority, ProjectStatus, StatusFilter};
