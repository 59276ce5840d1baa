//! Persistence boundary for the tangerine project tracker.
//!
//! A synchronous key-value adapter (origin-scoped storage semantics),
//! user-scoped key namespacing, a lenient collection codec, and the
//! repositories the presentation layer drives: projects, team members,
//! and the session/identity context.

pub mod adapter;
pub mod codec;
pub mod error;
pub mod keys;
pub mod project_repo;
pub mod session;
pub mod team_repo;

pub use adapter::{JsonFileStore, MemoryStore, StoreAdapter};
pub use error::{RepoError, StoreError};
pub use project_repo::ProjectRepository;
pub use session::Session;
pub use team_repo::TeamMemberRepository;
