//! Team member repository.
//!
//! Team members live in their own user-scoped collection; projects only
//! reference them by id. The repository can seed a default roster for a
//! fresh account so the project form has someone to assign.

use tangerine_core::TeamMember;

use crate::adapter::StoreAdapter;
use crate::codec::{decode_collection, encode_collection};
use crate::error::StoreError;
use crate::keys::team_key;

/// Default roster seeded into an empty collection.
fn default_roster() -> Vec<TeamMember> {
    [
        ("tm1", "John Smith", "Developer"),
        ("tm2", "Emily Johnson", "Designer"),
        ("tm3", "Michael Brown", "Project Manager"),
        ("tm4", "Sarah Lee", "QA Engineer"),
    ]
    .into_iter()
    .map(|(id, name, role)| TeamMember {
        id: id.into(),
        name: name.into(),
        role: role.into(),
    })
    .collect()
}

/// Repository over the team-member collection of exactly one user.
pub struct TeamMemberRepository<S: StoreAdapter> {
    store: S,
    user_id: String,
    members: Vec<TeamMember>,
}

impl<S: StoreAdapter> TeamMemberRepository<S> {
    /// Load the user's roster; missing or malformed data loads as empty.
    pub fn open(store: S, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let key = team_key(&user_id);
        let members = match store.get(&key) {
            Some(raw) => decode_collection(&key, &raw),
            None => Vec::new(),
        };
        tracing::debug!(user_id, count = members.len(), "Loaded team members");
        Self {
            store,
            user_id,
            members,
        }
    }

    pub fn all(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn find_by_id(&self, member_id: &str) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.id == member_id)
    }

    /// Seed the default roster when the collection is empty, persisting
    /// it. Returns whether seeding happened.
    pub fn ensure_defaults(&mut self) -> Result<bool, StoreError> {
        if !self.members.is_empty() {
            return Ok(false);
        }
        self.members = default_roster();
        if let Err(e) = self.persist() {
            self.members.clear();
            return Err(e);
        }
        tracing::debug!(user_id = self.user_id, "Seeded default team roster");
        Ok(true)
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let key = team_key(&self.user_id);
        let raw = encode_collection(&self.members);
        self.store.set(&key, &raw)
    }
}
