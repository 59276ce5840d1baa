//! Storage key namespacing: `<collection>_<userId>`, one JSON value per
//! key, plus the fixed session key.

/// Key for the session record (not user-scoped; one session per origin).
pub const SESSION_KEY: &str = "session";

/// Key for a user's project collection.
pub fn projects_key(user_id: &str) -> String {
    format!("projects_{user_id}")
}

/// Key for a user's team-member collection.
pub fn team_key(user_id: &str) -> String {
    format!("team_{user_id}")
}
