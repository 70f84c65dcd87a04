/// Placeholder id a client sends to ask the server for a fresh identifier
pub const NEW_ID_SENTINEL: &str = "@new";

/// Generate a new resource id (UUID v4, hyphenated)
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Whether `id` asks for server-side assignment (empty or [`NEW_ID_SENTINEL`])
pub fn needs_assigned_id(id: &str) -> bool {
    id.is_empty() || id == NEW_ID_SENTINEL
}
