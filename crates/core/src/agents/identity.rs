//! Agent identity: id, name, and description.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// The identity of an agent.
///
/// Two agents are considered the same iff their id, name, and description
/// all match; no other agent state participates in equality or hashing.
/// The id is fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AgentIdentity {
    id: String,
    name: String,
    description: String,
}

impl AgentIdentity {
    /// Create an identity with a freshly generated UUID v4 id.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Create an identity with a caller-supplied id.
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// The agent's unique id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The agent's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The agent's human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Deterministic hash over (id, name, description).
    ///
    /// Equal identities always produce the same value; used where a stable
    /// key for an identity is needed, e.g. channel-key derivation.
    pub fn key_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}
