//! Agent registry for orchestrating multiple agents.
//!
//! The `AgentRegistry` is responsible for:
//! - Registering agents under their identity name
//! - Looking up agents by name
//! - Binding agents to conversation channels, creating each channel once
//!   per distinct channel key

use crate::agents::base::{Agent, AgentError};
use crate::agents::channel::AgentChannel;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

/// Holds all registered agents and the channels they communicate through.
///
/// Channels are cached by the `:`-joined channel keys an agent derives, so
/// agents sharing a channel type (and reducer configuration) share one
/// channel instance.
#[derive(Default)]
pub struct AgentRegistry {
    agents: HashMap<String, Arc<dyn Agent>>,
    channels: HashMap<String, Box<dyn AgentChannel>>,
}

impl AgentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent under its identity name.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::DuplicateAgent`] if an agent with the same
    /// name is already registered.
    pub fn register(&mut self, agent: Arc<dyn Agent>) -> Result<(), AgentError> {
        let name = agent.identity().name().to_string();
        match self.agents.entry(name) {
            Entry::Occupied(existing) => Err(AgentError::DuplicateAgent(existing.key().clone())),
            Entry::Vacant(slot) => {
                slot.insert(agent);
                Ok(())
            }
        }
    }

    /// Get an agent by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Agent>> {
        self.agents.get(name).cloned()
    }

    /// Check if an agent with the given name is registered.
    pub fn has(&self, name: &str) -> bool {
        self.agents.contains_key(name)
    }

    /// List all registered agent names.
    pub fn list(&self) -> Vec<String> {
        self.agents.keys().cloned().collect()
    }

    /// Resolve the conversation channel for the named agent.
    ///
    /// The agent's channel keys are joined into a single cache key; the
    /// first resolution for a key creates the channel via
    /// [`Agent::create_channel`], later resolutions reuse it.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::UnknownAgent`] for an unregistered name and
    /// propagates channel-key derivation and channel-creation failures.
    pub async fn channel_for(&mut self, name: &str) -> Result<&mut dyn AgentChannel, AgentError> {
        let agent = self
            .agents
            .get(name)
            .cloned()
            .ok_or_else(|| AgentError::UnknownAgent(name.to_string()))?;

        let key = agent.channel_keys().join()?;
        match self.channels.entry(key) {
            Entry::Occupied(channel) => Ok(channel.into_mut().as_mut()),
            Entry::Vacant(slot) => {
                let channel = agent.create_channel().await?;
                Ok(slot.insert(channel).as_mut())
            }
        }
    }

    /// Number of distinct channels created so far.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}
