//! Base Agent trait and supporting types.

use crate::agents::channel::AgentChannel;
use crate::agents::identity::AgentIdentity;
use crate::history::ChatHistoryReducer;
use ak_protocol::{ChatHistory, InvocationArguments};
use async_trait::async_trait;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("Agent '{0}' does not define a channel type")]
    ChannelNotSupported(String),
    #[error("Agent '{0}' is not registered")]
    UnknownAgent(String),
    #[error("An agent named '{0}' is already registered")]
    DuplicateAgent(String),
    #[error("Channel creation failed: {0}")]
    ChannelCreation(String),
    #[error("History reduction failed: {0}")]
    Reduction(String),
}

/// Lazy sequence of channel keys.
///
/// Construction never fails; an agent without a channel type surfaces
/// [`AgentError::ChannelNotSupported`] on the first `next()` call instead.
pub struct ChannelKeys {
    state: ChannelKeysState,
}

enum ChannelKeysState {
    Unsupported { agent_name: String, done: bool },
    Keys(std::vec::IntoIter<String>),
}

impl ChannelKeys {
    fn unsupported(agent_name: String) -> Self {
        Self {
            state: ChannelKeysState::Unsupported {
                agent_name,
                done: false,
            },
        }
    }

    fn from_keys(keys: Vec<String>) -> Self {
        Self {
            state: ChannelKeysState::Keys(keys.into_iter()),
        }
    }

    /// Collect the keys into a single `:`-joined channel key.
    pub fn join(self) -> Result<String, AgentError> {
        let keys = self.collect::<Result<Vec<_>, _>>()?;
        Ok(keys.join(":"))
    }
}

impl Iterator for ChannelKeys {
    type Item = Result<String, AgentError>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            ChannelKeysState::Unsupported { agent_name, done } => {
                if *done {
                    None
                } else {
                    *done = true;
                    Some(Err(AgentError::ChannelNotSupported(agent_name.clone())))
                }
            }
            ChannelKeysState::Keys(keys) => keys.next().map(Ok),
        }
    }
}

/// The capability shared by every agent kind.
///
/// Concrete agents supply their identity, an optional channel type tag,
/// optional default arguments, an optional history reducer, and the
/// [`Agent::create_channel`] constructor for their conversation surface.
/// Channel-key derivation, argument merging, and history reduction are
/// provided on top of those accessors.
#[async_trait]
pub trait Agent: Send + Sync {
    /// The agent's identity (id, name, description).
    fn identity(&self) -> &AgentIdentity;

    /// Tag naming the channel kind this agent communicates through.
    ///
    /// Agents that do not participate in shared conversations return `None`.
    fn channel_type(&self) -> Option<&'static str> {
        None
    }

    /// Default arguments applied to every invocation of this agent.
    fn arguments(&self) -> Option<&InvocationArguments> {
        None
    }

    /// The history reducer for this agent's conversations, if any.
    fn history_reducer(&self) -> Option<&dyn ChatHistoryReducer> {
        None
    }

    /// Create the conversation channel this agent communicates through.
    async fn create_channel(&self) -> Result<Box<dyn AgentChannel>, AgentError>;

    /// Derive the keys identifying this agent's channel.
    ///
    /// Yields the channel type tag alone, or, when a history reducer is
    /// configured, the tag followed by the reducer's type name and the
    /// decimal form of its state hash. Agents sharing all three keys share
    /// a channel.
    fn channel_keys(&self) -> ChannelKeys {
        let Some(channel_type) = self.channel_type() else {
            return ChannelKeys::unsupported(self.identity().name().to_string());
        };

        let mut keys = vec![channel_type.to_string()];
        if let Some(reducer) = self.history_reducer() {
            keys.push(reducer.type_name().to_string());
            keys.push(reducer.state_hash().to_string());
        }
        ChannelKeys::from_keys(keys)
    }

    /// Merge per-invocation overrides onto the agent's default arguments.
    ///
    /// Returns `None` when neither side has arguments and a borrow of the
    /// sole present side when only one does; only a true merge allocates.
    /// On a merge the override wins per key, base-only keys are preserved.
    fn merge_arguments<'a>(
        &'a self,
        override_args: Option<&'a InvocationArguments>,
    ) -> Option<Cow<'a, InvocationArguments>> {
        match (self.arguments(), override_args) {
            (None, None) => None,
            (None, Some(overrides)) => Some(Cow::Borrowed(overrides)),
            (Some(base), None) => Some(Cow::Borrowed(base)),
            (Some(base), Some(overrides)) => Some(Cow::Owned(base.merge_with(overrides))),
        }
    }

    /// Apply the configured history reducer to `history`.
    ///
    /// Returns `Ok(true)` and replaces the history's messages when the
    /// reducer produced a reduced sequence; returns `Ok(false)` with the
    /// history untouched when no reducer is configured or the reducer
    /// decided no reduction was needed.
    async fn reduce_history(&self, history: &mut ChatHistory) -> Result<bool, AgentError> {
        let Some(reducer) = self.history_reducer() else {
            return Ok(false);
        };

        match reducer.reduce(history).await? {
            Some(messages) => {
                history.messages = messages;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
