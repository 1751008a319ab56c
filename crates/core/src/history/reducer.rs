//! History reducer trait.

use crate::agents::base::AgentError;
use ak_protocol::{ChatHistory, ChatMessageContent};
use async_trait::async_trait;

/// A strategy for compacting a conversation history.
///
/// `reduce` is asynchronous so strategies backed by an external call, e.g.
/// a summarization model, can suspend while waiting for it.
#[async_trait]
pub trait ChatHistoryReducer: Send + Sync {
    /// Short type name of this reducer, used in channel-key derivation.
    fn type_name(&self) -> &'static str;

    /// Deterministic hash over this reducer's configuration.
    ///
    /// Identically configured reducers must hash equal so agents sharing a
    /// reducer configuration derive the same channel key.
    fn state_hash(&self) -> u64;

    /// Produce a reduced message sequence for `history`.
    ///
    /// Returns `Ok(None)` when no reduction is needed; the caller leaves
    /// the history untouched in that case. The reducer never mutates the
    /// history itself.
    async fn reduce(
        &self,
        history: &ChatHistory,
    ) -> Result<Option<Vec<ChatMessageContent>>, AgentError>;
}
