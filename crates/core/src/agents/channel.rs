//! Conversation channel seam.
//!
//! A channel connects an agent to a shared conversation surface. The base
//! library only defines the seam; concrete channels are supplied by
//! concrete agent types through [`crate::agents::Agent::create_channel`].

use crate::agents::base::AgentError;
use ak_protocol::{ChatHistory, ChatMessageContent};
use async_trait::async_trait;
use std::pin::Pin;
use tokio_stream::Stream;

/// A conversation surface shared between an agent and its callers.
#[async_trait]
pub trait AgentChannel: Send + Sync {
    /// Push messages onto the channel's conversation.
    async fn receive(&mut self, messages: Vec<ChatMessageContent>) -> Result<(), AgentError>;

    /// The conversation buffered on this channel.
    fn history(&self) -> &ChatHistory;

    /// Stream a snapshot of the buffered conversation, oldest first.
    fn message_stream(
        &self,
    ) -> Pin<Box<dyn Stream<Item = Result<ChatMessageContent, AgentError>> + Send>> {
        let messages: Vec<Result<ChatMessageContent, AgentError>> =
            self.history().iter().cloned().map(Ok).collect();
        Box::pin(tokio_stream::iter(messages))
    }
}
