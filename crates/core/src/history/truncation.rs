//! Truncation-based history reducer.

use crate::agents::base::AgentError;
use crate::history::reducer::ChatHistoryReducer;
use ak_protocol::{ChatHistory, ChatMessageContent};
use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Keeps only the most recent messages of a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncationReducer {
    target_count: usize,
}

impl TruncationReducer {
    /// Create a reducer that keeps the last `target_count` messages.
    ///
    /// A target of zero is clamped to one; truncating to nothing would
    /// erase the conversation.
    pub fn new(target_count: usize) -> Self {
        Self {
            target_count: target_count.max(1),
        }
    }

    /// The number of messages this reducer keeps.
    pub fn target_count(&self) -> usize {
        self.target_count
    }
}

#[async_trait]
impl ChatHistoryReducer for TruncationReducer {
    fn type_name(&self) -> &'static str {
        "TruncationReducer"
    }

    fn state_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.type_name().hash(&mut hasher);
        self.target_count.hash(&mut hasher);
        hasher.finish()
    }

    async fn reduce(
        &self,
        history: &ChatHistory,
    ) -> Result<Option<Vec<ChatMessageContent>>, AgentError> {
        if history.len() <= self.target_count {
            return Ok(None);
        }

        let start = history.len() - self.target_count;
        Ok(Some(history.messages[start..].to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ak_protocol::ChatMessageContent;

    fn history_of(contents: &[&str]) -> ChatHistory {
        ChatHistory::from_messages(
            contents
                .iter()
                .map(|content| ChatMessageContent::user(*content))
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_reduce_keeps_last_messages_in_order() {
        let reducer = TruncationReducer::new(2);
        let history = history_of(&["first", "second", "third", "fourth"]);

        let reduced = reducer.reduce(&history).await.unwrap().unwrap();

        let contents: Vec<_> = reduced.iter().map(|message| message.content.as_str()).collect();
        assert_eq!(contents, vec!["third", "fourth"]);
    }

    #[tokio::test]
    async fn test_reduce_noop_when_within_target() {
        let reducer = TruncationReducer::new(5);
        let history = history_of(&["first", "second"]);

        let reduced = reducer.reduce(&history).await.unwrap();
        assert!(reduced.is_none());
    }

    #[tokio::test]
    async fn test_reduce_noop_on_exact_target() {
        let reducer = TruncationReducer::new(2);
        let history = history_of(&["first", "second"]);

        let reduced = reducer.reduce(&history).await.unwrap();
        assert!(reduced.is_none());
    }

    #[test]
    fn test_zero_target_clamped() {
        let reducer = TruncationReducer::new(0);
        assert_eq!(reducer.target_count(), 1);
    }

    #[test]
    fn test_state_hash_tracks_configuration() {
        assert_eq!(
            TruncationReducer::new(3).state_hash(),
            TruncationReducer::new(3).state_hash()
        );
        assert_ne!(
            TruncationReducer::new(3).state_hash(),
            TruncationReducer::new(4).state_hash()
        );
    }
}
