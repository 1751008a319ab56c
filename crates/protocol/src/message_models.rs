//! Chat message and conversation history models.
//!
//! This module defines the message content exchanged with agents and the
//! mutable conversation history that history reducers operate on.

use serde::{Deserialize, Serialize};

/// The author role of a chat message.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Message authored by the end user.
    User,

    /// Message authored by an agent.
    Assistant,

    /// Instruction-level message establishing agent behavior.
    System,

    /// Result of a tool invocation fed back into the conversation.
    Tool,
}

/// A single message in a conversation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessageContent {
    /// Who authored this message.
    pub role: ChatRole,

    /// The textual content of the message.
    pub content: String,

    /// Optional author name, e.g. the agent name for assistant messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ChatMessageContent {
    /// Create a message with the given role and content.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            name: None,
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    /// Set the author name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// An ordered conversation history.
///
/// Histories are mutable: history reducers replace the message list in
/// place when they compact a conversation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatHistory {
    /// Messages in conversation order, oldest first.
    pub messages: Vec<ChatMessageContent>,
}

impl ChatHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history from an existing message list.
    pub fn from_messages(messages: Vec<ChatMessageContent>) -> Self {
        Self { messages }
    }

    /// Append a message to the history.
    pub fn push(&mut self, message: ChatMessageContent) {
        self.messages.push(message);
    }

    /// Number of messages in the history.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the history contains no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate over the messages in conversation order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChatMessageContent> {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors_set_role() {
        assert_eq!(ChatMessageContent::user("hi").role, ChatRole::User);
        assert_eq!(ChatMessageContent::assistant("hi").role, ChatRole::Assistant);
        assert_eq!(ChatMessageContent::system("hi").role, ChatRole::System);
    }

    #[test]
    fn test_message_with_name() {
        let message = ChatMessageContent::assistant("done").with_name("reviewer");
        assert_eq!(message.name.as_deref(), Some("reviewer"));
    }

    #[test]
    fn test_history_push_and_len() {
        let mut history = ChatHistory::new();
        assert!(history.is_empty());

        history.push(ChatMessageContent::user("first"));
        history.push(ChatMessageContent::assistant("second"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.messages[0].content, "first");
        assert_eq!(history.messages[1].content, "second");
    }
}
