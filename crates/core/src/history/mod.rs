//! Conversation history reduction.
//!
//! Long conversations are compacted by a pluggable reducer strategy before
//! being sent back to a model. The [`ChatHistoryReducer`] trait defines the
//! seam; [`TruncationReducer`] is the built-in strategy that keeps only the
//! most recent messages.

pub mod reducer;
pub mod truncation;

pub use reducer::ChatHistoryReducer;
pub use truncation::TruncationReducer;
