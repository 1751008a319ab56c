//! # ak-protocol
//!
//! Core data models for agent-kit.
//!
//! This crate defines the shared value types used across the workspace:
//! - Chat messages and conversation histories exchanged with agents
//! - Invocation arguments (named parameters plus execution settings)
//!
//! ## Modules
//!
//! - [`message_models`]: Chat roles, message content, conversation history
//! - [`argument_models`]: Invocation argument container and merge semantics
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde and serde_json
//! - Independent compilation: No dependencies on other agent-kit crates

pub mod argument_models;
pub mod message_models;

// Re-export all public types for convenience
pub use argument_models::*;
pub use message_models::*;
