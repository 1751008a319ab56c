//! # ak-core
//!
//! Agent abstraction and orchestration primitives for agent-kit.
//!
//! This crate provides:
//! - The [`agents::Agent`] trait: identity, channel-key derivation,
//!   argument merging, and history reduction shared by all agent kinds
//! - Conversation channels connecting agents to a shared conversation
//! - Pluggable history reducers for compacting long conversations
//!
//! ## Modules
//!
//! - [`agents`]: Agent trait, identity, channels, and the agent registry
//! - [`history`]: History reducer trait and implementations

pub mod agents;
pub mod history;
