//! Agent abstraction layer.
//!
//! This module defines the [`Agent`] trait that all agent kinds implement,
//! the identity value shared by every agent, the conversation channel seam,
//! and a registry that binds agents to their channels.

pub mod base;
pub mod channel;
pub mod identity;
pub mod registry;

pub use base::{Agent, AgentError, ChannelKeys};
pub use channel::AgentChannel;
pub use identity::AgentIdentity;
pub use registry::AgentRegistry;
