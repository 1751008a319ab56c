//! Invocation argument models.
//!
//! This module defines the argument container passed to agent invocations:
//! named parameters plus a nested execution-settings map, with right-biased
//! merge semantics (override wins on key collision).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Named parameters and execution settings for an agent invocation.
///
/// An agent may hold default arguments; callers may pass per-invocation
/// overrides. [`InvocationArguments::merge_with`] combines the two with the
/// override taking precedence per key while base-only keys are preserved.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct InvocationArguments {
    /// Top-level named parameters, e.g. template variables.
    #[serde(default)]
    pub params: HashMap<String, Value>,

    /// Per-service execution settings, e.g. model or sampling options.
    #[serde(default)]
    pub execution_settings: HashMap<String, Value>,
}

impl InvocationArguments {
    /// Create an empty argument container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add an execution setting.
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.execution_settings.insert(key.into(), value.into());
        self
    }

    /// Look up a named parameter.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Look up an execution setting.
    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.execution_settings.get(key)
    }

    /// Whether both maps are empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty() && self.execution_settings.is_empty()
    }

    /// Merge `override_args` on top of `self` into a new container.
    ///
    /// Both the parameter map and the execution-settings map take the union
    /// of keys; `override_args` wins where both sides define a key.
    pub fn merge_with(&self, override_args: &InvocationArguments) -> InvocationArguments {
        let mut params = self.params.clone();
        params.extend(
            override_args
                .params
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );

        let mut execution_settings = self.execution_settings.clone();
        execution_settings.extend(
            override_args
                .execution_settings
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );

        InvocationArguments {
            params,
            execution_settings,
        }
    }
}
