// File: src/config.rs
// Purpose: Message table and rule specification loading from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::engine::Engine;
use crate::messages::Messages;
use crate::rule::RuleSet;

/// Validator configuration
///
/// ```toml
/// [messages]
/// required = "{field} is required"
///
/// [rules]
/// email = "required|email"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Check name -> message template, overlaid on the English defaults
    #[serde(default)]
    pub messages: BTreeMap<String, String>,

    /// Field name -> rule string
    #[serde(default)]
    pub rules: BTreeMap<String, String>,
}

impl ValidatorConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            messages = config.messages.len(),
            rules = config.rules.len(),
            "loaded validator config"
        );
        Ok(config)
    }

    /// Load from file if it exists, otherwise use defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid validator config")
    }

    /// Default messages with the configured templates on top
    pub fn messages(&self) -> Messages {
        let overrides: Messages = self.messages.iter().collect();
        let mut messages = Messages::default();
        messages.extend(&overrides);
        messages
    }

    /// The `[rules]` table, parsed. Fields are ordered by name.
    pub fn rule_set(&self) -> RuleSet {
        RuleSet::parse(&self.rules)
    }

    /// Engine with the built-in catalog and the configured messages
    pub fn engine(&self) -> Engine {
        Engine::new(Catalog::default(), self.messages())
    }
}
