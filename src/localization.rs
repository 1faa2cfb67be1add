//! String lookup for department names.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{ManifestError, Result};

/// Localized string lookup.
pub trait Localizer {
    fn try_get_string(&self, key: &str) -> Option<String>;

    /// Like [`Localizer::try_get_string`], but falls back to the key itself.
    fn get_string(&self, key: &str) -> String {
        self.try_get_string(key).unwrap_or_else(|| key.to_string())
    }
}

/// A localizer with no strings; every lookup returns the key.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLocalizer;

impl Localizer for IdentityLocalizer {
    fn try_get_string(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Messages read from a Fluent-style `.ftl` file.
///
/// Only single-line `key = value` messages are understood. Comments, blank
/// lines and indented continuation or attribute lines are skipped.
#[derive(Debug, Clone, Default)]
pub struct LocaleCatalog {
    messages: HashMap<String, String>,
}

impl LocaleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(source: &str) -> Self {
        let mut messages = HashMap::new();
        for line in source.lines() {
            if line.is_empty() || line.starts_with(char::is_whitespace) || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if !is_message_id(key) {
                continue;
            }
            messages.insert(key.to_string(), value.trim().to_string());
        }
        Self { messages }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&source);
        tracing::debug!("Loaded {} messages from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.messages.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Localizer for LocaleCatalog {
    fn try_get_string(&self, key: &str) -> Option<String> {
        self.messages.get(key).cloned()
    }
}

fn is_message_id(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
