//! Model identifier and model selection rules

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidModelError;

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Substring identifying chat models worth offering
const CHAT_MODEL_MARKER: &str = "gpt";

/// Value object naming a text-generation model
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelId(String);

impl ModelId {
    /// Create a model id, rejecting blank input
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidModelError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(InvalidModelError { input: id });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the model id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ModelId {
    fn default() -> Self {
        Self(DEFAULT_MODEL.to_string())
    }
}

impl FromStr for ModelId {
    type Err = InvalidModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The chat models offered for selection, newest-looking names first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelCatalog {
    models: Vec<String>,
}

impl ModelCatalog {
    /// Build a catalog from every model id the provider reports.
    /// Keeps GPT models only, sorted in descending order without duplicates.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut models: Vec<String> = ids
            .into_iter()
            .map(Into::into)
            .filter(|id| id.contains(CHAT_MODEL_MARKER))
            .collect();
        models.sort_unstable_by(|a, b| b.cmp(a));
        models.dedup();
        Self { models }
    }

    /// Models in display order
    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.models.iter().any(|m| m == id)
    }

    /// The preselected model: the default model when offered, else the first entry
    pub fn default_choice(&self) -> Option<&str> {
        if self.contains(DEFAULT_MODEL) {
            Some(DEFAULT_MODEL)
        } else {
            self.models.first().map(String::as_str)
        }
    }
}
