//! Search query models.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::Field;

/// Lookup strategy used for a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// Exhaustive scan over the dataset
    #[default]
    Linear,
    /// Binary probe over a field-sorted view, expanded to neighbouring matches
    Binary,
}

impl SearchStrategy {
    /// Returns the strategy identifier
    pub fn id(&self) -> &'static str {
        match self {
            SearchStrategy::Linear => "linear",
            SearchStrategy::Binary => "binary",
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(SearchStrategy::Linear),
            "binary" => Ok(SearchStrategy::Binary),
            other => Err(format!("unknown search strategy: {other}")),
        }
    }
}

/// A single-field query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Field the query targets
    pub field: Field,

    /// Query text as entered by the user
    pub text: String,
}

impl SearchQuery {
    /// Create a new search query
    pub fn new(field: Field, text: impl Into<String>) -> Self {
        Self {
            field,
            text: text.into(),
        }
    }

    /// Query on the title field
    pub fn title(text: impl Into<String>) -> Self {
        Self::new(Field::Title, text)
    }

    /// Query on the author field
    pub fn author(text: impl Into<String>) -> Self {
        Self::new(Field::Author, text)
    }

    /// Query on the year field
    pub fn year(text: impl Into<String>) -> Self {
        Self::new(Field::Year, text)
    }
}
