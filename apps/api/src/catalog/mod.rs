//! Topic Catalog: the fixed set of Talent Management topics and their help links.
//!
//! Built once at startup and shared read-only through `AppState`. Iteration order is the
//! order topics are presented to the remote model.

use serde::Serialize;
use thiserror::Error;

pub mod topics;

/// A single documentation link attached to a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkInfo {
    pub title: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicEntry {
    pub key: &'static str,
    pub display_name: &'static str,
    /// Descriptive phrases handed to the remote model as context.
    pub keywords: &'static [&'static str],
    pub links: &'static [LinkInfo],
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog contains no topics")]
    Empty,

    #[error("Duplicate topic key: {0}")]
    DuplicateKey(&'static str),

    #[error("Topic '{0}' has no links")]
    MissingLinks(&'static str),
}

/// Number of keywords per topic shown in the prompt listing.
const PROMPT_KEYWORDS: usize = 5;

#[derive(Debug, Clone)]
pub struct TopicCatalog {
    entries: &'static [TopicEntry],
}

impl TopicCatalog {
    /// Validates the entry table: at least one topic, unique keys, every topic linked.
    pub fn new(entries: &'static [TopicEntry]) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.key == entry.key) {
                return Err(CatalogError::DuplicateKey(entry.key));
            }
            if entry.links.is_empty() {
                return Err(CatalogError::MissingLinks(entry.key));
            }
        }

        Ok(Self { entries })
    }

    /// The eight SAP SuccessFactors Talent Management topics.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(topics::TOPICS)
    }

    pub fn lookup(&self, key: &str) -> Option<&'static TopicEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn all_keys(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.key).collect()
    }

    pub fn entries(&self) -> &'static [TopicEntry] {
        self.entries
    }

    /// One line per topic: key, display name and the first few keywords.
    pub fn render_for_prompt(&self) -> String {
        self.entries
            .iter()
            .map(|e| {
                let examples: Vec<&str> =
                    e.keywords.iter().take(PROMPT_KEYWORDS).copied().collect();
                format!(
                    "- {}: {} (examples: {})",
                    e.key,
                    e.display_name,
                    examples.join(", ")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
