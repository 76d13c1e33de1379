use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::curler::Curler;

/// A single translation pair as extracted from a provider.
///
/// Equality and ordering are exact and case sensitive on
/// `(source_term, target_term)` - normalization has already happened by the
/// time a value is constructed, never at comparison time. The derived `Ord`
/// lets result sets live in a `BTreeSet`, which keeps iteration (and any
/// result cap) deterministic regardless of fetch order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Translation {
    pub source_term: String,
    pub target_term: String,
}

impl Translation {
    pub fn new(source_term: impl Into<String>, target_term: impl Into<String>) -> Self {
        Self {
            source_term: source_term.into(),
            target_term: target_term.into(),
        }
    }
}

impl std::fmt::Display for Translation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source_term, self.target_term)
    }
}

/// The language a query term is written in. The complementary language is the
/// implicit target. Determines the request variant per provider and which side
/// of a paired-column layout is the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceLanguage {
    German,
    English,
}

impl SourceLanguage {
    /// The other side of the language pair.
    pub fn target(self) -> SourceLanguage {
        match self {
            SourceLanguage::German => SourceLanguage::English,
            SourceLanguage::English => SourceLanguage::German,
        }
    }
}

impl std::str::FromStr for SourceLanguage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "german" | "de" => Ok(SourceLanguage::German),
            "english" | "en" => Ok(SourceLanguage::English),
            other => Err(format!("unknown source language: {other}")),
        }
    }
}

/// Core trait every translation provider adapter implements.
///
/// A provider translates a term from the source language into the implicit
/// complementary target language. Network or extraction failures are resolved
/// inside the adapter into an empty set plus a diagnostic; `translate` never
/// fails outright, so one misbehaving provider cannot abort its siblings.
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Unique identifier for the underlying data source.
    fn provider(&self) -> &'static str;

    /// Translate a term, returning the set of extracted translation pairs.
    async fn translate(&self, term: &str, source: SourceLanguage) -> BTreeSet<Translation>;
}

/// Supplemental lookup: synonyms for a term within one language.
#[async_trait::async_trait]
pub trait SynonymProvider: Send + Sync {
    fn provider(&self) -> &'static str;

    async fn synonyms(&self, term: &str, source: SourceLanguage) -> BTreeSet<String>;
}

/// Shared constructor shape for adapters that only need a curler.
pub type SharedCurler = std::sync::Arc<dyn Curler>;
