//! Fans a query out to every configured provider and merges the results.
//!
//! The merge is deliberately dumb: an exact-string set union. All the
//! cleverness lives in the adapters' extraction; once a `Translation` is
//! constructed it either is or is not the same pair as another one. No
//! ranking, no fuzzy matching across providers.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::{info, warn};

use crate::types::{SharedCurler, SourceLanguage, Translation, Translator};

pub struct Aggregator {
    translators: Vec<Arc<dyn Translator>>,
}

impl Aggregator {
    pub fn new(translators: Vec<Arc<dyn Translator>>) -> Self {
        Self { translators }
    }

    /// An aggregator over every registered provider.
    pub fn from_registry(curler: &SharedCurler) -> Self {
        let translators = crate::providers::all_translators(curler)
            .into_iter()
            .map(Arc::from)
            .collect();
        Self::new(translators)
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.translators.iter().map(|t| t.provider()).collect()
    }

    /// Queries all providers concurrently and collects each provider's result
    /// under its name. Adapters resolve their own failures into empty sets,
    /// and a crashed task is caught here, so one misbehaving provider never
    /// prevents the others' results from being collected.
    pub async fn aggregate(
        &self,
        term: &str,
        source: SourceLanguage,
    ) -> HashMap<&'static str, BTreeSet<Translation>> {
        let mut handles = Vec::with_capacity(self.translators.len());
        for translator in &self.translators {
            let translator = Arc::clone(translator);
            let term = term.to_string();
            let name = translator.provider();
            handles.push((
                name,
                tokio::spawn(async move { translator.translate(&term, source).await }),
            ));
        }

        let mut results = HashMap::with_capacity(handles.len());
        for (name, handle) in handles {
            let translations = match handle.await {
                Ok(translations) => translations,
                Err(e) => {
                    warn!("Provider task for {name} crashed: {e}");
                    BTreeSet::new()
                }
            };
            info!("{name} contributed {} translations", translations.len());
            results.insert(name, translations);
        }
        results
    }

    /// Queries all providers and flattens their results into one set.
    pub async fn translate_all(
        &self,
        term: &str,
        source: SourceLanguage,
    ) -> BTreeSet<Translation> {
        let results = self.aggregate(term, source).await;
        merge(&results)
    }
}

/// Plain deduplicating union of the per-provider sets. Union is commutative
/// and associative, so the order in which providers completed is irrelevant.
pub fn merge(results: &HashMap<&'static str, BTreeSet<Translation>>) -> BTreeSet<Translation> {
    results
        .values()
        .flat_map(|set| set.iter().cloned())
        .collect()
}
