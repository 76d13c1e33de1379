//! Synonym provider backed by woxikon.de. Only the English dataset is wired
//! up; the German one lives under a different path prefix and is not exposed
//! here.

use std::collections::BTreeSet;

use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

use crate::constants::WOXIKON_PROVIDER;
use crate::types::{SharedCurler, SourceLanguage, SynonymProvider};

pub struct Woxikon {
    curler: SharedCurler,
}

impl Woxikon {
    pub fn new(curler: SharedCurler) -> Self {
        Self { curler }
    }

    pub fn build_url(term: &str) -> String {
        let Ok(mut url) = Url::parse("http://synonyme.woxikon.de/") else {
            return String::new();
        };
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("synonyme-englisch")
                .push(&format!("{term}.php"));
        }
        url.to_string()
    }
}

#[async_trait::async_trait]
impl SynonymProvider for Woxikon {
    fn provider(&self) -> &'static str {
        WOXIKON_PROVIDER
    }

    async fn synonyms(&self, term: &str, _source: SourceLanguage) -> BTreeSet<String> {
        match self.curler.get(&Self::build_url(term)).await {
            Ok(body) => extract_synonyms(term, &Html::parse_document(&body)),
            Err(e) => {
                warn!("Could not reach woxikon.de: {e}");
                BTreeSet::new()
            }
        }
    }
}

/// Every link inside the synonym boxes is a synonym, except the queried term
/// itself, which the page links back to.
pub fn extract_synonyms(term: &str, doc: &Html) -> BTreeSet<String> {
    let link = Selector::parse(".inner a").unwrap();
    doc.select(&link)
        .map(|a| a.text().collect::<String>().trim().to_string())
        .filter(|synonym| !synonym.is_empty() && synonym != term)
        .collect()
}
