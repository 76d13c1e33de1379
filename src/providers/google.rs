//! Translator for the translate.google.com web endpoint.
//!
//! Unlike the dictionary sites this one answers with JSON: a nested array of
//! word-class groups, each holding the candidate terms for one part of
//! speech. No markup machinery involved; the only normalization is restoring
//! the infinitive marker on English verbs, which the endpoint drops.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::warn;
use url::Url;

use crate::constants::GOOGLE_PROVIDER;
use crate::error::TranslateError;
use crate::types::{SharedCurler, SourceLanguage, Translation, Translator};

pub struct GoogleTranslator {
    curler: SharedCurler,
}

impl GoogleTranslator {
    pub fn new(curler: SharedCurler) -> Self {
        Self { curler }
    }

    pub fn build_url(term: &str, source: SourceLanguage) -> String {
        let (sl, tl) = match source {
            SourceLanguage::German => ("de", "en"),
            SourceLanguage::English => ("en", "de"),
        };
        match Url::parse_with_params(
            "http://translate.google.de/translate_a/t",
            &[
                ("client", "t"),
                ("sl", sl),
                ("tl", tl),
                ("hl", "de"),
                ("sc", "2"),
                ("ie", "UTF-8"),
                ("oe", "UTF-8"),
                ("ssel", "0"),
                ("tsel", "0"),
                ("q", term),
            ],
        ) {
            Ok(url) => url.to_string(),
            Err(e) => {
                warn!("Failed to build google URL for {term}: {e}");
                String::new()
            }
        }
    }
}

#[async_trait::async_trait]
impl Translator for GoogleTranslator {
    fn provider(&self) -> &'static str {
        GOOGLE_PROVIDER
    }

    async fn translate(&self, term: &str, source: SourceLanguage) -> BTreeSet<Translation> {
        match self.curler.get(&Self::build_url(term, source)).await {
            Ok(body) => match extract_translations(source, &body) {
                Ok(translations) => translations,
                Err(e) => {
                    warn!("Could not parse google response: {e}");
                    BTreeSet::new()
                }
            },
            Err(e) => {
                warn!("Could not reach translate.google.com: {e}");
                BTreeSet::new()
            }
        }
    }
}

/// The response shape is `[_, groups, ...]` where each group is
/// `[word_class, [candidates...], _, queried_term]`. When the endpoint has no
/// dictionary entry, index 1 degenerates to a plain language code string.
pub fn extract_translations(
    source: SourceLanguage,
    body: &str,
) -> Result<BTreeSet<Translation>, TranslateError> {
    let response: Value =
        serde_json::from_str(body).map_err(|e| TranslateError::MarkupParse(e.to_string()))?;
    let Some(outer) = response.as_array() else {
        return Err(TranslateError::MarkupParse(
            "google response is not an array".into(),
        ));
    };

    let mut translations = BTreeSet::new();
    let Some(groups) = outer.get(1).and_then(Value::as_array) else {
        // a bare language code here means: no translations
        return Ok(translations);
    };

    for group in groups {
        let Some(group) = group.as_array() else {
            continue;
        };
        let word_class = group.first().and_then(Value::as_str).unwrap_or_default();
        let Some(candidates) = group.get(1).and_then(Value::as_array) else {
            continue;
        };
        let Some(queried) = group.get(3).and_then(Value::as_str) else {
            continue;
        };
        let is_verb = word_class.eq_ignore_ascii_case("verb");

        for candidate in candidates.iter().filter_map(Value::as_str) {
            let translation = match source {
                SourceLanguage::German => {
                    // candidate is the English side
                    let english = mark_infinitive(candidate, is_verb);
                    Translation::new(queried.to_string(), english)
                }
                SourceLanguage::English => {
                    let english = mark_infinitive(queried, is_verb);
                    Translation::new(english, candidate.to_string())
                }
            };
            translations.insert(translation);
        }
    }

    Ok(translations)
}

fn mark_infinitive(term: &str, is_verb: bool) -> String {
    if is_verb {
        format!("to {term}")
    } else {
        term.to_string()
    }
}
