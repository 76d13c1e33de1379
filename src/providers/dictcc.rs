//! Translator for dict.cc.
//!
//! The result table is flat: every row with an id attribute is a hit, the
//! second cell is the English term and the third the German one. No state
//! machine needed, but the cells are heavy with annotations (word class tags,
//! bracketed glosses, regional labels), so the cleanup pass does most of the
//! work here.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;
use url::Url;

use crate::constants::{DICTCC_PROVIDER, DICTCC_RESULT_CAP};
use crate::regexes::{self, any, strip_foreign_script, strip_garbage};
use crate::types::{SharedCurler, SourceLanguage, Translation, Translator};

/// The full annotation alternation for dict.cc cells, deleted to a fixed
/// point. Dotted lowercase words cover the "adj." / "ugs." tag style.
pub static MATCH_GARBAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&any(&[
        regexes::DIGITS,
        regexes::PARENTHESIS,
        regexes::SQUARE_BRACKETS,
        regexes::CURLY_BRACES,
        regexes::ANGLE_BRACKETS,
        regexes::SPECIAL_CHARACTERS,
        regexes::WORDS_WITH_POINT,
    ]))
    .unwrap()
});

pub struct DictccTranslator {
    curler: SharedCurler,
}

impl DictccTranslator {
    pub fn new(curler: SharedCurler) -> Self {
        Self { curler }
    }

    /// The request host decides the dictionary direction, so it is selected
    /// by the source language up front, never inferred from the result page.
    pub fn build_url(term: &str, source: SourceLanguage) -> String {
        let base = match source {
            SourceLanguage::German => "http://de-en.dict.cc/",
            SourceLanguage::English => "http://en-de.dict.cc/",
        };
        match Url::parse_with_params(base, &[("s", term)]) {
            Ok(url) => url.to_string(),
            Err(e) => {
                warn!("Failed to build dict.cc URL for {term}: {e}");
                String::new()
            }
        }
    }
}

#[async_trait::async_trait]
impl Translator for DictccTranslator {
    fn provider(&self) -> &'static str {
        DICTCC_PROVIDER
    }

    async fn translate(&self, term: &str, source: SourceLanguage) -> BTreeSet<Translation> {
        match self.curler.get(&Self::build_url(term, source)).await {
            Ok(body) => extract_translations(source, &Html::parse_document(&body)),
            Err(e) => {
                warn!("Could not reach dict.cc: {e}");
                BTreeSet::new()
            }
        }
    }
}

/// Walks the hit rows and pairs the English and German cells. The set is
/// capped after collection: `BTreeSet` iterates in `Translation` order, so
/// which entries survive the cap does not depend on fetch order.
pub fn extract_translations(source: SourceLanguage, doc: &Html) -> BTreeSet<Translation> {
    let hit_row = Selector::parse("table tr[id]").unwrap();
    let cell = Selector::parse("td").unwrap();

    let mut translations = BTreeSet::new();
    for row in doc.select(&hit_row) {
        let cells: Vec<ElementRef> = row.select(&cell).collect();
        let (Some(english_cell), Some(german_cell)) = (cells.get(1), cells.get(2)) else {
            continue;
        };
        let english = clean(&english_cell.text().collect::<String>());
        let german = clean(&german_cell.text().collect::<String>());
        if english.is_empty() || german.is_empty() {
            continue;
        }
        let translation = match source {
            SourceLanguage::English => Translation::new(english, german),
            SourceLanguage::German => Translation::new(german, english),
        };
        translations.insert(translation);
    }

    translations.into_iter().take(DICTCC_RESULT_CAP).collect()
}

/// Deletes annotations until the fix point at which no more garbage can be
/// removed, then drops characters from foreign scripts; dict.cc interleaves
/// transliterations into some datasets.
fn clean(input: &str) -> String {
    let stripped = strip_garbage(&MATCH_GARBAGE, input);
    strip_foreign_script(&stripped).trim().to_string()
}
