//! Translator for leo.org.
//!
//! leo serves a structured XML document, so extraction is two parallel word
//! lists rather than a row scan. The lists are supposed to line up pairwise;
//! when they do not, the scan proceeds with the shorter length and leaves a
//! diagnostic instead of failing outright.

use std::collections::BTreeSet;

use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

use crate::constants::{LEO_PROVIDER, LEO_RESULT_CAP};
use crate::regexes::{collapse_whitespace, strip_leading_article};
use crate::types::{SharedCurler, SourceLanguage, Translation, Translator};

const ARTICLES: [&str; 4] = ["der", "die", "das", "the"];

pub struct LeoTranslator {
    curler: SharedCurler,
}

impl LeoTranslator {
    pub fn new(curler: SharedCurler) -> Self {
        Self { curler }
    }

    pub fn build_url(term: &str, source: SourceLanguage) -> String {
        let search_loc = match source {
            SourceLanguage::German => "1",
            SourceLanguage::English => "-1",
        };
        match Url::parse_with_params(
            "http://dict.leo.org/dictQuery/m-vocab/ende/query.xml",
            &[
                ("tolerMode", "nof"),
                ("lp", "ende"),
                ("lang", "de"),
                ("rmWords", "off"),
                ("rmSearch", "on"),
                ("directN", "0"),
                ("search", term),
                ("searchLoc", search_loc),
                ("resultOrder", "basic"),
                ("multiwordShowSingle", "on"),
                ("sectLenMax", "16"),
            ],
        ) {
            Ok(url) => url.to_string(),
            Err(e) => {
                warn!("Failed to build leo.org URL for {term}: {e}");
                String::new()
            }
        }
    }
}

#[async_trait::async_trait]
impl Translator for LeoTranslator {
    fn provider(&self) -> &'static str {
        LEO_PROVIDER
    }

    async fn translate(&self, term: &str, source: SourceLanguage) -> BTreeSet<Translation> {
        if term.is_empty() {
            return BTreeSet::new();
        }
        match self.curler.get(&Self::build_url(term, source)).await {
            Ok(body) => extract_translations(source, &Html::parse_document(&body)),
            Err(e) => {
                warn!("Could not get data from leo.org: {e}");
                BTreeSet::new()
            }
        }
    }
}

/// Pairs the first word of every English side with the first word of every
/// German side, positionally.
pub fn extract_translations(source: SourceLanguage, doc: &Html) -> BTreeSet<Translation> {
    let english_terms = side_words(doc, "en");
    let german_terms = side_words(doc, "de");

    if english_terms.len() != german_terms.len() {
        // we should at least output a warning
        warn!(
            "Number of english and german terms mismatch: {} != {}",
            english_terms.len(),
            german_terms.len()
        );
    }

    // Save as many pairs as possible
    let mut translations = BTreeSet::new();
    for (english, german) in english_terms.iter().zip(german_terms.iter()) {
        let english = filter(english);
        let german = filter(german);
        let translation = match source {
            SourceLanguage::English => Translation::new(english, german),
            SourceLanguage::German => Translation::new(german, english),
        };
        translations.insert(translation);
    }

    translations.into_iter().take(LEO_RESULT_CAP).collect()
}

/// The text of the first `word` element of every `side` with the given
/// language attribute, in document order.
fn side_words(doc: &Html, lang: &str) -> Vec<String> {
    let side = Selector::parse(&format!(r#"side[lang="{lang}"]"#)).unwrap();
    let word = Selector::parse("word").unwrap();
    doc.select(&side)
        .filter_map(|s| s.select(&word).next())
        .map(|w| w.text().collect::<String>())
        .collect()
}

/// leo prefixes nouns with their article; strip a single leading one.
fn filter(word: &str) -> String {
    strip_leading_article(&collapse_whitespace(word), &ARTICLES)
}
