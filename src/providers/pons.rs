//! Translator for pons.eu.
//!
//! The trickiest provider: the result page mixes confirmed hits with
//! "did you mean" suggestion blocks, and each block carries its own
//! dictionary direction. Extraction therefore runs as ambiguity check,
//! section scan, positional pairing, in that order, and the cleanup pass
//! has to remove a whole catalogue of grammar/register/region tags.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};
use url::Url;

use crate::constants::PONS_PROVIDER;
use crate::error::TranslateError;
use crate::regexes::{self, any, strip_garbage, strip_standalone_words};
use crate::types::{SharedCurler, SourceLanguage, Translation, Translator};

/// Bracketed and parenthesised asides, deleted to a fixed point.
pub static MATCH_GARBAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&any(&[regexes::SQUARE_BRACKETS, regexes::PARENTHESIS])).unwrap());

/// Annotation words pons sprinkles into its cells: articles, register labels
/// (fam, geh, vulg), regional labels (nordd, suedd, Am, Brit), case tags
/// (akk, dat, gen) and subject-field abbreviations. Removed only as
/// standalone tokens so real words containing one of these are untouched.
const ANNOTATION_WORDS: [&str; 42] = [
    "der", "die", "das", "the", "derb", "dial", "nt", "Am", "Brit", "liter", "old", "nordd",
    "s\u{fc}dd", "pej", "fam", "fam!", "dat", "akk", "+akk", "gen", "fig", "geh", "form", "prov",
    "vulg", "attr", "pl", "sing", "vb", "m", "f", "sl", "indef", "art", "Bsp", "Auto", "ASTRON",
    "GASTR", "ELEC", "MILIT", "\u{21c6}", "a.",
];

pub struct PonsTranslator {
    curler: SharedCurler,
}

impl PonsTranslator {
    pub fn new(curler: SharedCurler) -> Self {
        Self { curler }
    }

    pub fn build_url(term: &str, source: SourceLanguage) -> String {
        let lang = match source {
            SourceLanguage::German => "de",
            SourceLanguage::English => "en",
        };
        match Url::parse_with_params(
            "http://de.pons.eu/dict/search/results/",
            &[("q", term), ("l", "deen"), ("in", lang), ("lf", lang)],
        ) {
            Ok(url) => url.to_string(),
            Err(e) => {
                warn!("Failed to build pons.eu URL for {term}: {e}");
                String::new()
            }
        }
    }
}

#[async_trait::async_trait]
impl Translator for PonsTranslator {
    fn provider(&self) -> &'static str {
        PONS_PROVIDER
    }

    async fn translate(&self, term: &str, source: SourceLanguage) -> BTreeSet<Translation> {
        if term.is_empty() {
            return BTreeSet::new();
        }
        match self.curler.get(&Self::build_url(term, source)).await {
            Ok(body) => match extract_translations(term, source, &Html::parse_document(&body)) {
                Ok(translations) => translations,
                Err(TranslateError::FuzzyOnly) => {
                    debug!("pons.eu only found fuzzy suggestions for {term}");
                    BTreeSet::new()
                }
                Err(e) => {
                    warn!("Extraction from pons.eu failed: {e}");
                    BTreeSet::new()
                }
            },
            Err(e) => {
                warn!("Could not reach pons.eu: {e}");
                BTreeSet::new()
            }
        }
    }
}

/// Extracts confirmed hits. Rows inside a fuzzy-suggestion page look exactly
/// like hits, so the ambiguity marker is checked before anything else.
pub fn extract_translations(
    term: &str,
    source: SourceLanguage,
    doc: &Html,
) -> Result<BTreeSet<Translation>, TranslateError> {
    let fuzzy_marker = Selector::parse(".alert.notice.fuzzysearch").unwrap();
    if doc.select(&fuzzy_marker).next().is_some() {
        return Err(TranslateError::FuzzyOnly);
    }

    let translations_block = Selector::parse("div.translations").unwrap();
    let heading = Selector::parse("h3").unwrap();

    let mut translations = BTreeSet::new();
    let mut saw_block = false;
    for block in doc.select(&translations_block) {
        saw_block = true;
        // Only sections headed by the queried term hold hits for it; the
        // headless stub block ("empty hidden") counts as well.
        let relevant = match block.select(&heading).next() {
            Some(h3) => {
                let text = h3.text().collect::<String>().to_lowercase();
                text.contains(&term.to_lowercase()) || heading_is_hidden_stub(&h3)
            }
            None => true,
        };
        if relevant {
            collect_pairs(&block, source, &mut translations);
        }
    }

    if !saw_block {
        // Older result layout: hits hang off data-translation containers.
        let container = Selector::parse("[data-translation]").unwrap();
        for block in doc.select(&container) {
            collect_pairs(&block, source, &mut translations);
        }
    }

    Ok(translations)
}

fn heading_is_hidden_stub(h3: &ElementRef) -> bool {
    h3.value()
        .attr("class")
        .map(|class| class.contains("empty") && class.contains("hidden"))
        .unwrap_or(false)
}

/// Pairs `.source` with `.target` entries positionally. Each entry's markup
/// names the dictionary direction of its section; that marker, combined with
/// the query's source language, decides which side becomes the source term.
fn collect_pairs(
    block: &ElementRef,
    source: SourceLanguage,
    translations: &mut BTreeSet<Translation>,
) {
    let source_sel = Selector::parse(".source").unwrap();
    let target_sel = Selector::parse(".target").unwrap();

    let sources: Vec<ElementRef> = block.select(&source_sel).collect();
    let targets: Vec<ElementRef> = block.select(&target_sel).collect();
    if sources.len() != targets.len() {
        warn!(
            "Number of source and target entries mismatch: {} != {}",
            sources.len(),
            targets.len()
        );
    }

    let marker = match source {
        SourceLanguage::German => "deutsch-englisch",
        SourceLanguage::English => "englisch-deutsch",
    };

    for (source_cell, target_cell) in sources.iter().zip(targets.iter()) {
        let source_text = filter(&source_cell.text().collect::<String>());
        let target_text = filter(&target_cell.text().collect::<String>());
        if source_text.is_empty() || target_text.is_empty() {
            continue;
        }
        // The marker names the direction whose left side is the queried
        // language; without it the sides are mirrored.
        let translation = if source_cell.inner_html().contains(marker) {
            Translation::new(source_text, target_text)
        } else {
            Translation::new(target_text, source_text)
        };
        translations.insert(translation);
    }
}

/// Brackets and parentheses to a fixed point, then the standalone annotation
/// words, then whitespace cleanup.
pub fn filter(word: &str) -> String {
    let stripped = strip_garbage(&MATCH_GARBAGE, word);
    strip_standalone_words(&stripped, &ANNOTATION_WORDS)
}
