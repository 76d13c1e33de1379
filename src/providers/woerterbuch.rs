//! Translator for woerterbuch.info.
//!
//! The result page is one big HTML soup of nested tables. Only the "direct
//! hits" rows of the section for the queried language are confirmed
//! translations, so a small Mealy machine scans the rows: wait for the
//! language header, then for the direct-hits sub-header, then emit a pair per
//! row until the first row that no longer carries two hit cells.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{trace, warn};
use url::Url;

use crate::constants::WOERTERBUCH_PROVIDER;
use crate::error::TranslateError;
use crate::mealy::{Handler, MealyMachine, StateEnum};
use crate::regexes::{self, any, strip_garbage};
use crate::types::{SharedCurler, SourceLanguage, Translation, Translator};

/// English cells carry the infinitive marker and parenthesised glosses.
pub static FILTER_ENGLISH: Lazy<Regex> =
    Lazy::new(|| Regex::new(&any(&[regexes::INFINITIVE_TO, regexes::PARENTHESIS])).unwrap());

/// German cells only carry parenthesised glosses.
pub static FILTER_GERMAN: Lazy<Regex> = Lazy::new(|| Regex::new(regexes::PARENTHESIS).unwrap());

/// Where the row scan currently is, relative to the direct-hits section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanState {
    /// Last table row was before the relevant section
    Before,
    /// Last table row was in a nonrelevant section
    InSection,
    /// Last table row was in direct hits
    InDirectHits,
    /// Last table row was beyond direct hits
    Finished,
}

impl StateEnum for ScanState {
    fn all() -> &'static [Self] {
        &[
            ScanState::Before,
            ScanState::InSection,
            ScanState::InDirectHits,
            ScanState::Finished,
        ]
    }

    fn is_terminal(&self) -> bool {
        matches!(self, ScanState::Finished)
    }
}

pub struct WoerterbuchTranslator {
    curler: SharedCurler,
}

impl WoerterbuchTranslator {
    pub fn new(curler: SharedCurler) -> Self {
        Self { curler }
    }

    /// Formats the query URL for the given term. The parameters are the same
    /// for both source languages; the page answers with per-language sections.
    pub fn url_for(term: &str) -> String {
        // 's=dict' as opposed to 'thesaurus', which would search for synonyms
        match Url::parse_with_params(
            "http://www.woerterbuch.info/",
            &[("s", "dict"), ("l", "en"), ("query", term)],
        ) {
            Ok(url) => url.to_string(),
            Err(e) => {
                warn!("Failed to build woerterbuch URL for {term}: {e}");
                String::new()
            }
        }
    }
}

#[async_trait::async_trait]
impl Translator for WoerterbuchTranslator {
    fn provider(&self) -> &'static str {
        WOERTERBUCH_PROVIDER
    }

    async fn translate(&self, term: &str, source: SourceLanguage) -> BTreeSet<Translation> {
        match self.curler.get(&Self::url_for(term)).await {
            Ok(body) => extract_translations(source, &Html::parse_document(&body)),
            Err(TranslateError::Timeout { url, timeout_ms }) => {
                // woerterbuch.info isn't as reliable as it should be
                warn!("Connection to {url} timed out after {timeout_ms}ms");
                BTreeSet::new()
            }
            Err(e) => {
                warn!("GET request to woerterbuch.info failed: {e}");
                BTreeSet::new()
            }
        }
    }
}

/// Builds the row scanner for one query. The machine is fed `tr` elements and
/// emits at most one translation per step.
pub fn scanner<'a>(
    source: SourceLanguage,
) -> MealyMachine<ScanState, ElementRef<'a>, Option<Translation>> {
    MealyMachine::from_transitions(
        ScanState::Before,
        vec![
            (ScanState::Before, look_for_language_header(source)),
            (ScanState::InSection, look_for_direct_hits_header()),
            (ScanState::InDirectHits, parse_direct_hits(source)),
            (ScanState::Finished, do_nothing()),
        ],
    )
}

/// Parses only the direct hits out of the HTML soup.
pub fn extract_translations(source: SourceLanguage, doc: &Html) -> BTreeSet<Translation> {
    let rows = Selector::parse("table table tr").unwrap();

    let mut parser = scanner(source);
    if !parser.is_total() {
        // Configuration defect; an incomplete machine must not be run.
        warn!("woerterbuch scanner transition table is not total, refusing to scan");
        return BTreeSet::new();
    }

    // Just feed the relevant elements into the machine until it is finished,
    // collecting translations along the way.
    let mut translations = BTreeSet::new();
    for row in doc.select(&rows) {
        if parser.is_finished() {
            break;
        }
        if let Some(translation) = parser.step(row) {
            trace!("extracted {translation}");
            translations.insert(translation);
        }
    }

    translations
}

type RowHandler<'a> = Handler<ScanState, ElementRef<'a>, Option<Translation>>;

fn look_for_language_header<'a>(source: SourceLanguage) -> RowHandler<'a> {
    Box::new(move |row| {
        let next = if is_language_header(&row, source) {
            ScanState::InSection
        } else {
            ScanState::Before
        };
        (next, None)
    })
}

fn look_for_direct_hits_header<'a>() -> RowHandler<'a> {
    Box::new(|row| {
        let next = if is_direct_hits_header(&row) {
            ScanState::InDirectHits
        } else {
            ScanState::InSection
        };
        (next, None)
    })
}

fn parse_direct_hits<'a>(source: SourceLanguage) -> RowHandler<'a> {
    Box::new(move |row| {
        let cell = Selector::parse("td.hl").unwrap();
        let columns: Vec<ElementRef> = row.select(&cell).collect();
        if columns.len() < 2 {
            // we hit the end of the section
            return (ScanState::Finished, None);
        }
        // Column 0 holds the queried language, column 1 the target language.
        // The english-side filter applies to whichever column is English.
        let translation = match source {
            SourceLanguage::English => Translation::new(
                filter_english(&cell_text(&columns[0])),
                filter_german(&cell_text(&columns[1])),
            ),
            SourceLanguage::German => Translation::new(
                filter_german(&cell_text(&columns[0])),
                filter_english(&cell_text(&columns[1])),
            ),
        };
        (ScanState::InDirectHits, Some(translation))
    })
}

fn do_nothing<'a>() -> RowHandler<'a> {
    Box::new(|_| (ScanState::Finished, None))
}

fn header_cell_text(row: &ElementRef) -> Option<String> {
    let header = Selector::parse("td.standard").unwrap();
    row.select(&header).next().map(|cell| cell_text(&cell))
}

fn is_language_header(row: &ElementRef, source: SourceLanguage) -> bool {
    let Some(text) = header_cell_text(row) else {
        return false;
    };
    let label = match source {
        SourceLanguage::English => "englisch",
        SourceLanguage::German => "deutsch",
    };
    text.trim().to_lowercase() == label
}

fn is_direct_hits_header(row: &ElementRef) -> bool {
    header_cell_text(row)
        .map(|text| text.trim().to_lowercase().starts_with("direkte"))
        .unwrap_or(false)
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>()
}

fn filter_english(term: &str) -> String {
    strip_garbage(&FILTER_ENGLISH, term)
}

fn filter_german(term: &str) -> String {
    strip_garbage(&FILTER_GERMAN, term)
}
