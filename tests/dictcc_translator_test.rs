mod common;

use common::{dictcc_page, FixtureCurler, TimeoutCurler};
use dict_scraper::constants::DICTCC_RESULT_CAP;
use dict_scraper::providers::dictcc::{extract_translations, DictccTranslator};
use dict_scraper::types::{SourceLanguage, Translation, Translator};
use scraper::Html;

#[tokio::test]
async fn translates_single_word_from_german() {
    let page = dictcc_page(&[
        ("wall", "Wand {f}"),
        ("wriggled", "wand"),
        ("coiled", "wand (Schlange)"),
    ]);
    let translator = DictccTranslator::new(FixtureCurler::shared(page));

    let translations = translator.translate("wand", SourceLanguage::German).await;

    assert!(translations.contains(&Translation::new("Wand", "wall")));
    assert!(translations.contains(&Translation::new("wand", "wriggled")));
    assert!(translations.contains(&Translation::new("wand", "coiled")));
}

#[tokio::test]
async fn translates_single_word_from_english() {
    let page = dictcc_page(&[
        ("to wand", "abtasten [z.B. am Flughafen]"),
        ("wand", "Zauberstab {m}"),
        ("wand &lt;tech.&gt;", "Lesestift 2"),
    ]);
    let translator = DictccTranslator::new(FixtureCurler::shared(page));

    let translations = translator.translate("wand", SourceLanguage::English).await;

    // dict.cc keeps the infinitive marker on English terms
    assert!(translations.contains(&Translation::new("to wand", "abtasten")));
    assert!(translations.contains(&Translation::new("wand", "Zauberstab")));
    assert!(translations.contains(&Translation::new("wand", "Lesestift")));
}

#[test]
fn column_direction_mirrors_with_source_language() {
    // Same fixture rows, both query directions: every pair comes back with
    // source and target swapped relative to the other direction.
    let page = dictcc_page(&[("wall", "Wand"), ("wall chart", "Wandtafel")]);
    let doc = Html::parse_document(&page);

    let from_english = extract_translations(SourceLanguage::English, &doc);
    let from_german = extract_translations(SourceLanguage::German, &doc);

    let mirrored: std::collections::BTreeSet<_> = from_english
        .iter()
        .map(|t| Translation::new(t.target_term.clone(), t.source_term.clone()))
        .collect();
    assert_eq!(from_german, mirrored);
    assert!(from_english.contains(&Translation::new("wall", "Wand")));
    assert!(from_german.contains(&Translation::new("Wand", "wall")));
}

#[test]
fn cap_keeps_the_smallest_translations() {
    let rows: Vec<(String, String)> = (0..15)
        .map(|i| (format!("english{i:02}"), format!("german{i:02}")))
        .collect();
    let rows: Vec<(&str, &str)> = rows.iter().map(|(e, g)| (e.as_str(), g.as_str())).collect();
    let doc = Html::parse_document(&dictcc_page(&rows));

    let translations = extract_translations(SourceLanguage::English, &doc);

    assert_eq!(translations.len(), DICTCC_RESULT_CAP);
    // deterministic cap: the surviving subset is the first ten in
    // Translation order, independent of row order
    for (i, translation) in translations.iter().enumerate() {
        assert_eq!(translation.source_term, format!("english{i:02}"));
    }
}

#[test]
fn rows_cleaned_to_nothing_are_skipped() {
    let page = dictcc_page(&[("42 (obs.)", "Wand"), ("wall", "Wand")]);
    let doc = Html::parse_document(&page);

    let translations = extract_translations(SourceLanguage::English, &doc);

    assert_eq!(translations.len(), 1);
    assert!(translations.contains(&Translation::new("wall", "Wand")));
}

#[tokio::test]
async fn timeout_yields_empty_set() {
    let translator = DictccTranslator::new(TimeoutCurler::shared());

    let translations = translator.translate("wand", SourceLanguage::German).await;

    assert!(translations.is_empty());
}

#[test]
fn request_host_follows_source_language() {
    assert!(DictccTranslator::build_url("wand", SourceLanguage::German)
        .starts_with("http://de-en.dict.cc/"));
    assert!(DictccTranslator::build_url("wand", SourceLanguage::English)
        .starts_with("http://en-de.dict.cc/"));
    let url = DictccTranslator::build_url("apple pie", SourceLanguage::English);
    assert!(url.contains("s=apple%20pie") || url.contains("s=apple+pie"));
}
