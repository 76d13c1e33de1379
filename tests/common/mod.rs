//! Shared test doubles and page fixtures. The fixtures reproduce the markup
//! shapes the providers scrape, shrunk down to the structurally relevant
//! parts.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use dict_scraper::curler::Curler;
use dict_scraper::error::{Result, TranslateError};
use dict_scraper::types::SharedCurler;

/// Curler answering every request with a canned body.
pub struct FixtureCurler {
    body: String,
}

impl FixtureCurler {
    pub fn shared(body: impl Into<String>) -> SharedCurler {
        Arc::new(Self { body: body.into() })
    }
}

#[async_trait]
impl Curler for FixtureCurler {
    async fn get_with_timeout(&self, _url: &str, _timeout_ms: u64) -> Result<String> {
        Ok(self.body.clone())
    }
}

/// Curler whose every request times out.
pub struct TimeoutCurler;

impl TimeoutCurler {
    pub fn shared() -> SharedCurler {
        Arc::new(Self)
    }
}

#[async_trait]
impl Curler for TimeoutCurler {
    async fn get_with_timeout(&self, url: &str, timeout_ms: u64) -> Result<String> {
        Err(TranslateError::Timeout {
            url: url.to_string(),
            timeout_ms,
        })
    }
}

/// A woerterbuch.info result page: nested tables, a language header row, a
/// direct-hits sub-header, hit rows with two `td.hl` cells each, then the
/// next section header ending the hits.
pub fn woerterbuch_page(language_header: &str, hit_rows: &[(&str, &str)]) -> String {
    let mut rows = String::new();
    for (left, right) in hit_rows {
        rows.push_str(&format!(
            r#"<tr><td class="hl">{left}</td><td class="hl">{right}</td></tr>"#,
        ));
    }
    format!(
        r#"<html><body><table><tr><td>
<table>
<tr><td class="standard">{language_header}</td><td class="standard">Deutsch</td></tr>
<tr><td class="standard">Direkte Treffer</td></tr>
{rows}
<tr><td class="standard">Teilweise Treffer</td></tr>
<tr><td class="hl">stray suggestion row</td><td class="hl">should never be read</td></tr>
</table>
</td></tr></table></body></html>"#,
    )
}

/// A dict.cc result table: hit rows carry an id attribute, cell 1 is the
/// English term, cell 2 the German one.
pub fn dictcc_page(rows: &[(&str, &str)]) -> String {
    let mut body = String::from(
        r#"<html><body><table><tr><td colspan="3">Deutsch-Englisch Woerterbuch</td></tr>"#,
    );
    for (i, (english, german)) in rows.iter().enumerate() {
        body.push_str(&format!(
            r##"<tr id="tr{i}"><td><a href="#">{i}</a></td><td>{english}</td><td>{german}</td></tr>"##,
        ));
    }
    body.push_str("</table></body></html>");
    body
}
