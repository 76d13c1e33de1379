/// Provider name constants to ensure consistency across the codebase.
/// These are the user-facing identifiers used by the CLI, the registry and
/// per-provider result attribution.
pub const DICTCC_PROVIDER: &str = "dict.cc";
pub const WOERTERBUCH_PROVIDER: &str = "woerterbuch.info";
pub const LEO_PROVIDER: &str = "leo.org";
pub const PONS_PROVIDER: &str = "pons.eu";
pub const GOOGLE_PROVIDER: &str = "translate.google.com";
pub const WOXIKON_PROVIDER: &str = "woxikon.de";

/// Result caps per provider. Common terms can return hundreds of rows; the
/// cap is attached to the adapter here rather than duplicated per call site.
pub const DICTCC_RESULT_CAP: usize = 10;
pub const LEO_RESULT_CAP: usize = 16;

/// Browser user agent sent with every fetch; some providers answer requests
/// without one with a captcha page.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:25.0) Gecko/20100101 Firefox/25.0";
