//! The closed set of translation provider adapters and the registry that
//! selects them by name.

pub mod dictcc;
pub mod google;
pub mod leo;
pub mod pons;
pub mod woerterbuch;

pub use dictcc::DictccTranslator;
pub use google::GoogleTranslator;
pub use leo::LeoTranslator;
pub use pons::PonsTranslator;
pub use woerterbuch::WoerterbuchTranslator;

use crate::constants::*;
use crate::types::{SharedCurler, Translator};

/// Every registered provider name, in registry order.
pub const ALL_PROVIDERS: [&str; 5] = [
    DICTCC_PROVIDER,
    WOERTERBUCH_PROVIDER,
    LEO_PROVIDER,
    PONS_PROVIDER,
    GOOGLE_PROVIDER,
];

/// Creates the translator registered under `name`, if any.
pub fn create_translator(name: &str, curler: SharedCurler) -> Option<Box<dyn Translator>> {
    match name {
        DICTCC_PROVIDER => Some(Box::new(DictccTranslator::new(curler))),
        WOERTERBUCH_PROVIDER => Some(Box::new(WoerterbuchTranslator::new(curler))),
        LEO_PROVIDER => Some(Box::new(LeoTranslator::new(curler))),
        PONS_PROVIDER => Some(Box::new(PonsTranslator::new(curler))),
        GOOGLE_PROVIDER => Some(Box::new(GoogleTranslator::new(curler))),
        _ => None,
    }
}

/// Creates one translator per registered provider.
pub fn all_translators(curler: &SharedCurler) -> Vec<Box<dyn Translator>> {
    ALL_PROVIDERS
        .iter()
        .filter_map(|name| create_translator(name, curler.clone()))
        .collect()
}
