pub mod aggregator;
pub mod config;
pub mod constants;
pub mod curler;
pub mod error;
pub mod logging;
pub mod mealy;
pub mod providers;
pub mod regexes;
pub mod synonyms;
pub mod types;
