//! Synonym lookup, a sibling capability to translation: same fetch and
//! failure discipline, but one language and plain strings.

pub mod woxikon;

pub use woxikon::Woxikon;
