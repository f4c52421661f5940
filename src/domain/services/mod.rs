pub mod aggregator;
pub mod canonicalizer;
pub mod vocabulary;

pub use aggregator::Aggregator;
pub use canonicalizer::{strip_serial_fragments, Canonicalizer};
pub use vocabulary::{CapitalizeRule, Vocabulary, VocabularyBuilder};
