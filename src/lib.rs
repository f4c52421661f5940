pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, vocabulary_config::VocabularyConfig};
pub use crate::core::{
    etl::{ListingEngine, ListingOutcome},
    pipeline::InventoryPipeline,
};
pub use domain::model::{InputRow, ListingDocument, OutputMode, Template};
pub use domain::services::{Aggregator, Canonicalizer, Vocabulary};
pub use utils::error::{ErrorKind, ListingError, Result};
