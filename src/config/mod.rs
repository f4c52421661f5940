pub mod cli;
pub mod vocabulary_config;

#[cfg(feature = "cli")]
use crate::adapters::SUPPORTED_INPUT_EXTENSIONS;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{OutputMode, Template};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "inventory-lister")]
#[command(about = "Turn equipment spreadsheets into formatted inventory listings")]
pub struct CliConfig {
    /// Spreadsheet to read (xlsx, xlsm, xlsb, xls, ods, csv or tsv)
    #[arg(short, long)]
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Listing template: standard or date_after_sn
    #[arg(long, default_value = "standard")]
    pub template: String,

    #[arg(long, value_enum, default_value_t = OutputMode::Both)]
    pub mode: OutputMode,

    /// TOML file with extra acronyms, model codes and stop words
    #[arg(long)]
    pub vocabulary: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn template(&self) -> Template {
        Template::from_name(&self.template)
    }

    fn output_mode(&self) -> OutputMode {
        self.mode
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_file_extensions(
            "input",
            std::slice::from_ref(&self.input),
            SUPPORTED_INPUT_EXTENSIONS,
        )?;
        validation::validate_path("output_path", &self.output_path)?;

        if let Some(vocabulary) = &self.vocabulary {
            validation::validate_path("vocabulary", vocabulary)?;
            validation::validate_file_extensions(
                "vocabulary",
                std::slice::from_ref(vocabulary),
                &["toml"],
            )?;
        }

        Ok(())
    }
}
