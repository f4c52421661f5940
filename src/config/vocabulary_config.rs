use crate::domain::services::vocabulary::{CapitalizeRule, Vocabulary};
use crate::utils::error::{ListingError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// 詞庫設定檔
///
/// ```toml
/// [vocabulary]
/// extend_defaults = true
/// capitalize = "first_upper_rest_lower"
/// acronyms = ["PLC", "VFD"]
/// model_codes = ["ST-10Y"]
/// stop_words = ["on", "to"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyConfig {
    #[serde(default)]
    pub vocabulary: VocabularySection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularySection {
    /// 是否保留內建詞庫（預設 true）
    pub extend_defaults: Option<bool>,
    pub capitalize: Option<CapitalizeRule>,
    #[serde(default)]
    pub acronyms: Vec<String>,
    #[serde(default)]
    pub model_codes: Vec<String>,
    #[serde(default)]
    pub stop_words: Vec<String>,
}

impl VocabularyConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ListingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ListingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SHOP_ACRONYM})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn extends_defaults(&self) -> bool {
        self.vocabulary.extend_defaults.unwrap_or(true)
    }

    pub fn into_vocabulary(self) -> Vocabulary {
        let builder = if self.extends_defaults() {
            Vocabulary::defaults()
        } else {
            Vocabulary::builder()
        };

        let section = self.vocabulary;
        builder
            .acronyms(section.acronyms)
            .model_codes(section.model_codes)
            .stop_words(section.stop_words)
            .capitalize(section.capitalize.unwrap_or_default())
            .build()
    }
}

impl Validate for VocabularyConfig {
    fn validate(&self) -> Result<()> {
        let section = &self.vocabulary;
        let lists = [
            ("vocabulary.acronyms", &section.acronyms),
            ("vocabulary.model_codes", &section.model_codes),
            ("vocabulary.stop_words", &section.stop_words),
        ];

        for (field, entries) in lists {
            for entry in entries {
                validation::validate_non_empty_string(field, entry)?;
            }
        }

        // 單字是逐 token 比對的，含空白的縮寫永遠不會命中
        for entry in section.acronyms.iter().chain(&section.stop_words) {
            if entry.trim().contains(char::is_whitespace) {
                return Err(ListingError::InvalidConfigValueError {
                    field: "vocabulary".to_string(),
                    value: entry.clone(),
                    reason: "Entries are matched per word and cannot contain whitespace".to_string(),
                });
            }
        }

        Ok(())
    }
}
