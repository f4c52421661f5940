use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_ACRONYMS: &[&str] = &[
    "CNC", "RPM", "HP", "LNS", "OSP", "ATC", "BT30", "CAT40", "APC",
];

pub const DEFAULT_MODEL_CODES: &[&str] = &[
    "LU15", "RA-3F", "HRF-155-LP", "SL-25B", "VF-2SS", "VF-1", "VF-2", "VF-4", "L25", "T300",
    "A-T14IA", "MC-600V-DC", "CT500F", "TS15", "MC-800V62", "VF-3", "ES-450HII", "MAM72-3VS",
    "RA-2G", "EA8", "VX20", "LB300-M", "SJIII-3219", "CONTURA 7/10/6", "L370MW", "LT10-MY",
    "EXCELLENCE 2F", "ROBOFIL 240", "VT500", "GR-658N", "L20 VIII", "VF-4SS", "VF-9B/40",
    "VA10M",
];

pub const DEFAULT_STOP_WORDS: &[&str] = &["and", "with", "for", "of", "the", "in"];

/// 一般單字的大小寫規則
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapitalizeRule {
    /// "mACHINE" -> "Machine"
    #[default]
    FirstUpperRestLower,
    /// "mACHINE" -> "MACHINE"
    FirstUpperOnly,
}

impl CapitalizeRule {
    pub fn apply(&self, word: &str) -> String {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            return String::new();
        };

        let rest = chars.as_str();
        let mut out: String = first.to_uppercase().collect();
        match self {
            CapitalizeRule::FirstUpperRestLower => out.push_str(&rest.to_lowercase()),
            CapitalizeRule::FirstUpperOnly => out.push_str(rest),
        }
        out
    }
}

/// Immutable word lists consulted by the canonicalizer.
///
/// Acronyms and model codes are stored upper-cased, stop words lower-cased,
/// so lookups are case-insensitive no matter how entries were supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    acronyms: HashSet<String>,
    model_codes: HashSet<String>,
    stop_words: HashSet<String>,
    capitalize: CapitalizeRule,
}

impl Vocabulary {
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::default()
    }

    /// 預設詞庫
    pub fn defaults() -> VocabularyBuilder {
        VocabularyBuilder::default()
            .acronyms(DEFAULT_ACRONYMS.iter().copied())
            .model_codes(DEFAULT_MODEL_CODES.iter().copied())
            .stop_words(DEFAULT_STOP_WORDS.iter().copied())
    }

    /// `upper` must already be upper-cased.
    pub fn is_preserved(&self, upper: &str) -> bool {
        self.acronyms.contains(upper) || self.model_codes.contains(upper)
    }

    /// `lower` must already be lower-cased.
    pub fn is_stop_word(&self, lower: &str) -> bool {
        self.stop_words.contains(lower)
    }

    pub fn capitalize_rule(&self) -> CapitalizeRule {
        self.capitalize
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::defaults().build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct VocabularyBuilder {
    acronyms: HashSet<String>,
    model_codes: HashSet<String>,
    stop_words: HashSet<String>,
    capitalize: CapitalizeRule,
}

impl VocabularyBuilder {
    pub fn acronym(mut self, word: impl AsRef<str>) -> Self {
        self.acronyms.insert(word.as_ref().trim().to_uppercase());
        self
    }

    pub fn acronyms<I, W>(self, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        words.into_iter().fold(self, |builder, word| builder.acronym(word))
    }

    pub fn model_code(mut self, code: impl AsRef<str>) -> Self {
        self.model_codes.insert(code.as_ref().trim().to_uppercase());
        self
    }

    pub fn model_codes<I, W>(self, codes: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        codes.into_iter().fold(self, |builder, code| builder.model_code(code))
    }

    pub fn stop_word(mut self, word: impl AsRef<str>) -> Self {
        self.stop_words.insert(word.as_ref().trim().to_lowercase());
        self
    }

    pub fn stop_words<I, W>(self, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        words.into_iter().fold(self, |builder, word| builder.stop_word(word))
    }

    pub fn capitalize(mut self, rule: CapitalizeRule) -> Self {
        self.capitalize = rule;
        self
    }

    pub fn build(self) -> Vocabulary {
        Vocabulary {
            acronyms: self.acronyms,
            model_codes: self.model_codes,
            stop_words: self.stop_words,
            capitalize: self.capitalize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_contents() {
        let vocabulary = Vocabulary::default();
        assert!(vocabulary.is_preserved("CNC"));
        assert!(vocabulary.is_preserved("VF-2SS"));
        assert!(vocabulary.is_stop_word("with"));
        assert!(!vocabulary.is_stop_word("mill"));
        assert_eq!(vocabulary.capitalize_rule(), CapitalizeRule::FirstUpperRestLower);
    }

    #[test]
    fn test_builder_normalizes_case() {
        let vocabulary = Vocabulary::builder()
            .acronym("plc")
            .model_code(" Cat40 ")
            .stop_word("ON")
            .build();

        assert!(vocabulary.is_preserved("PLC"));
        assert!(vocabulary.is_preserved("CAT40"));
        assert!(vocabulary.is_stop_word("on"));
        assert!(!vocabulary.is_preserved("CNC"));
    }

    #[test]
    fn test_capitalize_rules() {
        assert_eq!(CapitalizeRule::FirstUpperRestLower.apply("mACHINE"), "Machine");
        assert_eq!(CapitalizeRule::FirstUpperOnly.apply("mACHINE"), "MACHINE");
        assert_eq!(CapitalizeRule::FirstUpperRestLower.apply("milling"), "Milling");
        assert_eq!(CapitalizeRule::FirstUpperOnly.apply("milling"), "Milling");
        assert_eq!(CapitalizeRule::FirstUpperRestLower.apply(""), "");
        assert_eq!(CapitalizeRule::FirstUpperRestLower.apply("12345"), "12345");
    }
}
