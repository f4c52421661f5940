use crate::domain::services::vocabulary::Vocabulary;
use regex::Regex;
use std::sync::LazyLock;

// S/N、SN#、s-n: 之類夾帶在描述裡的序號片段
static SERIAL_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)S[/\\-]?N[:#]?\s*\w+").expect("serial fragment pattern is valid")
});

// 空白段與非空白段交替切割，空白段本身也是 token
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+|\S+").expect("token pattern is valid"));

const WORD_PUNCTUATION: &[char] = &[',', '.', ';', ':', '-'];
const DESCRIPTION_EDGES: &[char] = &[',', ';', ' '];

/// Title-cases free text while keeping acronyms, model codes and stop words
/// in their canonical case.
#[derive(Debug, Clone, Default)]
pub struct Canonicalizer {
    vocabulary: Vocabulary,
}

impl Canonicalizer {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Whitespace runs are copied through verbatim; every other token is
    /// stripped of surrounding `, . ; : -` and re-cased.
    pub fn canonicalize(&self, text: &str) -> String {
        TOKEN
            .find_iter(text)
            .map(|token| token.as_str())
            .map(|token| {
                if token.chars().all(char::is_whitespace) {
                    token.to_string()
                } else {
                    self.canonicalize_word(token)
                }
            })
            .collect()
    }

    fn canonicalize_word(&self, word: &str) -> String {
        let clean = word.trim_matches(WORD_PUNCTUATION);

        let upper = clean.to_uppercase();
        if self.vocabulary.is_preserved(&upper) {
            return upper;
        }

        let lower = clean.to_lowercase();
        if self.vocabulary.is_stop_word(&lower) {
            return lower;
        }

        self.vocabulary.capitalize_rule().apply(clean)
    }

    /// 正規化描述欄：先轉大小寫，再去除序號片段
    pub fn canonicalize_description(&self, text: &str) -> String {
        strip_serial_fragments(&self.canonicalize(text))
    }
}

/// Removes embedded serial-number mentions, then trims `,`, `;` and spaces
/// from both ends.
pub fn strip_serial_fragments(text: &str) -> String {
    SERIAL_FRAGMENT
        .replace_all(text, "")
        .trim_matches(DESCRIPTION_EDGES)
        .to_string()
}
