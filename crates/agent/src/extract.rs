use std::sync::Arc;

use regex::Regex;

use crate::tagger::{LexiconTagger, PartOfSpeechTagger};
use crate::AgentError;

/// Number words in lookup order. The first entry that appears in the text
/// wins, regardless of where it appears.
pub const NUMBER_WORDS: [(&str, u32); 20] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("ak", 1),
    ("do", 2),
    ("teen", 3),
    ("char", 4),
    ("paach", 5),
    ("cah", 6),
    ("saat", 7),
    ("ath", 8),
    ("naoh", 9),
    ("dash", 10),
];

pub const DEFAULT_QUANTITY: u32 = 1;

/// Zero digit of each decimal script accepted in quantities.
const DIGIT_ZEROS: [char; 8] = ['0', '٠', '۰', '०', '০', '੦', '૦', '０'];

#[derive(Clone)]
pub struct ItemExtractor {
    tagger: Arc<dyn PartOfSpeechTagger>,
}

impl Default for ItemExtractor {
    fn default() -> Self {
        Self::new(Arc::new(LexiconTagger::default()))
    }
}

impl ItemExtractor {
    pub fn new(tagger: Arc<dyn PartOfSpeechTagger>) -> Self {
        Self { tagger }
    }

    /// Noun tokens of the lower-cased text joined by single spaces, or the
    /// untouched input when the text has no nouns.
    pub fn extract(&self, text: &str) -> String {
        let nouns = self
            .tagger
            .tag(&text.to_lowercase())
            .into_iter()
            .filter(|token| token.tag.is_noun_like())
            .map(|token| token.text)
            .collect::<Vec<_>>();

        if nouns.is_empty() {
            return text.to_string();
        }
        nouns.join(" ")
    }
}

#[derive(Clone, Debug)]
pub struct QuantityExtractor {
    digits: Regex,
    number_words: Vec<(Regex, u32)>,
}

impl QuantityExtractor {
    pub fn new() -> Result<Self, AgentError> {
        let digits = compile(r"\b(\d+)\b")?;
        let number_words = NUMBER_WORDS
            .iter()
            .map(|(word, value)| {
                compile(&format!(r"\b{}\b", regex::escape(word))).map(|pattern| (pattern, *value))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { digits, number_words })
    }

    pub fn extract(&self, text: &str) -> u32 {
        let from_digits = self
            .digits
            .captures_iter(text)
            .filter_map(|captures| captures.get(1))
            .filter_map(|digits| parse_digits(digits.as_str()))
            .find(|quantity| *quantity > 0);
        if let Some(quantity) = from_digits {
            return quantity;
        }

        let lowered = text.to_lowercase();
        self.number_words
            .iter()
            .find(|(pattern, _)| pattern.is_match(&lowered))
            .map(|(_, value)| *value)
            .unwrap_or(DEFAULT_QUANTITY)
    }
}

fn digit_value(character: char) -> Option<u32> {
    DIGIT_ZEROS.iter().find_map(|zero| {
        let offset = u32::from(character).checked_sub(u32::from(*zero))?;
        (offset < 10).then_some(offset)
    })
}

/// Decimal value of a digit run in any supported script, or `None` on overflow.
fn parse_digits(run: &str) -> Option<u32> {
    run.chars().try_fold(0u32, |total, character| {
        total.checked_mul(10)?.checked_add(digit_value(character)?)
    })
}

fn compile(pattern: &str) -> Result<Regex, AgentError> {
    Regex::new(pattern)
        .map_err(|source| AgentError::Pattern { pattern: pattern.to_string(), source })
}
