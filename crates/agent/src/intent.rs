use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::AgentError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Add,
    Remove,
    Checkout,
    Find,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Checkout => "checkout",
            Self::Find => "find",
        }
    }
}

/// Keyword groups in priority order. English keywords are mixed with
/// transliterated Hindi/Urdu ones ("jodo", "hatao", "manga do").
pub const BUILTIN_RULES: [(Intent, &[&str]); 3] = [
    (
        Intent::Add,
        &[
            r"\b(add|buy|purchase|include|get|want|jodo|khareedna|kharidna|chahie|lao)\b",
            r"\b(i\s+want\s+to\s+buy)\b",
        ],
    ),
    (
        Intent::Remove,
        &[r"\b(remove|delete|discard|drop|hatao|nhi chahiye|nikalo|hta do|take\s+away)\b"],
    ),
    (Intent::Checkout, &[r"\b(check\s*out|pay|place|placed|book|manga do|complete\s*order)\b"]),
];

#[derive(Clone, Debug)]
struct IntentRule {
    intent: Intent,
    patterns: Vec<Regex>,
}

#[derive(Clone, Debug)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl IntentClassifier {
    pub fn builtin() -> Result<Self, AgentError> {
        Self::from_rules(&BUILTIN_RULES)
    }

    /// Rules are evaluated in the given order; anything unmatched is `Find`.
    pub fn from_rules(rules: &[(Intent, &[&str])]) -> Result<Self, AgentError> {
        let rules = rules
            .iter()
            .map(|(intent, patterns)| -> Result<IntentRule, AgentError> {
                let patterns = patterns
                    .iter()
                    .map(|pattern| {
                        Regex::new(pattern).map_err(|source| AgentError::Pattern {
                            pattern: (*pattern).to_string(),
                            source,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(IntentRule { intent: *intent, patterns })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    pub fn classify(&self, text: &str) -> Intent {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.patterns.iter().any(|pattern| pattern.is_match(&lowered)))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::Find)
    }
}
