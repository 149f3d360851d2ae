//! Voice command interpretation and orchestration.
//!
//! This crate turns a transcribed utterance into a cart operation:
//! - Classifies the utterance into an intent (`intent`)
//! - Pulls the item phrase and quantity out of the text (`extract`, `tagger`)
//! - Runs the intent against the catalog and the session cart (`runtime`)
//!
//! # Key Types
//!
//! - `AssistantRuntime` - Main orchestrator (see `runtime` module)
//! - `IntentClassifier` - Ordered keyword rules, first match wins
//! - `PartOfSpeechTagger` - Pluggable tagger used for item extraction
//!
//! Prices and cart totals are never computed here. They come from
//! `voicecart-core`.

use thiserror::Error;

pub mod extract;
pub mod intent;
pub mod runtime;
pub mod tagger;

pub use extract::{ItemExtractor, QuantityExtractor};
pub use intent::{Intent, IntentClassifier};
pub use runtime::{AssistantRuntime, ParsedUtterance, VoiceOutcome};
pub use tagger::{LexiconTagger, PartOfSpeechTagger, PosTag, TaggedToken};

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("invalid intent pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
