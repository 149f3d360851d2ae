//! Part-of-speech tagging seam.
//!
//! The item extractor only needs to know which tokens are noun-like, so the
//! tagger is a trait. `LexiconTagger` is a closed-class lexicon: function
//! words, shopping verbs, common adjectives and number words carry their class.
//! Unlisted `-ing` and `-ed` forms are verbs unless they are known food nouns,
//! and every other alphabetic token is treated as a common noun.

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Determiner,
    Pronoun,
    Adposition,
    Conjunction,
    Particle,
    Numeral,
    Interjection,
    Punctuation,
}

impl PosTag {
    pub fn is_noun_like(self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub tag: PosTag,
}

pub trait PartOfSpeechTagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "every", "each", "all",
    "my", "your", "our", "their", "his", "her", "its", "no", "another", "few", "several",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "we", "us", "they", "them", "he", "him", "she", "it", "mine", "yours",
    "ours", "myself", "something", "anything", "everything", "what", "which", "who", "mujhe",
    "main", "hum", "aap", "mera", "meri", "ye", "yeh", "wo", "woh",
];

const ADPOSITIONS: &[&str] = &[
    "to", "from", "in", "on", "of", "for", "with", "at", "by", "into", "about", "out", "off",
    "without", "ka", "ki", "ke", "se", "mein", "me", "ko",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "then", "plus", "aur", "ya"];

const PARTICLES: &[&str] = &["not", "please", "just", "only", "also", "too", "nhi", "nahi", "bhi"];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "do", "does", "did", "can", "could", "will",
    "would", "shall", "should", "may", "might", "must", "have", "has", "had", "hai", "hain",
];

const VERBS: &[&str] = &[
    "add", "buy", "purchase", "include", "get", "want", "need", "like", "order", "put", "give",
    "show", "find", "search", "look", "remove", "delete", "discard", "drop", "take",
    "check", "checkout", "pay", "place", "placed", "book", "complete", "keep", "make", "bring",
    "bought", "got", "took", "gave", "brought",
    "jodo", "khareedna", "kharidna", "chahie", "chahiye", "lao", "hatao", "nikalo", "hta", "do",
    "manga", "dena", "dedo", "karo",
];

const ADJECTIVES: &[&str] = &[
    "red", "green", "yellow", "blue", "white", "black", "brown", "orange", "purple", "pink",
    "big", "small", "large", "medium", "little", "fresh", "organic", "ripe", "new", "old",
    "cold", "hot", "sweet", "more", "less", "extra", "other", "same",
];

const ADVERBS: &[&str] = &[
    "now", "again", "here", "there", "away", "very", "right", "where", "how", "when", "why",
    "abhi",
];

/// Words that end like inflected verbs but are nouns in a shopping list.
const NOUN_EXCEPTIONS: &[&str] = &[
    "pudding", "stuffing", "icing", "dressing", "filling", "frosting", "topping", "seasoning",
    "herring", "dumpling", "string", "bed", "seed", "shed", "sled", "reed", "weed", "feed",
];

const INTERJECTIONS: &[&str] = &["hi", "hello", "hey", "ok", "okay", "yes", "yeah", "thanks"];

const NUMERALS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "dozen",
    "ak", "teen", "char", "paach", "cah", "saat", "ath", "naoh", "dash",
];

#[derive(Clone, Debug)]
pub struct LexiconTagger {
    lexicon: HashMap<&'static str, PosTag>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        // Later groups overwrite earlier ones for words listed twice.
        let groups: [(&[&str], PosTag); 11] = [
            (NUMERALS, PosTag::Numeral),
            (INTERJECTIONS, PosTag::Interjection),
            (ADVERBS, PosTag::Adverb),
            (ADJECTIVES, PosTag::Adjective),
            (PARTICLES, PosTag::Particle),
            (CONJUNCTIONS, PosTag::Conjunction),
            (ADPOSITIONS, PosTag::Adposition),
            (DETERMINERS, PosTag::Determiner),
            (PRONOUNS, PosTag::Pronoun),
            (AUXILIARIES, PosTag::Auxiliary),
            (VERBS, PosTag::Verb),
        ];

        let mut lexicon = HashMap::new();
        for (words, tag) in groups {
            for word in words {
                lexicon.insert(*word, tag);
            }
        }

        Self { lexicon }
    }
}

impl LexiconTagger {
    fn tag_word(&self, word: &str) -> PosTag {
        if let Some(tag) = self.lexicon.get(word) {
            return *tag;
        }
        if word.chars().all(|character| character.is_numeric()) {
            return PosTag::Numeral;
        }
        if looks_inflected(word) && !NOUN_EXCEPTIONS.contains(&word) {
            return PosTag::Verb;
        }
        PosTag::Noun
    }
}

fn looks_inflected(word: &str) -> bool {
    let length = word.chars().count();
    (word.ends_with("ing") && length > 5) || (word.ends_with("ed") && length > 3)
}

impl PartOfSpeechTagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        tokenize(text)
            .into_iter()
            .map(|token| {
                let tag = if token.chars().any(char::is_alphanumeric) {
                    self.tag_word(&token.to_lowercase())
                } else {
                    PosTag::Punctuation
                };
                TaggedToken { text: token, tag }
            })
            .collect()
    }
}

/// Splits on whitespace and separates punctuation into its own tokens.
/// Apostrophes and hyphens inside a word stay with the word.
fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut characters = text.chars().peekable();

    while let Some(character) = characters.next() {
        if character.is_alphanumeric() {
            current.push(character);
            continue;
        }

        let joins_word = matches!(character, '\'' | '-')
            && !current.is_empty()
            && characters.peek().is_some_and(|next| next.is_alphanumeric());
        if joins_word {
            current.push(character);
            continue;
        }

        if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
        if !character.is_whitespace() {
            tokens.push(character.to_string());
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
