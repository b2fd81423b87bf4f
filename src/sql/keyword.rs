//! Keyword set used to classify words during tokenization.
//!
//! Unlike a fixed keyword enum, the set is supplied at runtime from a keyword
//! dictionary (a JSON object whose `SQL_KEY_WORD` key holds an array of
//! strings). Entries may span several words (`GROUP BY`, `IS NOT NULL`); the
//! tokenizer looks up the space-joined candidate, so multi-word
//! entries must use single spaces between their words.
//!
//! Matching is case-insensitive: entries are upper-cased once on construction
//! and every lookup key is upper-cased too.

use crate::*;
use serde::Deserialize;
use std::collections::HashSet;

/// Dictionary key holding the keyword array.
pub const SQL_KEY_WORD: &str = "SQL_KEY_WORD";

/// Serde model of the keyword dictionary file.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordDictionary {
    #[serde(rename = "SQL_KEY_WORD")]
    pub sql_key_word: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    words: HashSet<String>,
}

impl KeywordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_uppercase())
                .collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let dictionary: KeywordDictionary = serde_json::from_str(json)
            .map_err(|e| Error::Keywords(format!("{SQL_KEY_WORD}: {e}")))?;
        Ok(dictionary.into())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Classify a single word (or a space-joined keyword candidate).
    ///
    /// Keyword membership wins over punctuation; anything unrecognized is an
    /// `Identifier`. Never fails.
    pub fn classify(&self, word: &str) -> CellType {
        if self.contains(word) {
            return CellType::KeyWord;
        }
        CellType::from_punctuation(word).unwrap_or(CellType::Identifier)
    }
}

impl From<KeywordDictionary> for KeywordSet {
    fn from(dictionary: KeywordDictionary) -> Self {
        Self::new(dictionary.sql_key_word)
    }
}
