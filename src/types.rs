use std::fmt;

use serde::{Deserialize, Serialize};

/// How the matcher treats one corpus character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII letter or apostrophe; extends the current word
    Word,
    /// Anything else; ends the current word
    Boundary,
}

impl CharClass {
    /// Classify a character. Case does not matter.
    pub fn of(c: char) -> Self {
        if c.is_ascii_alphabetic() || c == '\'' {
            CharClass::Word
        } else {
            CharClass::Boundary
        }
    }

    pub fn is_word(self) -> bool {
        self == CharClass::Word
    }
}

/// A dictionary term found in the corpus
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    /// Byte offset of the character that closed the term, i.e. the number
    /// of UTF-8 bytes consumed before it
    pub position: u64,
    /// The term as spelled by its trie path (lowercase)
    pub term: String,
}

impl Match {
    pub fn new(position: u64, term: impl Into<String>) -> Self {
        Self {
            position,
            term: term.into(),
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.position, self.term)
    }
}
