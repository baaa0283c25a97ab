//! Term Tagger - streaming dictionary term tagging for Rust
//!
//! This library finds dictionary terms in a character stream, one character
//! at a time, without buffering the corpus:
//! - Dictionary terms with bracketed alternation groups (`c[au]t`)
//! - A shared, read-only trie built once per dictionary
//! - Streaming matchers reporting each term with its stream position
//! - Case-insensitive, whole-word matching on ASCII letters and apostrophes
//!
//! # Example
//!
//! ```rust
//! use term_tagger::{Match, TrieBuilder};
//!
//! let dictionary = "
//! cat
//! catalog
//! [bc]og
//! ";
//!
//! // Build the trie
//! let mut builder = TrieBuilder::new();
//! let report = builder.add_dictionary(dictionary);
//! assert_eq!(report.added, 3);
//!
//! // Hand it to a matcher and stream the corpus through it
//! let mut matcher = builder.get_trie();
//! let mut found = Vec::new();
//! for c in "A cat in the bog.".chars() {
//!     if let Some(matches) = matcher.next(c) {
//!         found.extend(matches);
//!     }
//! }
//!
//! // Flush the last word
//! found.extend(matcher.finish());
//!
//! assert_eq!(found, vec![Match::new(5, "cat"), Match::new(16, "bog")]);
//! ```
//!
//! # Dictionary Syntax
//!
//! One term per line. Every character is literal except brackets:
//!
//! | Form | Example | Matches |
//! |------|---------|---------|
//! | Literal | `cat` | `cat` |
//! | Group | `c[au]t` | `cat`, `cut` |
//! | Groups in sequence | `[bc][ao]t` | `bat`, `bot`, `cat`, `cot` |
//!
//! Groups cannot nest or be empty and must close before the line ends.
//!
//! # Corpus Characters
//!
//! - `a`-`z`, `A`-`Z` and `'` are word characters
//! - Everything else ends a word and reports the terms completed there
//! - One boundary character must follow the real input, see
//!   [`TextTrie::finish`]

pub mod builder;
pub mod error;
pub mod matcher;
pub mod node;
pub mod parser;
pub mod trie;
pub mod types;

// Re-export commonly used items
pub use builder::{LoadReport, SkippedTerm, TrieBuilder};
pub use error::{GrammarErrorKind, Result, TaggerError};
pub use matcher::{TextTrie, DEFAULT_FLUSH_CHAR};
pub use node::{Node, NodeId};
pub use parser::{tokenize_term, Token};
pub use trie::Trie;
pub use types::{CharClass, Match};
