//! Streaming matcher.
//!
//! ## Example
//!
//! ```
//! use term_tagger::{Match, TrieBuilder};
//!
//! let mut builder = TrieBuilder::new();
//! builder.add_word("c[au]t").unwrap();
//! let mut matcher = builder.get_trie();
//!
//! let mut found = matcher.feed("The cat ate; the cut healed");
//! found.extend(matcher.finish());
//! assert_eq!(found, vec![Match::new(7, "cat"), Match::new(20, "cut")]);
//! ```

mod text_trie;

pub use text_trie::{TextTrie, DEFAULT_FLUSH_CHAR};
