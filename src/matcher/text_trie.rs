use std::sync::Arc;

use log::{trace, warn};

use crate::node::NodeId;
use crate::trie::Trie;
use crate::types::{CharClass, Match};

/// Character fed by [`TextTrie::finish`] unless configured otherwise
pub const DEFAULT_FLUSH_CHAR: char = ' ';

/// Streaming term matcher over a finished dictionary trie.
///
/// Characters are fed one at a time through [`TextTrie::next`]. Every word
/// character moves each live candidate one edge down the trie (or drops it),
/// and the first character of a word may seed a new candidate from the root.
/// A boundary character reports every candidate standing on a terminus and
/// clears the set.
///
/// The trie is shared and read-only, so several matchers made with
/// [`TextTrie::new_stream`] can scan different corpora at the same time.
#[derive(Debug, Clone)]
pub struct TextTrie {
    trie: Arc<Trie>,
    candidates: Vec<NodeId>,
    /// Terms completed mid-word by a candidate that kept going
    pending: Vec<Match>,
    new_word: bool,
    position: u64,
    flush_char: char,
}

impl TextTrie {
    /// Create an idle matcher over `trie`, positioned at the start of a stream
    pub fn new(trie: Arc<Trie>) -> Self {
        Self {
            trie,
            candidates: Vec::new(),
            pending: Vec::new(),
            new_word: true,
            position: 0,
            flush_char: DEFAULT_FLUSH_CHAR,
        }
    }

    /// Set the character [`TextTrie::finish`] feeds to close the stream.
    ///
    /// It has to be a boundary character; a word character is ignored and the
    /// current setting kept.
    pub fn with_flush_char(mut self, c: char) -> Self {
        if CharClass::of(c).is_word() {
            warn!("flush character {:?} is a word character, keeping {:?}", c, self.flush_char);
        } else {
            self.flush_char = c;
        }
        self
    }

    /// A fresh matcher over the same trie, with its own candidates and position
    pub fn new_stream(&self) -> Self {
        Self::new(Arc::clone(&self.trie)).with_flush_char(self.flush_char)
    }

    /// Feed one corpus character.
    ///
    /// Returns `None` for a word character, since nothing can complete in the
    /// middle of a word. Returns the (possibly empty) list of matches closed
    /// by a boundary character.
    pub fn next(&mut self, c: char) -> Option<Vec<Match>> {
        let c = c.to_ascii_lowercase();
        match CharClass::of(c) {
            CharClass::Word => {
                self.advance(c);
                self.new_word = false;
                None
            }
            CharClass::Boundary => {
                let matches = self.end();
                // A boundary character may itself start a term
                self.new_word = true;
                self.advance(c);
                Some(matches)
            }
        }
    }

    /// Feed every character of `text`, collecting the matches emitted.
    ///
    /// Terms still open at the end of `text` stay pending until a later
    /// boundary or [`TextTrie::finish`].
    pub fn feed(&mut self, text: &str) -> Vec<Match> {
        let mut found = Vec::new();
        for c in text.chars() {
            if let Some(matches) = self.next(c) {
                found.extend(matches);
            }
        }
        found
    }

    /// Close the stream by feeding the flush character.
    pub fn finish(&mut self) -> Vec<Match> {
        self.next(self.flush_char).unwrap_or_default()
    }

    /// Forget all progress and start a new stream at position 0
    pub fn reset(&mut self) {
        self.candidates.clear();
        self.pending.clear();
        self.new_word = true;
        self.position = 0;
    }

    /// Move every candidate along `c` into a new generation, then seed from
    /// the root if this is the first character of a word.
    fn advance(&mut self, c: char) {
        let trie = &self.trie;
        let mut next = Vec::with_capacity(self.candidates.len() + 1);

        if self.new_word {
            if let Some(seed) = trie.child(NodeId::ROOT, c) {
                next.push(seed);
            }
        }

        for &candidate in &self.candidates {
            let Some(child) = trie.child(candidate, c) else {
                continue;
            };
            if trie.node(candidate).is_terminal() {
                self.pending.push(Match::new(self.position, trie.path(candidate)));
            }
            next.push(child);
        }

        self.candidates = next;
        self.position += c.len_utf8() as u64;
    }

    /// Report the terms completed at the current position and drop every
    /// candidate.
    fn end(&mut self) -> Vec<Match> {
        let mut matches = std::mem::take(&mut self.pending);
        for candidate in self.candidates.drain(..) {
            if self.trie.node(candidate).is_terminal() {
                matches.push(Match::new(self.position, self.trie.path(candidate)));
            }
        }
        for m in &matches {
            trace!("match {}", m);
        }
        matches
    }

    /// Number of bytes consumed so far, counting each character by its UTF-8 length
    pub fn position(&self) -> u64 {
        self.position
    }

    /// True while at least one partial match is alive
    pub fn is_tracking(&self) -> bool {
        !self.candidates.is_empty()
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Render the live candidates as `[path, path]`, most recent first
    pub fn describe_candidates(&self) -> String {
        let paths: Vec<String> = self
            .candidates
            .iter()
            .map(|&id| self.trie.path(id))
            .collect();
        format!("[{}]", paths.join(", "))
    }

    /// The shared dictionary trie
    pub fn trie(&self) -> &Arc<Trie> {
        &self.trie
    }

    pub fn count_terms(&self) -> usize {
        self.trie.count_terms()
    }

    pub fn count_nodes(&self) -> usize {
        self.trie.count_nodes()
    }

    pub fn flush_char(&self) -> char {
        self.flush_char
    }
}
