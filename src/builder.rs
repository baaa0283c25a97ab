use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::error::{Result, TaggerError};
use crate::matcher::TextTrie;
use crate::node::NodeId;
use crate::parser::{dictionary_lines, TermTokenizer, Token};
use crate::trie::Trie;

/// A dictionary line that could not be added
#[derive(Debug)]
pub struct SkippedTerm {
    /// 1-based line number in the dictionary text
    pub line: usize,
    pub error: TaggerError,
}

/// Outcome of loading a whole dictionary
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Terms added successfully
    pub added: usize,
    /// Terms rejected, in dictionary order
    pub skipped: Vec<SkippedTerm>,
}

/// Builds the dictionary trie one term at a time.
///
/// The trie stays private to the builder until [`TrieBuilder::get_trie`]
/// consumes it, after which it is never mutated again.
#[derive(Debug, Default)]
pub struct TrieBuilder {
    trie: Trie,
    frontier: Vec<NodeId>,
}

impl TrieBuilder {
    pub fn new() -> Self {
        Self {
            trie: Trie::new(),
            frontier: Vec::new(),
        }
    }

    /// Add one term definition.
    ///
    /// Literal characters extend every branch of the frontier by one edge;
    /// a `[...]` group forks every branch once per group character. When the
    /// definition ends, every branch is marked as a terminus.
    ///
    /// On a grammar error the term is abandoned and the error returned. Nodes
    /// already created for it stay in the trie, and the builder remains
    /// usable for later terms.
    pub fn add_word(&mut self, term: &str) -> Result<()> {
        let nodes_before = self.trie.count_nodes();
        let mut tokenizer = TermTokenizer::new(term);

        self.frontier.clear();
        self.frontier.push(NodeId::ROOT);

        loop {
            let next: Vec<NodeId> = match tokenizer.next_token()? {
                Token::Literal(c) => self
                    .frontier
                    .iter()
                    .map(|&node| self.trie.get_or_create_child(node, c))
                    .collect(),
                Token::Group(chars) => {
                    let mut next = Vec::with_capacity(self.frontier.len() * chars.len());
                    for &node in &self.frontier {
                        for &c in &chars {
                            next.push(self.trie.get_or_create_child(node, c));
                        }
                    }
                    next
                }
                Token::End => {
                    for &node in &self.frontier {
                        self.trie.mark_terminal(node);
                    }
                    break;
                }
            };
            self.frontier = next;
        }

        self.trie.record_term();
        debug!(
            "added term '{}' ({} branches, {} new nodes)",
            term,
            self.frontier.len(),
            self.trie.count_nodes() - nodes_before
        );
        Ok(())
    }

    /// Add every term of a dictionary, one per line.
    ///
    /// A bad term never stops the load; it is logged and listed in the
    /// returned report with its line number.
    pub fn add_dictionary(&mut self, text: &str) -> LoadReport {
        let mut report = LoadReport::default();

        for (line, term) in dictionary_lines(text) {
            match self.add_word(term) {
                Ok(()) => report.added += 1,
                Err(error) => {
                    warn!("skipping dictionary line {}: {}", line, error);
                    report.skipped.push(SkippedTerm { line, error });
                }
            }
        }

        info!(
            "{} nodes used for {} terms ({} skipped)",
            self.trie.count_nodes(),
            self.trie.count_terms(),
            report.skipped.len()
        );
        report
    }

    /// Read a dictionary file and add every term in it.
    ///
    /// Only failing to read the file is an error; bad terms end up in the
    /// report as with [`TrieBuilder::add_dictionary`].
    pub fn add_dictionary_file(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            TaggerError::DictionaryError(format!(
                "Failed to read dictionary file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(self.add_dictionary(&text))
    }

    /// Number of terms successfully added so far
    pub fn count_terms(&self) -> usize {
        self.trie.count_terms()
    }

    /// Number of trie nodes created so far
    pub fn count_nodes(&self) -> usize {
        self.trie.count_nodes()
    }

    /// Finish building and hand the trie to a fresh matcher.
    pub fn get_trie(self) -> TextTrie {
        TextTrie::new(Arc::new(self.trie))
    }
}
