//! Arena-backed character trie.
//!
//! Every node lives in one `Vec` owned by the [`Trie`]; edges and parent
//! links are [`NodeId`] indices into it, so the tree never holds shared
//! ownership and needs no cycle handling. Index 0 is the root sentinel.

use std::fmt;

use crate::node::{Node, NodeId};

/// Label stored on the root sentinel. Never part of a reconstructed path.
const ROOT_LABEL: char = ' ';

/// The dictionary trie. Mutable only while a [`TrieBuilder`](crate::TrieBuilder)
/// owns it; read-only once handed to a matcher.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    terms: usize,
}

impl Trie {
    /// Create a trie holding only the root sentinel
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(None, ROOT_LABEL)],
            terms: 0,
        }
    }

    pub fn root(&self) -> &Node {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Look up a node by id.
    ///
    /// Ids are only produced by this trie, so an out-of-range id is a bug in
    /// the caller and panics.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Child of `id` along `c`, if the edge exists
    pub fn child(&self, id: NodeId, c: char) -> Option<NodeId> {
        self.node(id).child(c)
    }

    /// Return the child of `parent` along `c`, creating it on first use.
    ///
    /// Repeated calls with the same arguments return the same id and only
    /// the first one grows the arena.
    pub(crate) fn get_or_create_child(&mut self, parent: NodeId, c: char) -> NodeId {
        if let Some(existing) = self.node(parent).child(c) {
            return existing;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(Some(parent), c));
        self.nodes[parent.0].insert_child(c, id);
        id
    }

    pub(crate) fn mark_terminal(&mut self, id: NodeId) {
        // The root sentinel can never end a term.
        if id != NodeId::ROOT {
            self.nodes[id.0].set_terminal();
        }
    }

    pub(crate) fn record_term(&mut self) {
        self.terms += 1;
    }

    /// Rebuild the text spelled by the path from the root down to `id`.
    pub fn path(&self, id: NodeId) -> String {
        let mut labels = Vec::new();
        let mut current = id;
        while let Some(parent) = self.node(current).parent() {
            labels.push(self.node(current).label());
            current = parent;
        }
        labels.iter().rev().collect()
    }

    /// Number of terms successfully added
    pub fn count_terms(&self) -> usize {
        self.terms
    }

    /// Number of nodes created, not counting the root sentinel
    pub fn count_nodes(&self) -> usize {
        self.nodes.len() - 1
    }

    /// True if no term has created any node yet
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Check whether `term` (already lowercased, no groups) is a terminus path
    pub fn contains(&self, term: &str) -> bool {
        term.chars()
            .try_fold(NodeId::ROOT, |id, c| self.child(id, c))
            .is_some_and(|id| id != NodeId::ROOT && self.node(id).is_terminal())
    }

    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        for (c, child) in self.node(id).children() {
            let marker = if self.node(child).is_terminal() { "*" } else { "" };
            writeln!(f, "{}{}{}", "  ".repeat(depth), c, marker)?;
            self.fmt_subtree(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

/// One edge per line, indented two spaces per level, `*` after a terminus.
impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_subtree(f, NodeId::ROOT, 0)
    }
}
