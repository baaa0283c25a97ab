use std::collections::BTreeMap;

/// Index of a node inside its [`Trie`](crate::trie::Trie) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root sentinel of every trie.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A trie vertex.
///
/// Children are keyed by character in sorted order. The parent link is a
/// plain index and is only followed to rebuild the path of a node.
#[derive(Debug, Clone)]
pub struct Node {
    label: char,
    terminal: bool,
    parent: Option<NodeId>,
    children: BTreeMap<char, NodeId>,
}

impl Node {
    pub(crate) fn new(parent: Option<NodeId>, label: char) -> Self {
        Self {
            label,
            terminal: false,
            parent,
            children: BTreeMap::new(),
        }
    }

    /// Edge label leading into this node
    pub fn label(&self) -> char {
        self.label
    }

    /// True if the path to this node spells a complete term
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn has_child(&self, c: char) -> bool {
        self.children.contains_key(&c)
    }

    pub fn child(&self, c: char) -> Option<NodeId> {
        self.children.get(&c).copied()
    }

    /// Outgoing edges in character order
    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children.iter().map(|(&c, &id)| (c, id))
    }

    pub(crate) fn insert_child(&mut self, c: char, id: NodeId) {
        self.children.insert(c, id);
    }

    pub(crate) fn set_terminal(&mut self) {
        self.terminal = true;
    }
}
