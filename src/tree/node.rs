//! Arena node types.

use std::collections::BTreeMap;

/// Index of a node in the tree's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// The root node always occupies the first arena slot
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// What an edge leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Child {
    /// A string ends here and nothing continues below
    Terminal,
    /// An arena node with its own terminal flag and edges
    Branch(NodeId),
}

/// A tree node: terminal flag plus edges keyed by non-empty label.
///
/// At most one edge label starts with any given character.
#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    /// A stored string ends exactly at this node
    pub terminal: bool,
    /// Outgoing edges, ordered by label
    pub edges: BTreeMap<String, Child>,
}

impl Node {
    /// A node marking the end of a string with no children yet.
    pub fn terminal() -> Self {
        Self {
            terminal: true,
            edges: BTreeMap::new(),
        }
    }

    /// A node holding a single edge.
    pub fn with_edge(label: String, child: Child) -> Self {
        let mut edges = BTreeMap::new();
        edges.insert(label, child);
        Self {
            terminal: false,
            edges,
        }
    }

    /// Edge labels as string slices, in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }
}
