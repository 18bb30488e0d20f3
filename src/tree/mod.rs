//! Compressed prefix tree over strings.
//!
//! Edges carry whole string fragments rather than single characters. Sibling
//! labels never share a leading character, so descending one level costs a
//! single [`longest_prefix`] call and the walk is bounded by the length of
//! the query, not the size of the tree.
//!
//! ## Example
//!
//! ```
//! use radixtree_r::RadixTree;
//!
//! let mut tree = RadixTree::new();
//! tree.insert("hell");
//! tree.insert("hello");
//!
//! assert!(tree.contains("hell"));
//! assert!(tree.contains("hello"));
//! assert!(!tree.contains("h"));
//! assert_eq!(tree.to_string(), "hell(,o())");
//! ```

mod node;
mod prefix;

pub use prefix::{common_prefix_len, longest_prefix};

use std::collections::BTreeMap;
use std::fmt;

use log::trace;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::types::TreeStats;
use node::{Child, Node, NodeId};

/// Edge map seen through a `Child::Terminal`, which has no edges of its own.
static NO_EDGES: BTreeMap<String, Child> = BTreeMap::new();

/// Radix tree of strings.
///
/// Nodes live in an arena and are addressed by index; the root is always the
/// first slot. Equality is structural: two trees are equal when they store the
/// same edge layout, regardless of insertion order or arena placement.
#[derive(Clone)]
pub struct RadixTree {
    nodes: Vec<Node>,
    /// Arena slots released by pruning, reused by later inserts
    free: Vec<NodeId>,
    len: usize,
}

impl Default for RadixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RadixTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            free: Vec::new(),
            len: 0,
        }
    }

    /// Insert `word` into the tree.
    ///
    /// Returns `true` once `word` is stored; inserting a stored word again
    /// changes nothing. The empty string is rejected and returns `false`.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut current = NodeId::ROOT;
        let mut rest = word;

        while !rest.is_empty() {
            let (prefix, label) = longest_prefix(rest, self.node(current).labels());
            let Some(label) = label.map(str::to_owned) else {
                break;
            };
            let consumed = prefix.len();
            let child = self.node(current).edges[&label];
            rest = &rest[consumed..];

            current = if consumed < label.len() {
                self.split_edge(current, &label, consumed, child)
            } else {
                match child {
                    Child::Branch(id) => id,
                    // Word ends on an existing leaf edge
                    Child::Terminal if rest.is_empty() => return true,
                    Child::Terminal => self.promote_edge(current, &label),
                }
            };
        }

        if rest.is_empty() {
            let node = self.node_mut(current);
            if !node.terminal {
                node.terminal = true;
                self.len += 1;
            }
        } else {
            self.node_mut(current)
                .edges
                .insert(rest.to_owned(), Child::Terminal);
            self.len += 1;
        }

        true
    }

    /// Check whether `word` is stored. The empty string never is.
    pub fn contains(&self, word: &str) -> bool {
        match self.resolve(word) {
            Some((_, _, Child::Terminal)) => true,
            Some((_, _, Child::Branch(id))) => self.node(id).terminal,
            None => false,
        }
    }

    /// Remove `word` from the tree.
    ///
    /// Returns `false` and leaves the tree untouched when `word` is not stored.
    /// Edges left with nothing below them are dropped; nodes left with a
    /// single child are not merged back into their parent.
    pub fn remove(&mut self, word: &str) -> bool {
        let mut path = Vec::new();
        let Some((parent, label, child)) =
            self.resolve_with(word, |node, label| path.push((node, label.to_owned())))
        else {
            return false;
        };
        let label = label.to_owned();

        match child {
            Child::Terminal => {
                self.node_mut(parent).edges.remove(&label);
            }
            Child::Branch(id) => {
                let node = self.node_mut(id);
                if !node.terminal {
                    return false;
                }
                node.terminal = false;
                path.push((parent, label));
            }
        }

        self.len -= 1;
        self.prune(path);
        true
    }

    /// Number of stored strings
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the tree stores no strings
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every string and release all nodes
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0] = Node::default();
        self.free.clear();
        self.len = 0;
    }

    /// Size counters for the tree
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            strings: self.len,
            nodes: self.nodes.len() - self.free.len(),
            edges: self.nodes.iter().map(|n| n.edges.len()).sum(),
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        if let Some(id) = self.free.pop() {
            *self.node_mut(id) = node;
            return id;
        }
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn release(&mut self, id: NodeId) {
        *self.node_mut(id) = Node::default();
        self.free.push(id);
    }

    /// Walk `path` bottom-up, dropping edges to nodes that are neither
    /// terminal nor have edges of their own.
    fn prune(&mut self, path: Vec<(NodeId, String)>) {
        for (parent, label) in path.into_iter().rev() {
            let Child::Branch(id) = self.node(parent).edges[&label] else {
                break;
            };
            let node = self.node(id);
            if node.terminal || !node.edges.is_empty() {
                break;
            }

            trace!("prune empty edge {:?}", label);
            self.node_mut(parent).edges.remove(&label);
            self.release(id);
        }
    }

    /// Replace `label -> child` under `parent` with `label[..at] -> {label[at..] -> child}`.
    /// Returns the new intermediate node.
    fn split_edge(&mut self, parent: NodeId, label: &str, at: usize, child: Child) -> NodeId {
        let (head, tail) = label.split_at(at);
        trace!("split edge {:?} into {:?} + {:?}", label, head, tail);

        let mid = self.alloc(Node::with_edge(tail.to_owned(), child));
        let edges = &mut self.node_mut(parent).edges;
        edges.remove(label);
        edges.insert(head.to_owned(), Child::Branch(mid));
        mid
    }

    /// Turn a leaf edge into a branch to a terminal node so it can gain children.
    fn promote_edge(&mut self, parent: NodeId, label: &str) -> NodeId {
        trace!("promote leaf edge {:?}", label);

        let id = self.alloc(Node::terminal());
        self.node_mut(parent)
            .edges
            .insert(label.to_owned(), Child::Branch(id));
        id
    }

    fn resolve(&self, word: &str) -> Option<(NodeId, &str, Child)> {
        self.resolve_with(word, |_, _| {})
    }

    /// Follow whole edges for `word`.
    ///
    /// Returns the parent node, label and child of the last edge when `word`
    /// is consumed exactly at an edge boundary. `visit` sees every edge
    /// followed before that one.
    fn resolve_with<'a>(
        &'a self,
        word: &str,
        mut visit: impl FnMut(NodeId, &'a str),
    ) -> Option<(NodeId, &'a str, Child)> {
        let mut parent = NodeId::ROOT;
        let mut rest = word;

        loop {
            let node = self.node(parent);
            let (prefix, label) = longest_prefix(rest, node.labels());
            let label = label?;
            if prefix.len() < label.len() {
                return None;
            }

            let child = node.edges[label];
            rest = &rest[prefix.len()..];
            if rest.is_empty() {
                return Some((parent, label, child));
            }

            match child {
                Child::Branch(id) => {
                    visit(parent, label);
                    parent = id;
                }
                Child::Terminal => return None,
            }
        }
    }

    /// Terminal flag and edges behind a child
    fn shape(&self, child: Child) -> (bool, &BTreeMap<String, Child>) {
        match child {
            Child::Terminal => (true, &NO_EDGES),
            Child::Branch(id) => {
                let node = self.node(id);
                (node.terminal, &node.edges)
            }
        }
    }

    fn subtree_eq(&self, a: Child, other: &RadixTree, b: Child) -> bool {
        let (a_terminal, a_edges) = self.shape(a);
        let (b_terminal, b_edges) = other.shape(b);

        a_terminal == b_terminal
            && a_edges.len() == b_edges.len()
            && a_edges
                .iter()
                .zip(b_edges)
                .all(|((la, ca), (lb, cb))| la == lb && self.subtree_eq(*ca, other, *cb))
    }

    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, child: Child) -> fmt::Result {
        let (terminal, edges) = self.shape(child);

        // A terminal point prints as an empty entry ahead of the edges
        let mut need_sep = terminal;
        for (label, child) in edges {
            if need_sep {
                f.write_str(",")?;
            }
            need_sep = true;

            f.write_str(label)?;
            f.write_str("(")?;
            self.fmt_subtree(f, *child)?;
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl PartialEq for RadixTree {
    fn eq(&self, other: &Self) -> bool {
        let root = Child::Branch(NodeId::ROOT);
        self.subtree_eq(root, other, root)
    }
}

impl Eq for RadixTree {}

/// Compact notation: `label(children)` per edge, siblings comma-separated,
/// and an empty entry where a string ends.
impl fmt::Display for RadixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_subtree(f, Child::Branch(NodeId::ROOT))
    }
}

impl fmt::Debug for RadixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RadixTree({})", self)
    }
}

/// Serializes as nested maps of edge label to subtree, with `"": null` where a
/// string ends.
impl Serialize for RadixTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Subtree {
            tree: self,
            child: Child::Branch(NodeId::ROOT),
        }
        .serialize(serializer)
    }
}

struct Subtree<'a> {
    tree: &'a RadixTree,
    child: Child,
}

impl Serialize for Subtree<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (terminal, edges) = self.tree.shape(self.child);

        let mut map = serializer.serialize_map(Some(edges.len() + usize::from(terminal)))?;
        if terminal {
            map.serialize_entry("", &None::<()>)?;
        }
        for (label, child) in edges {
            map.serialize_entry(
                label,
                &Subtree {
                    tree: self.tree,
                    child: *child,
                },
            )?;
        }
        map.end()
    }
}
