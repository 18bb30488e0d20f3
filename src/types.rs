use std::fmt;

use serde::Serialize;

/// Size counters for a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    /// Stored strings
    pub strings: usize,
    /// Allocated nodes, root included. Leaf edges need no node of their own.
    pub nodes: usize,
    /// Edges across all nodes
    pub edges: usize,
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "strings={} nodecnt={} edgecnt={}",
            self.strings, self.nodes, self.edges
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let stats = TreeStats {
            strings: 3,
            nodes: 2,
            edges: 4,
        };
        assert_eq!(stats.to_string(), "strings=3 nodecnt=2 edgecnt=4");
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(
            TreeStats::default(),
            TreeStats {
                strings: 0,
                nodes: 0,
                edges: 0
            }
        );
    }
}
