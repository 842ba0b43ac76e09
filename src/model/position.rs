//! Points inside a suffix tree under construction.

use crate::model::node::{Node, NodeIndex, ROOT};
use crate::model::text::{Symbol, Text};

/// A precise point in the tree: the symbol at text index `location` on the
/// edge leading into `node`.
///
/// A position on the root stands for the root itself (the empty string).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    node: NodeIndex,
    location: usize,
}

impl Position {
    pub(crate) fn new(node: NodeIndex, location: usize) -> Self {
        Self { node, location }
    }

    pub(crate) fn root() -> Self {
        Self::new(ROOT, 0)
    }

    pub(crate) fn node(&self) -> NodeIndex {
        self.node
    }

    pub(crate) fn location(&self) -> usize {
        self.location
    }

    pub(crate) fn is_root(&self) -> bool {
        self.node == ROOT
    }

    /// Returns `true` if the position is on the last symbol of its edge.
    /// `node` must be the node this position refers to.
    pub(crate) fn at_edge_end(&self, node: &Node, frontier: usize) -> bool {
        debug_assert_eq!(node.index(), self.node);
        !node.is_root() && self.location == node.effective_end(frontier)
    }

    /// Returns `true` if the edge has further symbols after this position.
    pub(crate) fn edge_continues(&self, node: &Node, frontier: usize) -> bool {
        debug_assert_eq!(node.index(), self.node);
        !node.is_root() && node.effective_end(frontier) > self.location
    }

    /// Returns `true` if `symbol` can be read right after this position,
    /// either further along the edge or as the start of a child edge.
    pub(crate) fn continues(
        &self,
        node: &Node,
        text: &Text,
        frontier: usize,
        symbol: Symbol,
    ) -> bool {
        if self.edge_continues(node, frontier) {
            text.symbol(self.location + 1) == symbol
        } else {
            node.find_child(symbol).is_some()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_at(start: usize) -> Node {
        Node::new_leaf(1, start)
    }

    #[test]
    fn test_root_position_is_never_at_edge_end() {
        let root = Node::new_root();
        let position = Position::root();
        assert!(position.is_root());
        assert!(!position.at_edge_end(&root, 0));
        assert!(!position.edge_continues(&root, 5));
    }

    #[test]
    fn test_open_edge_end_follows_frontier() {
        let leaf = leaf_at(2);
        let position = Position::new(1, 4);
        assert!(position.edge_continues(&leaf, 5));
        assert!(!position.at_edge_end(&leaf, 5));
        assert!(position.at_edge_end(&leaf, 4));
    }

    #[test]
    fn test_continues_along_edge() {
        let text = Text::new("abcab");
        let leaf = leaf_at(0);
        let position = Position::new(1, 1);
        assert!(position.continues(&leaf, &text, 4, Symbol::Char('c')));
        assert!(!position.continues(&leaf, &text, 4, Symbol::Char('a')));
    }

    #[test]
    fn test_continues_into_child() {
        let text = Text::new("ab");
        let mut root = Node::new_root();
        root.add_child(Symbol::Char('b'), 1, 6);
        let position = Position::root();
        assert!(position.continues(&root, &text, 1, Symbol::Char('b')));
        assert!(!position.continues(&root, &text, 1, Symbol::Terminator));
    }
}
