//! Structural checks of finished suffix trees.
//!
//! Construction never fails, so a violated invariant always means a bug.
//! [SuffixTree::validate] reports the first one found as an
//! [InvariantViolation], which is handy in tests and when debugging.

use crate::model::node::NodeIndex;
use crate::model::text::Symbol;
use crate::model::tree::SuffixTree;
use std::collections::HashSet;
use thiserror::Error;

/// A violated suffix tree invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("root node {0} has a parent")]
    RootHasParent(NodeIndex),

    #[error("node {0} has no parent")]
    MissingParent(NodeIndex),

    #[error("node {child} names {parent} as parent but is not among its children")]
    ParentMismatch { child: NodeIndex, parent: NodeIndex },

    #[error("node {node} has several children starting with {key}")]
    DuplicateChildKey { node: NodeIndex, key: Symbol },

    #[error("node {child} is stored under {key} but its edge starts with {actual}")]
    ChildKeyMismatch {
        child: NodeIndex,
        key: Symbol,
        actual: Symbol,
    },

    #[error("node {0} still has an open edge")]
    OpenEdge(NodeIndex),

    #[error("node {0} has an empty edge")]
    EmptyEdge(NodeIndex),

    #[error("edge into node {node} ends at {end}, past the terminator at {len}")]
    EdgeOutOfBounds { node: NodeIndex, end: usize, len: usize },

    #[error("internal node {0} has fewer than two children")]
    NotBranching(NodeIndex),

    #[error("internal node {0} has no suffix link")]
    MissingSuffixLink(NodeIndex),

    #[error("suffix link of node {node} points to {target}, which does not spell its path without the first symbol")]
    SuffixLinkMismatch { node: NodeIndex, target: NodeIndex },

    #[error("tree has {actual} leaves, expected {expected}")]
    LeafCount { expected: usize, actual: usize },
}

impl SuffixTree {
    /// Validates the tree structure.
    ///
    /// Checks:
    /// - Root has no parent, every other node has a parent listing it as child
    /// - Children keys are unique and equal the first symbol of each child edge
    /// - Every non-root edge is fixed, non-empty and within `text + terminator`
    /// - Internal nodes branch and have a suffix link to the node spelling
    ///   their path label without its first symbol
    /// - There is one leaf per suffix
    ///
    /// Checking suffix links compares path labels, so validation takes time
    /// quadratic in the text length in the worst case.
    ///
    /// # Errors
    /// Returns the first [InvariantViolation] found.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let root = self.root();
        if root.has_parent() {
            return Err(InvariantViolation::RootHasParent(root.index()));
        }

        for node in self.pre_order_iter() {
            let index = node.index();

            let mut keys = HashSet::with_capacity(node.num_children());
            for (key, child) in node.children().iter() {
                if !keys.insert(key) {
                    return Err(InvariantViolation::DuplicateChildKey { node: index, key });
                }
                match self[child].parent() {
                    Some(parent) if parent == index => {}
                    Some(parent) => {
                        return Err(InvariantViolation::ParentMismatch { child, parent });
                    }
                    None => return Err(InvariantViolation::MissingParent(child)),
                }
                let actual = self.symbol(self[child].start());
                if actual != key {
                    return Err(InvariantViolation::ChildKeyMismatch { child, key, actual });
                }
            }

            if node.is_root() {
                continue;
            }

            let Some(len) = node.length().fixed() else {
                return Err(InvariantViolation::OpenEdge(index));
            };
            if len == 0 {
                return Err(InvariantViolation::EmptyEdge(index));
            }
            let end = node.start() + len - 1;
            if end > self.len() {
                return Err(InvariantViolation::EdgeOutOfBounds {
                    node: index,
                    end,
                    len: self.len(),
                });
            }

            if node.is_internal() {
                if node.num_children() < 2 {
                    return Err(InvariantViolation::NotBranching(index));
                }
                let target = node
                    .suffix_link()
                    .ok_or(InvariantViolation::MissingSuffixLink(index))?;
                if self.path_symbols(target) != self.path_symbols(index)[1..] {
                    return Err(InvariantViolation::SuffixLinkMismatch { node: index, target });
                }
            }
        }

        let expected = self.len() + 1;
        let actual = self.num_leaves();
        if actual != expected {
            return Err(InvariantViolation::LeafCount { expected, actual });
        }

        Ok(())
    }
}
