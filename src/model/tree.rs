//! Finished suffix trees.
//!
//! [SuffixTree] pairs the node arena produced by construction with the text
//! it indexes. It is immutable: every edge is fixed and every internal node
//! carries its suffix link.
//!
//! Edges are labelled by spans of the text. A span may reach one past the last
//! character, where the implicit terminator sits; labels render it with the
//! marker configured on the [SuffixTreeBuilder](crate::model::SuffixTreeBuilder).

use crate::model::node::{Node, NodeIndex, ROOT};
use crate::model::text::{Symbol, Text};

// =$========================================================================$=
// SUFFIX TREE
// =$========================================================================$=
/// A suffix tree over a single string, represented using the arena pattern.
///
/// Nodes are stored in a contiguous vector and referenced by [NodeIndex];
/// parents and suffix links are indices as well, so the tree has no reference
/// cycles. The root is at index [ROOT].
///
/// # Structure
/// - One leaf per suffix of `text + terminator`, i.e. `len() + 1` leaves
/// - Every internal node has at least two children and a suffix link
/// - Children of a node start with pairwise distinct symbols
#[derive(Debug, Clone)]
pub struct SuffixTree {
    /// Text this tree indexes
    text: Text,
    /// Nodes of this tree (arena pattern)
    nodes: Vec<Node>,
    /// Marker displayed for the terminator
    terminator: char,
}

// ============================================================================
// New, Getters / Accessors (pub)
// ============================================================================
impl SuffixTree {
    pub(crate) fn from_parts(text: Text, nodes: Vec<Node>, terminator: char) -> Self {
        debug_assert!(nodes.first().is_some_and(Node::is_root));
        Self {
            text,
            nodes,
            terminator,
        }
    }

    /// Returns the indexed string.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Returns the symbol at text index `index` (terminator at `len()`).
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn symbol(&self, index: usize) -> Symbol {
        self.text.symbol(index)
    }

    /// Returns the number of characters of the indexed string.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the indexed string is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the marker displayed for the terminator.
    pub fn terminator(&self) -> char {
        self.terminator
    }

    /// Returns a reference to the root node.
    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    /// Returns the index of the root.
    pub fn root_index(&self) -> NodeIndex {
        ROOT
    }

    /// Returns a reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: NodeIndex) -> &Node {
        &self[index]
    }

    /// Returns the children of the node at `index` in insertion order.
    pub fn children_of(&self, index: NodeIndex) -> impl DoubleEndedIterator<Item = NodeIndex> + '_ {
        self[index].children().indices()
    }

    /// Returns the number of nodes, root included.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of leaves, one per suffix including the empty one.
    pub fn num_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Returns the number of internal nodes (neither root nor leaf).
    pub fn num_internal(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_internal()).count()
    }

    /// Returns an iterator over the indices of all leaves.
    pub fn leaves(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes.iter().filter(|n| n.is_leaf()).map(Node::index)
    }

    /// Returns the number of symbols on the edge into the node at `index`.
    pub fn edge_len(&self, index: NodeIndex) -> usize {
        self[index].edge_len(self.text.len())
    }

    /// Returns the number of symbols on the path from the root to `index`.
    pub fn string_depth(&self, index: NodeIndex) -> usize {
        let mut depth = 0;
        let mut current = Some(index);
        while let Some(node) = current {
            depth += self.edge_len(node);
            current = self[node].parent();
        }
        depth
    }

    /// Returns the start of the suffix spelled by the leaf at `index`,
    /// or `None` if the node is not a leaf.
    ///
    /// The leaf of the empty suffix returns `len()`.
    pub fn suffix_index(&self, index: NodeIndex) -> Option<usize> {
        self[index]
            .is_leaf()
            .then(|| self.len() + 1 - self.string_depth(index))
    }
}

// ============================================================================
// Labels (pub)
// ============================================================================
impl SuffixTree {
    /// Returns the label of the edge into the node at `index`.
    ///
    /// The terminator is rendered as the configured marker; the root has an
    /// empty label.
    ///
    /// # Example
    /// ```
    /// let tree = ukkonen::build_suffix_tree("abc");
    /// let labels: Vec<String> = tree
    ///     .children_of(tree.root_index())
    ///     .map(|child| tree.label_of(child))
    ///     .collect();
    /// assert_eq!(labels, ["abc$", "bc$", "c$", "$"]);
    /// ```
    pub fn label_of(&self, index: NodeIndex) -> String {
        let start = self[index].start();
        self.render_span(start, start + self.edge_len(index))
    }

    /// Returns the concatenated labels from the root to the node at `index`.
    pub fn path_label(&self, index: NodeIndex) -> String {
        let mut edges = Vec::new();
        let mut current = index;
        while let Some(parent) = self[current].parent() {
            edges.push(current);
            current = parent;
        }
        edges.iter().rev().map(|&node| self.label_of(node)).collect()
    }

    /// Returns the symbols from the root to the node at `index`.
    pub(crate) fn path_symbols(&self, index: NodeIndex) -> Vec<Symbol> {
        let mut edges = Vec::new();
        let mut current = index;
        while let Some(parent) = self[current].parent() {
            edges.push(current);
            current = parent;
        }
        edges
            .iter()
            .rev()
            .flat_map(|&node| {
                let start = self[node].start();
                (start..start + self.edge_len(node)).map(|i| self.text.symbol(i))
            })
            .collect()
    }

    fn render_span(&self, start: usize, end: usize) -> String {
        (start..end)
            .map(|i| self.text.symbol(i).as_char().unwrap_or(self.terminator))
            .collect()
    }
}

impl std::ops::Index<NodeIndex> for SuffixTree {
    type Output = Node;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl SuffixTree {
    /// Returns an iterator over the tree in pre-order (parents before children),
    /// children visited in insertion order.
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }

    /// Returns an iterator over the tree in post-order (children before parents).
    pub fn post_order_iter(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self)
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// Uses an explicit stack, so deep trees (e.g. over `"aaaa…"`) are fine.
pub struct PreOrderIter<'a> {
    tree: &'a SuffixTree,
    stack: Vec<NodeIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a SuffixTree) -> Self {
        PreOrderIter {
            tree,
            stack: vec![ROOT],
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];

        // Push children in reverse, so the first child is processed first
        self.stack.extend(node.children().indices().rev());

        Some(node)
    }
}

/// Iterator for post-order traversal (children before parents).
pub struct PostOrderIter<'a> {
    tree: &'a SuffixTree,
    stack: Vec<(NodeIndex, bool)>, // (index, children_visited)
}

impl<'a> PostOrderIter<'a> {
    fn new(tree: &'a SuffixTree) -> Self {
        PostOrderIter {
            tree,
            stack: vec![(ROOT, false)],
        }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let node = &self.tree[index];

            if children_visited || node.children().is_empty() {
                return Some(node);
            }

            self.stack.push((index, true));
            self.stack
                .extend(node.children().indices().rev().map(|child| (child, false)));
        }
        None
    }
}
