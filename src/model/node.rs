//! Node module for suffix tree representation.

use crate::model::children::Children;
use crate::model::text::Symbol;

/// Index of a node in a suffix tree (arena).
pub type NodeIndex = usize;

/// Arena index of the root; the root is always the first node created.
pub const ROOT: NodeIndex = 0;

// =#========================================================================#=
// EDGE LENGTH
// =#========================================================================#=
/// Length of the edge leading into a node.
///
/// Leaves created during construction have an [EdgeLength::Open] edge: its end
/// is not stored but tracks the builder's frontier, so every leaf grows by one
/// symbol per phase without being touched. Once construction completes, all
/// open edges are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeLength {
    /// Edge with a known number of symbols
    Fixed(usize),
    /// Leaf edge ending at the current frontier
    Open,
}

impl EdgeLength {
    /// Returns `true` if this edge is open.
    pub fn is_open(&self) -> bool {
        matches!(self, EdgeLength::Open)
    }

    /// Returns the fixed length, or `None` if the edge is open.
    pub fn fixed(&self) -> Option<usize> {
        match self {
            EdgeLength::Fixed(len) => Some(*len),
            EdgeLength::Open => None,
        }
    }

    /// Returns whether a walk of `len` symbols ends on this edge.
    /// Open edges are long enough for any walk.
    pub fn fits(&self, len: usize) -> bool {
        match self {
            EdgeLength::Fixed(edge_len) => len <= *edge_len,
            EdgeLength::Open => true,
        }
    }
}

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// Represents a node of a suffix tree together with the edge leading into it.
///
/// A node is either:
/// - **Root**: no parent, empty edge (`start = 0`, length `Fixed(0)`)
/// - **Internal**: parent, fixed non-empty edge, at least one child during
///   construction and at least two in a finished tree
/// - **Leaf**: parent, no children; open edge during construction
///
/// The edge label is `text[start ..= effective_end(frontier)]`.
///
/// # Invariants
/// - `index` is index in arena
/// - `parent` is `None` only for the root
/// - children keys are the first symbols of the children's edges
/// - `suffix_link` is set at most once
#[derive(Debug, Clone)]
pub struct Node {
    /// Index of this node in the tree arena
    index: NodeIndex,
    /// Text index of the first symbol of the incoming edge
    start: usize,
    /// Length of the incoming edge
    length: EdgeLength,
    /// Index of the parent node
    parent: Option<NodeIndex>,
    /// Children keyed by first edge symbol
    children: Children,
    /// Node spelling this node's path label without its first symbol
    suffix_link: Option<NodeIndex>,
}

impl Node {
    /// Creates a new root node with an empty edge.
    pub fn new_root() -> Self {
        Self {
            index: ROOT,
            start: 0,
            length: EdgeLength::Fixed(0),
            parent: None,
            children: Children::new(),
            suffix_link: None,
        }
    }

    /// Creates a new internal node.
    ///
    /// # Arguments
    /// * `index` - The unique index of this node in the tree (arena)
    /// * `start` - Text index where the incoming edge starts
    /// * `length` - Number of symbols on the incoming edge (positive)
    pub fn new_internal(index: NodeIndex, start: usize, length: usize) -> Self {
        assert!(length > 0, "Internal node {index} needs a non-empty edge");
        Self {
            index,
            start,
            length: EdgeLength::Fixed(length),
            parent: None,
            children: Children::new(),
            suffix_link: None,
        }
    }

    /// Creates a new leaf node with an open edge starting at `start`.
    ///
    /// # Arguments
    /// * `index` - The unique index of this node in the tree (arena)
    /// * `start` - Text index where the incoming edge starts
    pub fn new_leaf(index: NodeIndex, start: usize) -> Self {
        Self {
            index,
            start,
            length: EdgeLength::Open,
            parent: None,
            children: Children::new(),
            suffix_link: None,
        }
    }

    /// Returns the index of this node.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Returns the text index where the incoming edge starts.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the length of the incoming edge.
    pub fn length(&self) -> EdgeLength {
        self.length
    }

    /// Returns the index of the last symbol on the incoming edge.
    ///
    /// # Arguments
    /// * `frontier` - End of all open edges
    ///
    /// # Panics
    /// Panics if called on the root, whose edge is empty.
    pub fn effective_end(&self, frontier: usize) -> usize {
        match self.length {
            EdgeLength::Open => frontier,
            EdgeLength::Fixed(len) => {
                assert!(len > 0, "Empty edge of node {} has no end", self.index);
                self.start + len - 1
            }
        }
    }

    /// Returns the number of symbols on the incoming edge.
    ///
    /// # Arguments
    /// * `frontier` - End of all open edges
    pub fn edge_len(&self, frontier: usize) -> usize {
        match self.length {
            EdgeLength::Open => frontier + 1 - self.start,
            EdgeLength::Fixed(len) => len,
        }
    }

    /// Returns the index of the parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Returns `true` if this node has a parent set.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns the suffix link target, if set.
    pub fn suffix_link(&self) -> Option<NodeIndex> {
        self.suffix_link
    }

    /// Returns the children of this node.
    pub fn children(&self) -> &Children {
        &self.children
    }

    /// Returns the child whose edge starts with `symbol`, if any.
    pub fn find_child(&self, symbol: Symbol) -> Option<NodeIndex> {
        self.children.get(symbol)
    }

    /// Returns the number of children.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if this node is the root.
    pub fn is_root(&self) -> bool {
        self.index == ROOT
    }

    /// Returns `true` if this node is a leaf (a non-root node without children).
    pub fn is_leaf(&self) -> bool {
        !self.is_root() && self.children.is_empty()
    }

    /// Returns `true` if this node is an internal node (neither root nor leaf).
    pub fn is_internal(&self) -> bool {
        !self.is_root() && !self.children.is_empty()
    }

    // ------------------------------------------------------------------------
    // Mutation during construction (crate only)
    // ------------------------------------------------------------------------
    pub(crate) fn set_start(&mut self, start: usize) {
        self.start = start;
    }

    pub(crate) fn set_length(&mut self, length: EdgeLength) {
        self.length = length;
    }

    pub(crate) fn set_parent(&mut self, parent: NodeIndex) {
        assert!(!self.is_root(), "Cannot set parent on root node");
        self.parent = Some(parent);
    }

    pub(crate) fn set_suffix_link(&mut self, target: NodeIndex) {
        debug_assert!(
            self.suffix_link.is_none_or(|link| link == target),
            "Suffix link of node {} already set",
            self.index
        );
        self.suffix_link = Some(target);
    }

    pub(crate) fn add_child(&mut self, key: Symbol, child: NodeIndex, list_capacity: usize) {
        self.children.insert(key, child, list_capacity);
    }

    pub(crate) fn replace_child(&mut self, key: Symbol, child: NodeIndex) -> NodeIndex {
        self.children.replace(key, child)
    }
}
