//! Configuration and entry point of suffix tree construction.
//!
//! [SuffixTreeBuilder] holds the options of a build and runs Ukkonen's
//! algorithm for each call to [`build`](SuffixTreeBuilder::build). The
//! construction state lives only for the duration of that call, so one
//! builder can produce any number of independent trees.
//!
//! # Example
//! ```
//! use ukkonen::model::SuffixTreeBuilder;
//!
//! let tree = SuffixTreeBuilder::new()
//!     .with_terminator('#')
//!     .with_list_capacity(4)
//!     .build("mississippi");
//!
//! assert_eq!(tree.num_leaves(), 12);
//! assert!(tree.contains("ssip"));
//! ```

use crate::model::children::DEFAULT_LIST_CAPACITY;
use crate::model::tree::SuffixTree;
use crate::model::ukkonen::Ukkonen;

/// Default marker used to display the terminator in labels.
pub const DEFAULT_TERMINATOR: char = '$';

// =#========================================================================#=
// SUFFIX TREE BUILDER
// =#========================================================================#=
/// Builder for [SuffixTree]s.
///
/// # Options
/// * `list_capacity` - Number of children a node keeps in list form before
///   switching to a hash table (default [DEFAULT_LIST_CAPACITY])
/// * `terminator` - Character shown for the end marker in labels and
///   rendering (default [DEFAULT_TERMINATOR]); it never takes part in
///   construction, so it may also occur in the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixTreeBuilder {
    list_capacity: usize,
    terminator: char,
}

impl Default for SuffixTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixTreeBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            list_capacity: DEFAULT_LIST_CAPACITY,
            terminator: DEFAULT_TERMINATOR,
        }
    }

    /// Sets the number of children kept in list form per node.
    ///
    /// A capacity of `0` stores all children in hash tables.
    pub fn with_list_capacity(mut self, list_capacity: usize) -> Self {
        self.list_capacity = list_capacity;
        self
    }

    /// Sets the character displayed for the terminator.
    pub fn with_terminator(mut self, terminator: char) -> Self {
        self.terminator = terminator;
        self
    }

    /// Returns the configured list capacity.
    pub fn list_capacity(&self) -> usize {
        self.list_capacity
    }

    /// Returns the configured terminator marker.
    pub fn terminator(&self) -> char {
        self.terminator
    }

    /// Builds the suffix tree of `text` in time linear in its length.
    ///
    /// Total for every input, including the empty string: the result of an
    /// empty text is a root with a single terminator leaf.
    pub fn build(&self, text: &str) -> SuffixTree {
        let (text, nodes) = Ukkonen::new(text, self.list_capacity).run();
        SuffixTree::from_parts(text, nodes, self.terminator)
    }
}
