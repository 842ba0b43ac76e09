//! Ukkonen is a library to build suffix trees in linear time.
//!
//! A suffix tree is a compressed trie of all suffixes of a string. Once built,
//! substring search, suffix tests and repeat finding take time proportional
//! to the query, not to the text.
//!
//! Core functionality provided:
//! - Construction: Ukkonen's online algorithm, one phase per character, with
//!   open leaf edges, suffix links and skip/count descent.
//!   See [SuffixTreeBuilder].
//! - Tree model: [SuffixTree] stores its nodes in an arena, so parents and
//!   suffix links are plain indices. See [crate::model] for details.
//! - Queries: [contains](SuffixTree::contains),
//!   [is_suffix](SuffixTree::is_suffix), [find_all](SuffixTree::find_all),
//!   [count](SuffixTree::count),
//!   [longest_repeated_substring](SuffixTree::longest_repeated_substring).
//! - Rendering: box-drawing text output, see [crate::render].
//!
//! Limitations:
//! - One string per tree (no generalized suffix trees)
//! - Trees cannot be extended after construction
//!
//! # Usage patterns
//! 1. [build_suffix_tree] builds a tree with default settings.
//! 2. Configure a [SuffixTreeBuilder] for control over child storage and the
//!    displayed terminator.
//!
//! ## Example Default Configuration
//! ```
//! use ukkonen::build_suffix_tree;
//!
//! let tree = build_suffix_tree("banana");
//! assert_eq!(tree.num_leaves(), 7);
//! assert!(tree.is_suffix("ana"));
//! println!("{tree}");
//! ```
//!
//! ## Example Builder Configuration
//! ```
//! use ukkonen::SuffixTreeBuilder;
//!
//! let tree = SuffixTreeBuilder::new()
//!     .with_list_capacity(2) // hash children beyond two per node
//!     .with_terminator('#')  // shown in labels
//!     .build("abracadabra");
//!
//! assert_eq!(tree.longest_repeated_substring(), "abra");
//! assert_eq!(tree.label_of(tree.children_of(tree.root_index()).last().unwrap()), "#");
//! ```

pub mod model;
pub mod render;

pub use crate::model::InvariantViolation;
pub use crate::model::SuffixTree;
pub use crate::model::SuffixTreeBuilder;

// ============================================================================
// Quick API
// ============================================================================
/// Builds the suffix tree of `text` using default settings.
///
/// See [`SuffixTreeBuilder::build`] for details.
pub fn build_suffix_tree<S: AsRef<str>>(text: S) -> SuffixTree {
    SuffixTreeBuilder::new().build(text.as_ref())
}
