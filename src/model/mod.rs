//! Data model of suffix trees and their construction.
//!
//! # Tree representation
//! A [SuffixTree] uses the arena pattern to store [Node]s, referenced by
//! [NodeIndex]. Each node owns the edge leading into it as a span of the
//! [Text] plus an [EdgeLength], which is open for leaves while the tree is
//! being built. Children are kept in [Children], a small list that turns into
//! a hash table for nodes with many children.
//!
//! # Building trees
//! [SuffixTreeBuilder] runs Ukkonen's online algorithm (see the private
//! `ukkonen` module) and returns the finished, immutable [SuffixTree]:
//!
//! ```
//! use ukkonen::model::SuffixTreeBuilder;
//!
//! let tree = SuffixTreeBuilder::new().build("banana");
//! assert_eq!(tree.num_leaves(), 7);
//! assert_eq!(tree.find_all("na"), vec![2, 4]);
//! tree.validate().unwrap();
//! ```
//!
//! # Queries
//! Substring and suffix queries live in [search](crate::model::search),
//! structural checks in [validation](crate::model::validation).

pub mod children;
pub mod node;
mod path;
mod position;
pub mod search;
pub mod text;
pub mod tree;
pub mod tree_builder;
mod ukkonen;
pub mod validation;

pub use children::{Children, DEFAULT_LIST_CAPACITY};
pub use node::{EdgeLength, Node, NodeIndex, ROOT};
pub use text::{Symbol, Text};
pub use tree::SuffixTree;
pub use tree_builder::{DEFAULT_TERMINATOR, SuffixTreeBuilder};
pub use validation::InvariantViolation;
