//! Substring and suffix queries on a finished [SuffixTree].
//!
//! All queries first walk the pattern down from the root, which takes time
//! proportional to the pattern, not the text. Queries reporting occurrences
//! then collect the leaves below the point where the walk ended.

use crate::model::node::{NodeIndex, ROOT};
use crate::model::text::Symbol;
use crate::model::tree::SuffixTree;
use std::iter;

impl SuffixTree {
    /// Returns `true` if `pattern` occurs in the text.
    /// The empty pattern occurs in every text.
    ///
    /// # Example
    /// ```
    /// let tree = ukkonen::build_suffix_tree("banana");
    /// assert!(tree.contains("nan"));
    /// assert!(!tree.contains("nab"));
    /// ```
    pub fn contains(&self, pattern: &str) -> bool {
        self.locate(pattern.chars().map(Symbol::Char)).is_some()
    }

    /// Returns `true` if `pattern` is a suffix of the text.
    /// The empty pattern is the suffix starting at `len()`.
    pub fn is_suffix(&self, pattern: &str) -> bool {
        let symbols = pattern
            .chars()
            .map(Symbol::Char)
            .chain(iter::once(Symbol::Terminator));
        self.locate(symbols).is_some()
    }

    /// Returns the start indices (in characters) of all occurrences of
    /// `pattern`, in increasing order.
    ///
    /// The empty pattern occurs at every index `0..=len()`.
    ///
    /// # Example
    /// ```
    /// let tree = ukkonen::build_suffix_tree("banana");
    /// assert_eq!(tree.find_all("ana"), vec![1, 3]);
    /// assert!(tree.find_all("x").is_empty());
    /// ```
    pub fn find_all(&self, pattern: &str) -> Vec<usize> {
        let Some(node) = self.locate(pattern.chars().map(Symbol::Char)) else {
            return Vec::new();
        };

        let mut starts: Vec<usize> = self
            .leaves_below(node)
            .map(|(_, start)| start)
            .collect();
        starts.sort_unstable();
        starts
    }

    /// Returns the number of occurrences of `pattern`.
    pub fn count(&self, pattern: &str) -> usize {
        self.locate(pattern.chars().map(Symbol::Char))
            .map_or(0, |node| self.leaves_below(node).count())
    }

    /// Returns all leaves as `(suffix index, leaf)` pairs, ordered by suffix index.
    pub fn suffixes(&self) -> Vec<(usize, NodeIndex)> {
        let mut suffixes: Vec<(usize, NodeIndex)> = self
            .leaves_below(ROOT)
            .map(|(leaf, start)| (start, leaf))
            .collect();
        suffixes.sort_unstable();
        suffixes
    }

    /// Returns the longest substring occurring at least twice,
    /// or the empty string if no character repeats.
    ///
    /// Among several candidates of equal length, the first one met in
    /// pre-order is returned.
    ///
    /// # Example
    /// ```
    /// let tree = ukkonen::build_suffix_tree("banana");
    /// assert_eq!(tree.longest_repeated_substring(), "ana");
    /// ```
    pub fn longest_repeated_substring(&self) -> String {
        let mut deepest = (ROOT, 0);
        let mut stack = vec![(ROOT, 0)];
        while let Some((node, depth)) = stack.pop() {
            if depth > deepest.1 {
                deepest = (node, depth);
            }
            for child in self.children_of(node).rev() {
                if self[child].is_internal() {
                    stack.push((child, depth + self.edge_len(child)));
                }
            }
        }
        self.path_label(deepest.0)
    }

    /// Walks `symbols` down from the root.
    ///
    /// # Returns
    /// The highest node whose path label starts with the walked symbols, or
    /// `None` if the tree does not contain them.
    fn locate(&self, symbols: impl Iterator<Item = Symbol>) -> Option<NodeIndex> {
        let mut symbols = symbols.peekable();
        let mut node = ROOT;

        while let Some(&first) = symbols.peek() {
            let child = self[node].find_child(first)?;
            let start = self[child].start();
            for index in start..start + self.edge_len(child) {
                match symbols.peek() {
                    None => return Some(child),
                    Some(&symbol) if symbol == self.symbol(index) => {
                        symbols.next();
                    }
                    Some(_) => return None,
                }
            }
            node = child;
        }

        Some(node)
    }

    /// Returns `(leaf, suffix index)` for every leaf in the subtree of `node`.
    fn leaves_below(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, usize)> + '_ {
        let mut stack = vec![(node, self.string_depth(node))];
        iter::from_fn(move || {
            while let Some((current, depth)) = stack.pop() {
                if self[current].is_leaf() {
                    return Some((current, self.len() + 1 - depth));
                }
                for child in self.children_of(current) {
                    stack.push((child, depth + self.edge_len(child)));
                }
            }
            None
        })
    }
}
