//! Child storage of suffix tree nodes.
//!
//! A node keeps its children keyed by the first [Symbol] of each child's edge.
//! Nodes with few children use a plain vector searched linearly, which is
//! compact and fast for small fan-out. Once a node would hold more children
//! than its list capacity, *all* of them move into an insertion-ordered hash
//! table ([IndexMap]), so heavily branching nodes (e.g. the root over a large
//! alphabet) keep cheap lookups.
//!
//! Both representations behave identically: same lookups, same replacement
//! semantics, same iteration order (insertion order).

use crate::model::node::NodeIndex;
use crate::model::text::Symbol;
use indexmap::IndexMap;

/// Default number of children kept in list form before switching to a table.
pub const DEFAULT_LIST_CAPACITY: usize = 6;

// =#========================================================================#=
// CHILDREN
// =#========================================================================#=
/// Children of a node, keyed by the first symbol of their edge label.
///
/// # Invariants
/// - At most one child per key (trie property)
/// - Iteration yields children in insertion order, replacements keep the slot
#[derive(Debug, Clone)]
pub enum Children {
    /// Few children, searched linearly
    List(Vec<(Symbol, NodeIndex)>),
    /// Many children, hashed by key
    Table(IndexMap<Symbol, NodeIndex>),
}

impl Default for Children {
    fn default() -> Self {
        Children::List(Vec::new())
    }
}

impl Children {
    /// Creates an empty list-backed child storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of children.
    pub fn len(&self) -> usize {
        match self {
            Children::List(list) => list.len(),
            Children::Table(table) => table.len(),
        }
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the children are stored in a hash table.
    pub fn is_table(&self) -> bool {
        matches!(self, Children::Table(_))
    }

    /// Returns the child whose edge starts with `key`, if any.
    pub fn get(&self, key: Symbol) -> Option<NodeIndex> {
        match self {
            Children::List(list) => list
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, child)| *child),
            Children::Table(table) => table.get(&key).copied(),
        }
    }

    /// Returns `true` if a child with the given key exists.
    pub fn contains(&self, key: Symbol) -> bool {
        self.get(key).is_some()
    }

    /// Inserts `child` under `key`.
    ///
    /// If the list would grow beyond `list_capacity`, all existing children
    /// are migrated into a table first and the new child is added there.
    ///
    /// # Panics
    /// Panics if a child with the same key already exists.
    pub fn insert(&mut self, key: Symbol, child: NodeIndex, list_capacity: usize) {
        assert!(
            !self.contains(key),
            "child with key {key:?} already present"
        );

        if let Children::List(list) = self
            && list.len() >= list_capacity
        {
            let mut table = IndexMap::with_capacity(list.len() + 1);
            table.extend(list.drain(..));
            *self = Children::Table(table);
        }

        match self {
            Children::List(list) => list.push((key, child)),
            Children::Table(table) => {
                table.insert(key, child);
            }
        }
    }

    /// Replaces the child stored under `key` by `child`, keeping its slot.
    ///
    /// # Returns
    /// The index of the replaced child.
    ///
    /// # Panics
    /// Panics if there is no child with this key.
    pub fn replace(&mut self, key: Symbol, child: NodeIndex) -> NodeIndex {
        let slot = match self {
            Children::List(list) => list
                .iter_mut()
                .find(|(k, _)| *k == key)
                .map(|(_, c)| c),
            Children::Table(table) => table.get_mut(&key),
        };
        let slot = slot.unwrap_or_else(|| panic!("no child with key {key:?} to replace"));
        std::mem::replace(slot, child)
    }

    /// Returns an iterator over `(key, child)` pairs in insertion order.
    pub fn iter(&self) -> ChildIter<'_> {
        match self {
            Children::List(list) => ChildIter::List(list.iter()),
            Children::Table(table) => ChildIter::Table(table.iter()),
        }
    }

    /// Returns an iterator over the child indices in insertion order.
    pub fn indices(&self) -> impl DoubleEndedIterator<Item = NodeIndex> + '_ {
        self.iter().map(|(_, child)| child)
    }
}

/// Iterator over the children of a node, see [Children::iter].
pub enum ChildIter<'a> {
    List(std::slice::Iter<'a, (Symbol, NodeIndex)>),
    Table(indexmap::map::Iter<'a, Symbol, NodeIndex>),
}

impl Iterator for ChildIter<'_> {
    type Item = (Symbol, NodeIndex);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ChildIter::List(iter) => iter.next().copied(),
            ChildIter::Table(iter) => iter.next().map(|(k, c)| (*k, *c)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            ChildIter::List(iter) => iter.size_hint(),
            ChildIter::Table(iter) => iter.size_hint(),
        }
    }
}

impl DoubleEndedIterator for ChildIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self {
            ChildIter::List(iter) => iter.next_back().copied(),
            ChildIter::Table(iter) => iter.next_back().map(|(k, c)| (*k, *c)),
        }
    }
}

impl ExactSizeIterator for ChildIter<'_> {}
