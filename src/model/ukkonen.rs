//! Ukkonen's online suffix tree construction.
//!
//! The engine consumes the text one symbol per *phase*. Phase `i` makes every
//! suffix `text[j..i]` explicit by running *extensions* for increasing `j`,
//! each applying one of three rules at the end of `text[j..i-1]`:
//!
//! 1. The suffix ends at a leaf: the open edge already grew, nothing to do.
//! 2. The suffix is not followed by `text[i]`: hang a new leaf there,
//!    splitting the edge first if the point lies inside it.
//! 3. The suffix is already followed by `text[i]`: so are all shorter ones,
//!    the phase ends early.
//!
//! Three tricks make the whole run linear:
//! - Leaf edges are [open](EdgeLength::Open) and end at the shared `frontier`.
//! - The next phase starts at the extension where rule 3 stopped.
//! - The end of the next suffix is found by climbing to the nearest node with
//!   a suffix link, jumping along it and descending with skip/count.

use crate::model::node::{EdgeLength, Node, NodeIndex, ROOT};
use crate::model::path::Path;
use crate::model::position::Position;
use crate::model::text::Text;
use tracing::{debug, trace};

/// Result of a single extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extension {
    /// Further extensions of this phase may be needed
    Continue,
    /// Rule 3 applied, the remaining extensions are implicit
    Stop,
}

/// State of a single construction run.
///
/// A fresh engine is created for every build and consumed by [Ukkonen::run].
pub(crate) struct Ukkonen {
    text: Text,
    /// Arena; `nodes[ROOT]` is the root
    nodes: Vec<Node>,
    list_capacity: usize,
    /// Leaf of the whole text, created in phase 0
    first_leaf: NodeIndex,
    /// End of every open edge; index of the last symbol processed
    frontier: usize,
    /// Internal node created by the previous extension, waiting for its link
    pending_internal: Option<NodeIndex>,
    /// Position found by the previous extension
    active: Position,
    /// Position right after the point where the last extension stopped
    cached_beta: Position,
    /// First extension of the next phase
    last_extension: usize,
}

impl Ukkonen {
    /// Sets up phase 0: a root with a single leaf spelling the first symbol.
    pub(crate) fn new(text: &str, list_capacity: usize) -> Self {
        let mut engine = Self {
            text: Text::new(text),
            nodes: Vec::with_capacity(2 * text.len() + 2),
            list_capacity,
            first_leaf: ROOT,
            frontier: 0,
            pending_internal: None,
            active: Position::root(),
            cached_beta: Position::root(),
            last_extension: 0,
        };
        engine.nodes.push(Node::new_root());
        engine.first_leaf = engine.add_leaf(ROOT, 0);
        engine
    }

    /// Runs all phases, fixes open edges and hands out text and arena.
    pub(crate) fn run(mut self) -> (Text, Vec<Node>) {
        let len = self.text.len();
        debug!(len, list_capacity = self.list_capacity, "building suffix tree");

        for i in 1..=len {
            self.phase(i);
        }
        self.finalize();

        debug!(len, nodes = self.nodes.len(), "suffix tree built");
        (self.text, self.nodes)
    }

    // ------------------------------------------------------------------------
    // Phases and extensions
    // ------------------------------------------------------------------------
    fn phase(&mut self, i: usize) {
        self.pending_internal = None;

        let first = self.last_extension;
        let mut j = first;
        while j <= i {
            if self.extension(j, i) == Extension::Stop {
                break;
            }
            j += 1;
        }

        self.last_extension = j.min(i);
        self.frontier += 1;
        trace!(phase = i, first, stopped_at = j, nodes = self.nodes.len(), "phase done");
    }

    fn extension(&mut self, j: usize, i: usize) -> Extension {
        let symbol = self.text.symbol(i);
        let locus = self.find_beta(j, i - 1);

        let node = &self.nodes[locus.node()];
        let at_edge_end = locus.at_edge_end(node, self.frontier);
        if node.is_leaf() && at_edge_end {
            trace!(j, i, "rule 1");
            return Extension::Continue;
        }

        if !locus.continues(node, &self.text, self.frontier, symbol) {
            let parent = if locus.is_root() || at_edge_end {
                self.link_pending(locus.node());
                locus.node()
            } else {
                let split = self.split_at(locus.node(), locus.location());
                self.link_pending(split);
                if i - j == 1 {
                    self.nodes[split].set_suffix_link(ROOT);
                } else {
                    self.pending_internal = Some(split);
                }
                split
            };
            self.add_leaf(parent, i);
            self.update_cached_beta(locus, i);
            trace!(j, i, parent, "rule 2");
            Extension::Continue
        } else {
            self.link_pending(locus.node());
            self.update_cached_beta(locus, i);
            trace!(j, i, "rule 3");
            Extension::Stop
        }
    }

    // ------------------------------------------------------------------------
    // Locating suffixes
    // ------------------------------------------------------------------------
    /// Returns the position of the end of `text[j..=boundary]`.
    fn find_beta(&mut self, j: usize, boundary: usize) -> Position {
        let position = if self.last_extension > 0 && self.last_extension == j {
            self.cached_beta
        } else if j > boundary {
            Position::root()
        } else if j == 0 {
            Position::new(self.first_leaf, boundary)
        } else {
            self.follow_suffix_link(j, boundary)
        };

        self.active = position;
        position
    }

    /// Climbs from the active position to the closest node with a suffix
    /// link, follows it and walks the climbed path down again.
    fn follow_suffix_link(&self, j: usize, boundary: usize) -> Position {
        let active = self.active;
        let node = &self.nodes[active.node()];
        let mut path = Path::new(node.start(), active.location() + 1 - node.start());

        let mut current = node.parent().expect("active position below the root");
        while current != ROOT && self.nodes[current].suffix_link().is_none() {
            let edge_len = self.nodes[current]
                .length()
                .fixed()
                .expect("internal node has a fixed edge");
            path.prepend(edge_len);
            current = self.nodes[current]
                .parent()
                .expect("non-root node has a parent");
        }

        match self.nodes[current].suffix_link() {
            Some(link) if current != ROOT => self.walk_down(link, path),
            _ => self.walk_down(ROOT, Path::new(j, boundary + 1 - j)),
        }
    }

    /// Walks `path` down from `from`, jumping whole edges (skip/count).
    fn walk_down(&self, from: NodeIndex, path: Path) -> Position {
        debug_assert!(path.length() > 0, "walk down an empty path");
        let mut start = path.start();
        let mut remaining = path.length();
        let mut node = self.child_at(from, start);

        loop {
            let edge = &self.nodes[node];
            match edge.length() {
                length if length.fits(remaining) => {
                    return Position::new(node, edge.start() + remaining - 1);
                }
                EdgeLength::Fixed(len) => {
                    start += len;
                    remaining -= len;
                    node = self.child_at(node, start);
                }
                EdgeLength::Open => unreachable!("open edges fit every walk"),
            }
        }
    }

    fn child_at(&self, node: NodeIndex, index: usize) -> NodeIndex {
        self.nodes[node]
            .find_child(self.text.symbol(index))
            .expect("walk down follows an existing edge")
    }

    // ------------------------------------------------------------------------
    // Bookkeeping
    // ------------------------------------------------------------------------
    fn link_pending(&mut self, target: NodeIndex) {
        if let Some(pending) = self.pending_internal.take() {
            self.nodes[pending].set_suffix_link(target);
        }
    }

    /// Remembers the position just past `locus` after reading `text[i]`.
    fn update_cached_beta(&mut self, locus: Position, i: usize) {
        let node = &self.nodes[locus.node()];
        self.cached_beta = if locus.edge_continues(node, self.frontier) {
            Position::new(locus.node(), locus.location() + 1)
        } else {
            let child = self.child_at(locus.node(), i);
            Position::new(child, self.nodes[child].start())
        };
    }

    // ------------------------------------------------------------------------
    // Structural changes
    // ------------------------------------------------------------------------
    fn add_leaf(&mut self, parent: NodeIndex, start: usize) -> NodeIndex {
        let leaf = self.nodes.len();
        self.nodes.push(Node::new_leaf(leaf, start));
        self.attach(parent, leaf);
        leaf
    }

    fn attach(&mut self, parent: NodeIndex, child: NodeIndex) {
        let key = self.text.symbol(self.nodes[child].start());
        self.nodes[parent].add_child(key, child, self.list_capacity);
        self.nodes[child].set_parent(parent);
    }

    /// Splits the edge into `node` after text index `location`.
    ///
    /// The new node takes over the head `[start, location]` and the place of
    /// `node` among its parent's children; `node` keeps the tail and becomes
    /// the only child of the new node.
    fn split_at(&mut self, node: NodeIndex, location: usize) -> NodeIndex {
        let start = self.nodes[node].start();
        let parent = self.nodes[node].parent().expect("split below the root");
        let head_len = location + 1 - start;

        let head = self.nodes.len();
        self.nodes.push(Node::new_internal(head, start, head_len));
        self.nodes[parent].replace_child(self.text.symbol(start), head);
        self.nodes[head].set_parent(parent);

        let tail = &mut self.nodes[node];
        if let EdgeLength::Fixed(len) = tail.length() {
            assert!(len > head_len, "split point inside the edge");
            tail.set_length(EdgeLength::Fixed(len - head_len));
        }
        tail.set_start(location + 1);
        self.attach(head, node);

        head
    }

    /// Turns every open edge into a fixed one ending at the frontier.
    fn finalize(&mut self) {
        debug_assert_eq!(self.frontier, self.text.len());
        for node in &mut self.nodes {
            if node.length().is_open() {
                let len = node.edge_len(self.frontier);
                node.set_length(EdgeLength::Fixed(len));
            }
        }
        debug_assert!(
            self.nodes
                .iter()
                .all(|node| !node.is_internal() || node.suffix_link().is_some()),
            "internal node without suffix link"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::children::DEFAULT_LIST_CAPACITY;

    fn engine(text: &str) -> Ukkonen {
        Ukkonen::new(text, DEFAULT_LIST_CAPACITY)
    }

    #[test]
    fn test_phase_zero_has_single_open_leaf() {
        let engine = engine("abc");
        assert_eq!(engine.nodes.len(), 2);
        assert_eq!(engine.first_leaf, 1);
        assert!(engine.nodes[1].length().is_open());
        assert_eq!(engine.nodes[ROOT].num_children(), 1);
    }

    #[test]
    fn test_frontier_advances_once_per_phase() {
        let mut engine = engine("abab");
        for i in 1..=4 {
            engine.phase(i);
            assert_eq!(engine.frontier, i);
        }
    }

    #[test]
    fn test_repeat_stops_phase_early() {
        // "ab" then "a": rule 3 at j = 2 ends phase 2
        let mut engine = engine("aba");
        engine.phase(1);
        engine.phase(2);
        assert_eq!(engine.last_extension, 2);
        assert_eq!(engine.nodes[ROOT].num_children(), 2);
    }

    #[test]
    fn test_pending_node_linked_by_following_extension() {
        let text = "abcabxabcd";
        let mut engine = engine(text);
        for i in 1..=text.chars().count() {
            engine.phase(i);
            for node in engine.nodes.iter().filter(|n| n.is_internal()) {
                let awaiting = engine.pending_internal == Some(node.index());
                assert!(
                    node.suffix_link().is_some() || awaiting,
                    "node {} unlinked after phase {i}",
                    node.index()
                );
            }
        }
    }

    #[test]
    fn test_split_keeps_tail_and_adds_head() {
        let mut engine = engine("abc");
        engine.frontier = 2;
        let head = engine.split_at(engine.first_leaf, 0);

        let head_node = &engine.nodes[head];
        assert_eq!((head_node.start(), head_node.length()), (0, EdgeLength::Fixed(1)));
        assert_eq!(head_node.parent(), Some(ROOT));
        assert_eq!(engine.nodes[ROOT].find_child('a'.into()), Some(head));

        let tail = &engine.nodes[engine.first_leaf];
        assert_eq!(tail.start(), 1);
        assert!(tail.length().is_open());
        assert_eq!(tail.parent(), Some(head));
        assert_eq!(head_node.find_child('b'.into()), Some(engine.first_leaf));
    }

    #[test]
    fn test_finalize_fixes_open_edges() {
        let (_, nodes) = engine("ab").run();
        assert!(nodes.iter().all(|n| !n.length().is_open()));
        // "ab$", "b$", "$"
        let mut lengths: Vec<_> = nodes
            .iter()
            .filter(|n| n.is_leaf())
            .filter_map(|n| n.length().fixed())
            .collect();
        lengths.sort();
        assert_eq!(lengths, vec![1, 2, 3]);
    }
}
