//! Text rendering of suffix trees.
//!
//! Trees are drawn with box-drawing connectors, one edge label per line,
//! children in insertion order:
//!
//! ```text
//! [R]
//! ├─ banana$
//! ├─ a
//! │  ├─ na
//! │  │  ├─ na$
//! │  │  └─ $
//! │  └─ $
//! ├─ na
//! │  ├─ na$
//! │  └─ $
//! └─ $
//! ```
//!
//! Rendering only reads the finished tree; it plays no part in construction.

use crate::model::node::NodeIndex;
use crate::model::tree::SuffixTree;
use std::fmt;
use std::io::{self, BufWriter, Write};

/// Marker printed for the root.
const ROOT_MARKER: &str = "[R]";

/// Returns the textual drawing of `tree`.
///
/// # Example
/// ```
/// let tree = ukkonen::build_suffix_tree("ab");
/// assert_eq!(ukkonen::render::to_text(&tree), "[R]\n├─ ab$\n├─ b$\n└─ $\n");
/// ```
pub fn to_text(tree: &SuffixTree) -> String {
    render(tree, false)
}

/// Returns the textual drawing of `tree`, with every internal node annotated
/// by the path label of its suffix link target.
pub fn to_text_with_links(tree: &SuffixTree) -> String {
    render(tree, true)
}

/// Writes the drawing of `tree` to `writer`.
///
/// # Errors
/// Returns an I/O error if writing fails.
pub fn write_text<W: Write>(writer: W, tree: &SuffixTree, show_links: bool) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    writer.write_all(render(tree, show_links).as_bytes())?;
    writer.flush()
}

fn render(tree: &SuffixTree, show_links: bool) -> String {
    // Recursive helper appending a node and its subtree
    fn render_node(
        tree: &SuffixTree,
        out: &mut String,
        index: NodeIndex,
        prefix: &str,
        is_last: bool,
        show_links: bool,
    ) {
        let node = &tree[index];
        let connector = if is_last { "└─ " } else { "├─ " };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&tree.label_of(index));

        if show_links && let Some(link) = node.suffix_link() {
            out.push_str(" -> ");
            if tree[link].is_root() {
                out.push_str(ROOT_MARKER);
            } else {
                out.push_str(&tree.path_label(link));
            }
        }
        out.push('\n');

        let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
        let num_children = node.num_children();
        for (i, child) in tree.children_of(index).enumerate() {
            render_node(tree, out, child, &child_prefix, i + 1 == num_children, show_links);
        }
    }

    let mut out = String::with_capacity(4 * tree.num_nodes() + tree.len());
    out.push_str(ROOT_MARKER);
    out.push('\n');

    let num_children = tree.root().num_children();
    for (i, child) in tree.children_of(tree.root_index()).enumerate() {
        render_node(tree, &mut out, child, "", i + 1 == num_children, show_links);
    }
    out
}

impl fmt::Display for SuffixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_text(self))
    }
}
