//! Spans of the text to be walked down the tree.

/// A `(start, length)` span of the text describing a walk from some node.
///
/// Built while climbing from the last position towards a node with a suffix
/// link: every skipped edge is prepended, so the path always ends where the
/// climb started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Path {
    start: usize,
    length: usize,
}

impl Path {
    pub(crate) fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    pub(crate) fn start(&self) -> usize {
        self.start
    }

    pub(crate) fn length(&self) -> usize {
        self.length
    }

    /// Extends the path by `len` symbols at its front.
    ///
    /// # Panics
    /// Panics if the path would start before the text.
    pub(crate) fn prepend(&mut self, len: usize) {
        assert!(len <= self.start, "Path cannot start before the text");
        self.start -= len;
        self.length += len;
    }
}
