//! In-order traversal without a stack
//!
//! Works on 1-indexed nodes. The successor of node i is the leftmost node
//! of its right subtree when 2i+1 exists; otherwise it is found by climbing
//! past every ancestor reached through a right edge, which is exactly
//! stripping the trailing one-bits of i and the zero above them.
//! Amortized O(1) per step, O(1) state.

use crate::layout::index::{leftmost, strip_right_turns};

/// Iterator over an Eytzinger layout in logical (sorted) order.
#[derive(Debug, Clone)]
pub struct SortedIter<'a, T> {
    layout: &'a [T],
    /// Current 1-indexed node, 0 once exhausted.
    node: usize,
    remaining: usize,
}

impl<'a, T> SortedIter<'a, T> {
    pub(crate) fn new(layout: &'a [T]) -> Self {
        let node = if layout.is_empty() {
            0
        } else {
            leftmost(1, layout.len())
        };
        Self {
            layout,
            node,
            remaining: layout.len(),
        }
    }
}

impl<'a, T> Iterator for SortedIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.node == 0 {
            return None;
        }
        let n = self.layout.len();
        let item = &self.layout[self.node - 1];

        let right = 2 * self.node + 1;
        self.node = if right <= n {
            leftmost(right, n)
        } else {
            strip_right_turns(self.node)
        };
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for SortedIter<'_, T> {}

impl<T> std::iter::FusedIterator for SortedIter<'_, T> {}
