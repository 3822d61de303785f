//! Sorted → Eytzinger transform
//!
//! In-order walk of the implicit tree: the left subtree of slot k is
//! filled first, then k itself, then the right subtree. Consuming the
//! sorted source left to right during that walk places every element
//! after all smaller ones in its left subtree and before all larger ones
//! in its right subtree.

use super::index::{left_child, right_child, MAX_LEN};

/// Rearrange a sorted slice into Eytzinger order.
///
/// `sorted` must be non-decreasing. Unsorted input still produces a
/// permutation of the input, just not one that satisfies the layout
/// invariant.
///
/// The result is a freshly allocated buffer of exactly `sorted.len()`
/// elements.
///
/// # Panics
///
/// Panics if `sorted` is longer than [`MAX_LEN`], which is only possible
/// for zero-sized element types.
///
/// ```
/// use eytzinger_search::eytzinger;
///
/// let layout = eytzinger(&[1, 2, 3, 4, 5, 6, 7]);
/// assert_eq!(layout, [4, 2, 6, 1, 3, 5, 7]);
/// ```
pub fn eytzinger<T: Clone>(sorted: &[T]) -> Vec<T> {
    assert!(
        sorted.len() <= MAX_LEN,
        "layout of {} elements exceeds MAX_LEN",
        sorted.len()
    );
    tracing::debug!(len = sorted.len(), "building eytzinger layout");

    let mut layout = sorted.to_vec();
    let consumed = place(sorted, &mut layout, 0, 0);
    debug_assert_eq!(consumed, sorted.len());
    layout
}

/// Fill the subtree rooted at slot `k`, starting at `cursor` in the source.
/// Returns the first source position not yet consumed.
///
/// Recursion depth is the tree height, bounded by `usize::BITS`.
fn place<T: Clone>(sorted: &[T], layout: &mut [T], mut cursor: usize, k: usize) -> usize {
    if k >= layout.len() {
        return cursor;
    }
    cursor = place(sorted, layout, cursor, left_child(k));
    layout[k].clone_from(&sorted[cursor]);
    cursor += 1;
    place(sorted, layout, cursor, right_child(k))
}
