//! Implicit tree arithmetic
//!
//! Slot k (0-indexed) has children at 2k+1 and 2k+2.
//! Equivalently, in 1-indexed terms node i has children 2i and 2i+1,
//! which is the form the search descent works in.
//!
//! No node objects exist: the mapping between physical slots and
//! logical (sorted) positions is recomputed from `n` and the slot alone.

/// Longest layout the index arithmetic supports.
///
/// Every child index computed from a slot `k < n` is at most `2n`, and the
/// 1-indexed descent reaches `2n + 1`; both fit in `usize` up to this length.
/// Only slices of zero-sized types can be longer.
pub const MAX_LEN: usize = usize::MAX / 2;

/// Left child of slot `k`.
#[inline]
pub fn left_child(k: usize) -> usize {
    2 * k + 1
}

/// Right child of slot `k`.
#[inline]
pub fn right_child(k: usize) -> usize {
    2 * k + 2
}

/// Parent of slot `k`, or `None` for the root.
#[inline]
pub fn parent(k: usize) -> Option<usize> {
    k.checked_sub(1).map(|k| k / 2)
}

/// Number of levels in a layout of `n` elements (`floor(log2 n) + 1`).
#[inline]
pub fn height(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

/// Logical (sorted-order) position of physical slot `k` in a layout of `n`
/// elements.
///
/// Returns `n` when `k >= n`, which is also the insertion point past the
/// last element.
///
/// # How it works
///
/// Node `i = k + 1` sits at depth `d = floor(log2 i)` with offset
/// `p = i - 2^d` inside its level. In a perfect tree of `h` levels its
/// in-order rank is `(2p + 1) * 2^(h-1-d) - 1`. The real tree only has
/// `m` nodes on its last level; every missing leaf that would precede the
/// node in order is subtracted. Missing leaves have even perfect ranks
/// `2q` with `q >= m`, so `max(0, ceil(r / 2) - m)` of them come first.
pub fn logical_index(n: usize, k: usize) -> usize {
    if k >= n {
        return n;
    }
    let i = k + 1;
    let h = height(n);
    let d = height(i) - 1;
    let p = i - (1 << d);

    // (2p + 1) < 2^(d+1), so the shifted value stays below 2^h.
    let perfect = ((2 * p + 1) << (h - 1 - d)) - 1;
    let last_level = n - (1 << (h - 1)) + 1;
    let missing = ((perfect + 1) / 2).saturating_sub(last_level);
    perfect - missing
}

/// Physical slot holding logical position `i` in a layout of `n` elements,
/// or `None` when `i >= n`.
///
/// Walks down from the root comparing ranks, so it costs O(log n).
pub fn physical_index(n: usize, i: usize) -> Option<usize> {
    if i >= n {
        return None;
    }
    let mut k = 0;
    while k < n {
        let rank = logical_index(n, k);
        match i.cmp(&rank) {
            std::cmp::Ordering::Equal => return Some(k),
            std::cmp::Ordering::Less => k = left_child(k),
            std::cmp::Ordering::Greater => k = right_child(k),
        }
    }
    None
}

/// Strip the trailing run of one-bits and the zero-bit above it.
///
/// Applied to a 1-indexed descent position this yields the last ancestor
/// reached by going left, or 0 when the descent never went left. Applied to
/// a node that has no right subtree it yields the in-order successor.
#[inline]
pub(crate) fn strip_right_turns(k: usize) -> usize {
    k.checked_shr(k.trailing_ones() + 1).unwrap_or(0)
}

/// 1-indexed leftmost descendant of node `i` in a layout of `n` elements.
#[inline]
pub(crate) fn leftmost(mut i: usize, n: usize) -> usize {
    while i <= n / 2 {
        i *= 2;
    }
    i
}

/// A slice of unit values one element longer than [`MAX_LEN`].
#[cfg(test)]
pub(crate) fn oversized_units() -> &'static [()] {
    // SAFETY: zero-sized elements occupy no memory, so a dangling aligned
    // pointer is valid for any length.
    let start = std::ptr::NonNull::<()>::dangling().as_ptr();
    unsafe { std::slice::from_raw_parts(start, MAX_LEN + 1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Logical rank of every slot computed by an explicit in-order walk.
    fn ranks_by_walk(n: usize) -> Vec<usize> {
        fn walk(k: usize, n: usize, next: &mut usize, ranks: &mut [usize]) {
            if k >= n {
                return;
            }
            walk(left_child(k), n, next, ranks);
            ranks[k] = *next;
            *next += 1;
            walk(right_child(k), n, next, ranks);
        }
        let mut ranks = vec![0; n];
        walk(0, n, &mut 0, &mut ranks);
        ranks
    }

    #[test]
    fn child_and_parent_are_inverse() {
        for k in 0..100 {
            assert_eq!(parent(left_child(k)), Some(k));
            assert_eq!(parent(right_child(k)), Some(k));
        }
        assert_eq!(parent(0), None);
    }

    #[test]
    fn height_matches_level_count() {
        assert_eq!(height(0), 0);
        assert_eq!(height(1), 1);
        assert_eq!(height(2), 2);
        assert_eq!(height(3), 2);
        assert_eq!(height(7), 3);
        assert_eq!(height(8), 4);
        assert_eq!(height(15), 4);
    }

    #[test]
    fn logical_index_matches_in_order_walk() {
        for n in 0..300 {
            let expected = ranks_by_walk(n);
            for (k, &rank) in expected.iter().enumerate() {
                assert_eq!(logical_index(n, k), rank, "n={n} k={k}");
            }
            assert_eq!(logical_index(n, n), n);
        }
    }

    #[test]
    fn physical_index_inverts_logical_index() {
        for n in 0..200 {
            for k in 0..n {
                assert_eq!(physical_index(n, logical_index(n, k)), Some(k));
            }
            assert_eq!(physical_index(n, n), None);
        }
    }

    #[test]
    fn perfect_tree_root_is_median() {
        assert_eq!(logical_index(15, 0), 7);
        assert_eq!(logical_index(15, 7), 0);
        assert_eq!(logical_index(15, 14), 14);
    }

    #[test]
    fn strip_right_turns_drops_trailing_ones() {
        assert_eq!(strip_right_turns(0b1000), 0b100);
        assert_eq!(strip_right_turns(0b1011), 0b1);
        assert_eq!(strip_right_turns(0b1111), 0);
        assert_eq!(strip_right_turns(usize::MAX), 0);
    }

    #[test]
    fn leftmost_follows_left_children() {
        assert_eq!(leftmost(1, 15), 8);
        assert_eq!(leftmost(1, 7), 4);
        assert_eq!(leftmost(3, 15), 12);
        assert_eq!(leftmost(1, 1), 1);
        assert_eq!(leftmost(7, 15), 14);
    }
}
