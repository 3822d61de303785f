//! Branch-minimizing descent
//!
//! 1-indexed bookkeeping: node i lives at `x[i - 1]`, its children are
//! 2i and 2i+1. Each step appends one bit to `k` (0 = left, 1 = right), so
//! after the loop `k` spells out the whole path.

use crate::layout::index::{strip_right_turns, MAX_LEN};

/// Descend `x` going right while `precedes(probe)` holds.
///
/// Returns the physical slot of the last node where the descent turned
/// left, i.e. the first element on the path that does not precede the
/// target. `None` means every visited node preceded it.
///
/// The loop body is `k = 2k + bit`, which compiles to arithmetic rather
/// than a data-dependent branch.
///
/// Panics if `x` is longer than [`MAX_LEN`], where `2k + 1` could overflow.
#[inline]
pub(crate) fn descend<T, F>(x: &[T], mut precedes: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    let n = x.len();
    assert!(n <= MAX_LEN, "layout of {n} elements exceeds MAX_LEN");
    let mut k = 1usize;
    while k <= n {
        k = 2 * k + usize::from(precedes(&x[k - 1]));
    }
    strip_right_turns(k).checked_sub(1)
}
