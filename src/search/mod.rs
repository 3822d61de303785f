//! Search over an Eytzinger layout
//!
//! Both entry points share one descent and differ only in how elements are
//! compared and how the final equality is decided. Results are reported in
//! logical (sorted) positions, never physical slots:
//!
//! - found: `(position, true)` where `position` holds an element equal to
//!   the target
//! - not found: `(insertion point, false)`, the number of elements strictly
//!   less than the target

mod descent;

use std::cmp::Ordering;

use crate::layout::logical_index;

use descent::descend;

/// Search an Eytzinger-ordered slice for `target`.
///
/// Returns `(position, found)` where `position` is a logical (sorted-order)
/// index. When several elements equal `target`, any one of them may be
/// reported.
///
/// The descent compares with `<`, so NaN never precedes anything. The final
/// equality check treats a NaN target as equal to a NaN slot.
///
/// `x` must satisfy the layout invariant; otherwise the result is
/// unspecified.
///
/// # Panics
///
/// Panics if `x` is longer than [`MAX_LEN`](crate::layout::MAX_LEN), which
/// is only possible for zero-sized element types.
///
/// ```
/// use eytzinger_search::{eytzinger, search};
///
/// let layout = eytzinger(&[10, 20, 30, 40]);
/// assert_eq!(search(&layout, &30), (2, true));
/// assert_eq!(search(&layout, &25), (2, false));
/// assert_eq!(search(&layout, &99), (4, false));
/// ```
pub fn search<T: PartialOrd>(x: &[T], target: &T) -> (usize, bool) {
    match descend(x, |probe| probe < target) {
        Some(k) => {
            let found = x[k] == *target || (is_nan(target) && is_nan(&x[k]));
            (logical_index(x.len(), k), found)
        }
        None => (x.len(), false),
    }
}

/// Search an Eytzinger-ordered slice with a three-way comparator.
///
/// `compare(element, target)` orders an element relative to the target, as
/// with [`slice::binary_search_by`] but with the target passed explicitly.
/// The slice must be in Eytzinger order under the same relation.
///
/// # Panics
///
/// Panics if `x` is longer than [`MAX_LEN`](crate::layout::MAX_LEN).
///
/// ```
/// use eytzinger_search::{eytzinger, search_with};
///
/// let layout = eytzinger(&["ab", "ad", "ca", "xy"]);
/// assert_eq!(search_with(&layout, "ac", |probe, t| (*probe).cmp(t)), (1, false));
/// assert_eq!(search_with(&layout, "ca", |probe, t| (*probe).cmp(t)), (2, true));
/// ```
pub fn search_with<T, Q, F>(x: &[T], target: &Q, mut compare: F) -> (usize, bool)
where
    Q: ?Sized,
    F: FnMut(&T, &Q) -> Ordering,
{
    match descend(x, |probe| compare(probe, target) == Ordering::Less) {
        Some(k) => {
            let found = compare(&x[k], target) == Ordering::Equal;
            (logical_index(x.len(), k), found)
        }
        None => (x.len(), false),
    }
}

/// Search an Eytzinger-ordered slice by a key extracted from each element.
///
/// The slice must be in Eytzinger order by that key. Panics under the same
/// length limit as [`search_with`].
pub fn search_by_key<T, B, F>(x: &[T], key: &B, mut f: F) -> (usize, bool)
where
    B: Ord,
    F: FnMut(&T) -> B,
{
    search_with(x, key, |probe, key| f(probe).cmp(key))
}

/// True only for values that are not equal to themselves (NaN).
#[inline]
#[allow(clippy::eq_op)]
fn is_nan<T: PartialEq>(value: &T) -> bool {
    value != value
}
