//! Layout invariant check
//!
//! `a[2k+1] <= a[k] <= a[2k+2]` for every slot with children, checked
//! recursively from the root. Not used on the query path.

use std::cmp::Ordering;

use super::index::{left_child, right_child};

/// Report whether `seq` is in Eytzinger order under `PartialOrd`.
///
/// Empty and single-element slices are trivially valid. Pairs that do not
/// compare (NaN) are not counted as violations.
///
/// ```
/// use eytzinger_search::is_eytzinger;
///
/// assert!(is_eytzinger(&[4, 2, 6, 1, 3, 5, 7]));
/// assert!(!is_eytzinger(&[1, 2, 3, 4, 5, 6, 7]));
/// ```
pub fn is_eytzinger<T: PartialOrd>(seq: &[T]) -> bool {
    check(seq, 0, &mut |a: &T, b: &T| a < b)
}

/// Report whether `seq` is in Eytzinger order under `compare`.
pub fn is_eytzinger_by<T, F>(seq: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    check(seq, 0, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less)
}

fn check<T, F>(seq: &[T], k: usize, less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    if k >= seq.len() {
        return true;
    }
    let (left, right) = (left_child(k), right_child(k));
    if left < seq.len() && less(&seq[k], &seq[left]) {
        return false;
    }
    if right < seq.len() && less(&seq[right], &seq[k]) {
        return false;
    }
    check(seq, left, less) && check(seq, right, less)
}
