//! Owned Eytzinger layout
//!
//! [`Eytzinger`] wraps the physical buffer produced by the transform and
//! only hands out read access, so the layout invariant established at
//! construction holds for the lifetime of the value. Positions accepted and
//! returned by its methods are logical (sorted) indices.

mod traversal;

pub use traversal::SortedIter;

use std::cmp::Ordering;

use crate::layout::{self, logical_index, physical_index};
use crate::search;
use crate::LayoutError;

/// A sorted collection stored in Eytzinger order.
///
/// Built once from sorted data, queried many times. Searching is read-only,
/// so a shared `&Eytzinger<T>` can be queried from many threads at once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Eytzinger<T> {
    layout: Vec<T>,
}

impl<T: Clone> Eytzinger<T> {
    /// Build a layout from a slice that is already sorted.
    ///
    /// Sortedness is not checked; see [`Eytzinger::try_from_sorted`].
    pub fn from_sorted(sorted: &[T]) -> Self {
        Self {
            layout: layout::eytzinger(sorted),
        }
    }

    /// Collect the elements back into sorted order.
    pub fn to_sorted(&self) -> Vec<T> {
        self.iter_sorted().cloned().collect()
    }
}

impl<T: Clone + PartialOrd> Eytzinger<T> {
    /// Build a layout, rejecting input that is not non-decreasing.
    ///
    /// Neighbours that do not compare (NaN) count as out of order.
    pub fn try_from_sorted(sorted: &[T]) -> Result<Self, LayoutError> {
        tracing::trace!(len = sorted.len(), "checking sortedness");
        if let Some(position) = first_unsorted(sorted) {
            tracing::debug!(position, "rejecting unsorted input");
            return Err(LayoutError::Unsorted { position });
        }
        Ok(Self::from_sorted(sorted))
    }
}

impl<T: PartialOrd> Eytzinger<T> {
    /// Adopt a buffer that is already in Eytzinger order.
    ///
    /// Every node must lie between all of its left and all of its right
    /// descendants, not just its direct children, so the check walks the
    /// buffer in logical order and requires it to be non-decreasing.
    /// The buffer is returned untouched on success.
    pub fn try_from_layout(buffer: Vec<T>) -> Result<Self, LayoutError> {
        if first_unsorted(SortedIter::new(&buffer)).is_some() {
            tracing::debug!(len = buffer.len(), "rejecting buffer that breaks the layout invariant");
            return Err(LayoutError::InvalidLayout { len: buffer.len() });
        }
        Ok(Self { layout: buffer })
    }

    /// Search for `target`; see [`search::search`].
    pub fn search(&self, target: &T) -> (usize, bool) {
        search::search(&self.layout, target)
    }

    /// Whether an element equal to `target` is present.
    pub fn contains(&self, target: &T) -> bool {
        self.search(target).1
    }
}

impl<T> Eytzinger<T> {
    /// Build a layout by moving the elements out of a sorted vector.
    ///
    /// Sortedness is not checked. Works for element types that are not
    /// `Clone`.
    pub fn from_sorted_vec(sorted: Vec<T>) -> Self {
        let n = sorted.len();
        assert!(n <= layout::MAX_LEN, "layout of {n} elements exceeds MAX_LEN");
        tracing::debug!(len = n, "building eytzinger layout from owned input");

        let mut slots: Vec<Option<T>> = sorted.into_iter().map(Some).collect();
        // Each slot's logical index is distinct, so every take() yields a value.
        let layout = (0..n)
            .filter_map(|k| slots[logical_index(n, k)].take())
            .collect();
        Self { layout }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    /// Whether the layout holds no elements.
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// The physical buffer, in Eytzinger order.
    pub fn as_slice(&self) -> &[T] {
        &self.layout
    }

    /// Give back the physical buffer.
    pub fn into_inner(self) -> Vec<T> {
        self.layout
    }

    /// Element at logical position `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        physical_index(self.len(), index).map(|k| &self.layout[k])
    }

    /// Element at logical position `index`, or [`LayoutError::OutOfRange`].
    pub fn try_get(&self, index: usize) -> Result<&T, LayoutError> {
        self.get(index).ok_or(LayoutError::OutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Smallest element.
    pub fn first(&self) -> Option<&T> {
        self.iter_sorted().next()
    }

    /// Largest element.
    pub fn last(&self) -> Option<&T> {
        // Rightmost path: slots 0, 2, 6, 14, ...
        let mut k = 0;
        let mut last = None;
        while k < self.layout.len() {
            last = Some(&self.layout[k]);
            k = layout::index::right_child(k);
        }
        last
    }

    /// Iterate in logical (sorted) order.
    pub fn iter_sorted(&self) -> SortedIter<'_, T> {
        SortedIter::new(&self.layout)
    }

    /// Search with a three-way comparator; see [`search::search_with`].
    pub fn search_with<Q, F>(&self, target: &Q, compare: F) -> (usize, bool)
    where
        Q: ?Sized,
        F: FnMut(&T, &Q) -> Ordering,
    {
        search::search_with(&self.layout, target, compare)
    }

    /// Search by extracted key; see [`search::search_by_key`].
    pub fn search_by_key<B, F>(&self, key: &B, f: F) -> (usize, bool)
    where
        B: Ord,
        F: FnMut(&T) -> B,
    {
        search::search_by_key(&self.layout, key, f)
    }
}

impl<T> Default for Eytzinger<T> {
    fn default() -> Self {
        Self { layout: Vec::new() }
    }
}

impl<T> AsRef<[T]> for Eytzinger<T> {
    fn as_ref(&self) -> &[T] {
        &self.layout
    }
}

impl<T> From<Eytzinger<T>> for Vec<T> {
    fn from(value: Eytzinger<T>) -> Self {
        value.layout
    }
}

/// Sorts the collected items, then lays them out.
impl<T: Ord> FromIterator<T> for Eytzinger<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sorted: Vec<T> = iter.into_iter().collect();
        sorted.sort();
        Self::from_sorted_vec(sorted)
    }
}

impl<'a, T> IntoIterator for &'a Eytzinger<T> {
    type Item = &'a T;
    type IntoIter = SortedIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_sorted()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Eytzinger<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.layout, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Eytzinger<T>
where
    T: serde::Deserialize<'de> + PartialOrd,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let buffer = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from_layout(buffer).map_err(serde::de::Error::custom)
    }
}

/// Position of the first element that is not `>=` its predecessor.
fn first_unsorted<'a, T, I>(items: I) -> Option<usize>
where
    T: PartialOrd + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut items = items.into_iter();
    let mut previous = items.next()?;
    for (i, item) in items.enumerate() {
        if !matches!(
            previous.partial_cmp(item),
            Some(Ordering::Less | Ordering::Equal)
        ) {
            return Some(i + 1);
        }
        previous = item;
    }
    None
}
