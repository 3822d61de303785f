//! # Eytzinger Layout with Branch-Minimizing Search
//!
//! Sorted data rearranged into the breadth-first order of an implicit
//! binary search tree, plus a search that walks that tree without
//! data-dependent branches.
//!
//! ## Core Algorithm
//!
//! 1. **Transform**: in-order walk of the implicit tree (children of slot k
//!    at 2k+1 and 2k+2) consuming the sorted input left to right
//! 2. **Descent**: `k = 2k + (x[k-1] < target)` for `floor(log2 n) + 1` levels
//! 3. **Recovery**: shift out the trailing one-bits of `k` and the zero
//!    above them to get the last left turn, the first element `>= target`
//! 4. **Mapping**: convert that physical slot to its logical (sorted)
//!    position in O(1)
//!
//! Result: O(log n) comparisons per query with the top levels of the tree
//! packed into a few cache lines.
//!
//! ## Usage Example
//!
//! ```
//! use eytzinger_search::{eytzinger, is_eytzinger, search};
//!
//! let sorted: Vec<u32> = (1..=15).collect();
//! let layout = eytzinger(&sorted);
//! assert_eq!(layout, [8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 7, 9, 11, 13, 15]);
//! assert!(is_eytzinger(&layout));
//!
//! assert_eq!(search(&layout, &8), (7, true));
//! assert_eq!(search(&layout, &0), (0, false));
//! assert_eq!(search(&layout, &99), (15, false));
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod layout; // Transform, validity predicate, index arithmetic
pub mod search; // Branch-minimizing descent
pub mod tree; // Owned layout wrapper

// Re-exports for convenience
pub use layout::{
    eytzinger, is_eytzinger, is_eytzinger_by, logical_index, physical_index, MAX_LEN,
};
pub use search::{search, search_by_key, search_with};
pub use tree::{Eytzinger, SortedIter};

use thiserror::Error;

/// Errors reported by the checked constructors of [`Eytzinger`].
///
/// The free functions never fail; they only require their inputs to be
/// sorted or laid out, and produce unspecified results otherwise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Input handed to a sorted constructor was out of order
    #[error("input is not sorted: element {position} is less than its predecessor")]
    Unsorted {
        /// Index of the first element smaller than the one before it
        position: usize,
    },

    /// Buffer does not satisfy the Eytzinger ordering invariant
    #[error("buffer of {len} elements is not in eytzinger order")]
    InvalidLayout {
        /// Length of the rejected buffer
        len: usize,
    },

    /// Logical index past the end of the layout
    #[error("index {index} out of range for layout of {len} elements")]
    OutOfRange {
        /// Requested logical index
        index: usize,
        /// Number of elements in the layout
        len: usize,
    },
}
