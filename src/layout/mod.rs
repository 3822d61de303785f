//! Eytzinger layout construction and validation
//!
//! The layout stores an implicit complete binary search tree in breadth-first
//! order: the root at slot 0, the children of slot k at 2k+1 and 2k+2.
//! A descent touches slots that are adjacent level by level, which keeps the
//! first few levels of every query in the same few cache lines.
//!
//! Implicit representation: no node objects, only index arithmetic.

pub mod index;
mod transform;
mod validate;

pub use index::{logical_index, physical_index, MAX_LEN};
pub use transform::eytzinger;
pub use validate::{is_eytzinger, is_eytzinger_by};
