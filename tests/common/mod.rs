#![allow(dead_code)]

use proptest::prelude::*;

/// Insertion point computed the slow way.
pub fn count_less<T: PartialOrd>(sorted: &[T], target: &T) -> usize {
    sorted.iter().filter(|value| *value < target).count()
}

/// Sorted vectors with plenty of duplicates.
pub fn sorted_with_duplicates(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-50i32..50, 0..max_len).prop_map(|mut values| {
        values.sort_unstable();
        values
    })
}

/// Sorted vectors of short lowercase words.
pub fn sorted_words(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-d]{0,3}", 0..max_len).prop_map(|mut words| {
        words.sort();
        words
    })
}

/// Little-endian bytes of a layout, for fingerprinting.
pub fn layout_bytes(layout: &[i64]) -> Vec<u8> {
    layout.iter().flat_map(|value| value.to_le_bytes()).collect()
}
