// Copyright (c) 2025 Spellbook Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Stable top-down merge sort.
//!
//! [`merge_sort`] orders `(key, value)` pairs by key alone. The value never takes
//! part in a comparison, so a list of words paired with frequencies comes out
//! alphabetical, not frequency ordered. [`merge_sort_by`] is the comparator form
//! the other entry points are built on.
//!
//! # Example
//!
//! ```
//! use spellbook_lib::data_structures::stable_sort::merge_sort;
//!
//! let sorted = merge_sort(vec![("truck", 3.3), ("banan", 1.1), ("Japan", 5123.1)]);
//! assert_eq!(sorted, vec![("Japan", 5123.1), ("banan", 1.1), ("truck", 3.3)]);
//! ```

use std::cmp::Ordering;

/// Sorts `(key, value)` pairs by key, keeping equal keys in input order.
pub fn merge_sort<K: Ord, V>(items: Vec<(K, V)>) -> Vec<(K, V)> {
    merge_sort_by(items, &mut by_key::<K, V>)
}

/// Merges two runs already sorted by key into one sorted run.
///
/// On equal keys the element from `left` comes first.
pub fn merge<K: Ord, V>(left: Vec<(K, V)>, right: Vec<(K, V)>) -> Vec<(K, V)> {
    merge_by(left, right, &mut by_key::<K, V>)
}

fn by_key<K: Ord, V>(left: &(K, V), right: &(K, V)) -> Ordering {
    left.0.cmp(&right.0)
}

/// Sorts `items` with `compare`, keeping equal elements in input order.
///
/// The input is split at `len / 2`, so the left half is the shorter one when the
/// length is odd. Halves are sorted recursively and merged.
pub fn merge_sort_by<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, compare);
    let right = merge_sort_by(right, compare);
    merge_by(left, right, compare)
}

fn merge_by<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if compare(r, l) == Ordering::Less {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }

    // At most one side still has elements
    merged.extend(left);
    merged.extend(right);
    merged
}
