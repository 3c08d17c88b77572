use std::collections::HashSet;
use std::hash::Hash;

/// Deduplicates a slice while keeping the first occurrence of each element
/// in its original position.
pub fn dedup_preserving_order<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}
