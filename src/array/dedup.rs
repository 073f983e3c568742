use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Remove duplicate values, keeping the first occurrence of each.
///
/// The relative order of the surviving elements is the order in which they
/// first appear in `items`.
///
/// # Examples
///
/// ```
/// use array_utils::remove_duplicates;
///
/// assert_eq!(remove_duplicates(&[1, 2, 2, 3, 3, 3, 4]), vec![1, 2, 3, 4]);
/// assert_eq!(remove_duplicates(&["a", "b", "a", "c"]), vec!["a", "b", "c"]);
/// ```
pub fn remove_duplicates<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// The value that occurs most often, or `None` for an empty slice.
///
/// Ties go to the value whose first occurrence comes earliest.
pub fn most_frequent<T>(items: &[T]) -> Option<&T>
where
    T: Eq + Hash,
{
    let counts = items.iter().fold(HashMap::new(), |mut acc, item| {
        *acc.entry(item).or_insert(0usize) += 1;
        acc
    });

    // Walk the input rather than the map so ties resolve by position.
    let mut best: Option<(&T, usize)> = None;
    for item in items {
        let count = counts[item];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((item, count));
        }
    }

    best.map(|(item, _)| item)
}
