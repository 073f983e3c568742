use std::cmp::Ordering;

/// Find the greatest element of a slice.
///
/// Returns `None` for an empty slice. When several elements tie for the
/// maximum, the first of them is returned.
///
/// # Examples
///
/// ```
/// use array_utils::find_max;
///
/// assert_eq!(find_max(&[1, 5, 3, 9, 2]), Some(&9));
/// assert_eq!(find_max(&["a", "z", "m"]), Some(&"z"));
/// assert_eq!(find_max::<i32>(&[]), None);
/// ```
pub fn find_max<T: Ord>(items: &[T]) -> Option<&T> {
    find_max_by(items, T::cmp)
}

/// Find the least element of a slice.
///
/// Returns `None` for an empty slice. Ties resolve to the first occurrence.
///
/// # Examples
///
/// ```
/// use array_utils::find_min;
///
/// assert_eq!(find_min(&[1, 5, 3, 9, 2]), Some(&1));
/// assert_eq!(find_min::<i32>(&[]), None);
/// ```
pub fn find_min<T: Ord>(items: &[T]) -> Option<&T> {
    find_min_by(items, T::cmp)
}

/// [`find_max`] with a caller-supplied ordering.
///
/// Useful for element types without a total order:
///
/// ```
/// use array_utils::find_max_by;
///
/// let readings = [2.5_f64, 7.25, -1.0];
/// assert_eq!(find_max_by(&readings, f64::total_cmp), Some(&7.25));
/// ```
pub fn find_max_by<T, F>(items: &[T], mut compare: F) -> Option<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    items.iter().reduce(|best, item| match compare(item, best) {
        Ordering::Greater => item,
        _ => best,
    })
}

/// [`find_min`] with a caller-supplied ordering.
pub fn find_min_by<T, F>(items: &[T], mut compare: F) -> Option<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    items.iter().reduce(|best, item| match compare(item, best) {
        Ordering::Less => item,
        _ => best,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_max_integers() {
        assert_eq!(find_max(&[1, 5, 3, 9, 2]), Some(&9));
        assert_eq!(find_max(&[-4, -2, -8]), Some(&-2));
        assert_eq!(find_max(&[7]), Some(&7));
    }

    #[test]
    fn test_find_max_strings() {
        assert_eq!(find_max(&["a", "z", "m"]), Some(&"z"));
    }

    #[test]
    fn test_find_min_integers() {
        assert_eq!(find_min(&[1, 5, 3, 9, 2]), Some(&1));
        assert_eq!(find_min(&["a", "z", "m"]), Some(&"a"));
    }

    #[test]
    fn test_empty_is_absent() {
        let empty: [u8; 0] = [];
        assert_eq!(find_max(&empty), None);
        assert_eq!(find_min(&empty), None);

        let no_words: Vec<String> = Vec::new();
        assert_eq!(find_max(&no_words), None);
        assert_eq!(find_min(&no_words), None);
    }

    #[test]
    fn test_ties_return_first_occurrence() {
        let values = [3, 9, 1, 9, 1];
        let max = find_max(&values).unwrap();
        let min = find_min(&values).unwrap();
        assert!(std::ptr::eq(max, &values[1]));
        assert!(std::ptr::eq(min, &values[2]));
    }

    #[test]
    fn test_by_variants_handle_floats() {
        let readings = [2.5_f64, 7.25, -1.0, 7.25];
        assert_eq!(find_max_by(&readings, f64::total_cmp), Some(&7.25));
        assert_eq!(find_min_by(&readings, f64::total_cmp), Some(&-1.0));
        assert!(std::ptr::eq(
            find_max_by(&readings, f64::total_cmp).unwrap(),
            &readings[1]
        ));
    }

    #[test]
    fn test_by_variants_reverse_order() {
        let values = [4, 1, 8];
        assert_eq!(find_max_by(&values, |a, b| b.cmp(a)), Some(&1));
        assert_eq!(find_min_by(&values, |a, b| b.cmp(a)), Some(&8));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the maximum bounds every element and is one of them.
            #[test]
            fn max_bounds_all_elements(values in prop::collection::vec(any::<i32>(), 1..64)) {
                let max = find_max(&values).unwrap();
                prop_assert!(values.iter().all(|v| v <= max));
                prop_assert!(values.contains(max));
            }

            /// Property: the minimum is bounded by every element and is one of them.
            #[test]
            fn min_bounded_by_all_elements(values in prop::collection::vec(any::<i32>(), 1..64)) {
                let min = find_min(&values).unwrap();
                prop_assert!(values.iter().all(|v| v >= min));
                prop_assert!(values.contains(min));
            }

            /// Property: the returned reference is the first qualifying position.
            #[test]
            fn max_is_first_occurrence(values in prop::collection::vec(0u8..4, 1..32)) {
                let max = find_max(&values).unwrap();
                let first = values.iter().position(|v| v == max).unwrap();
                prop_assert!(std::ptr::eq(max, &values[first]));
            }
        }
    }
}
