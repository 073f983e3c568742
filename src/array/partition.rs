use crate::errors::{Error, Result};

/// Split a slice into consecutive chunks of `size` elements.
///
/// Every chunk holds exactly `size` elements except possibly the last, which
/// holds the remainder. Concatenating the chunks in order gives back the
/// input. An empty slice yields no chunks.
///
/// # Errors
///
/// A `size` of zero cannot partition anything and is rejected with
/// [`Error::InvalidArgument`] instead of silently returning no chunks.
///
/// # Examples
///
/// ```
/// use array_utils::chunk;
///
/// let chunks = chunk(&[1, 2, 3, 4, 5], 2).unwrap();
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert!(chunk(&[1, 2, 3], 0).is_err());
/// ```
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(Error::invalid_argument(
            "size",
            "chunk size must be at least 1",
        ));
    }

    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Convert a signed chunk size into a usable one.
///
/// Anything below 1 is an [`Error::InvalidArgument`], matching [`chunk`].
pub fn chunk_size_from(raw: i64) -> Result<usize> {
    if raw < 1 {
        return Err(Error::invalid_argument(
            "size",
            format!("chunk size must be at least 1, got {}", raw),
        ));
    }

    usize::try_from(raw).map_err(|_| {
        Error::invalid_argument("size", format!("chunk size {} does not fit in memory", raw))
    })
}

/// Interleave two slices: `left[0], right[0], left[1], right[1], ...`.
///
/// When one side runs out, the rest of the other follows in order.
///
/// ```
/// use array_utils::interleave;
///
/// assert_eq!(interleave(&["a", "b"], &["1", "2", "3", "4"]), vec!["a", "1", "b", "2", "3", "4"]);
/// ```
pub fn interleave<T: Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let shared = left.len().min(right.len());

    for (l, r) in left.iter().zip(right) {
        result.push(l.clone());
        result.push(r.clone());
    }
    result.extend_from_slice(&left[shared..]);
    result.extend_from_slice(&right[shared..]);

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_chunk_even_split() {
        assert_eq!(
            chunk(&[1, 2, 3, 4, 5, 6], 2).unwrap(),
            vec![vec![1, 2], vec![3, 4], vec![5, 6]]
        );
    }

    #[test]
    fn test_chunk_with_remainder() {
        assert_eq!(
            chunk(&[1, 2, 3, 4, 5], 2).unwrap(),
            vec![vec![1, 2], vec![3, 4], vec![5]]
        );
        assert_eq!(
            chunk(&[1, 2, 3, 4, 5, 6, 7], 3).unwrap(),
            vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]
        );
    }

    #[test]
    fn test_chunk_size_larger_than_input() {
        assert_eq!(chunk(&["a", "b"], 10).unwrap(), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_chunk_empty_input() {
        let empty: [i32; 0] = [];
        assert!(chunk(&empty, 2).unwrap().is_empty());
    }

    #[test]
    fn test_chunk_zero_size_is_invalid_argument() {
        let err = chunk(&[1, 2, 3], 0).unwrap_err();
        match err {
            Error::InvalidArgument { argument, .. } => assert_eq!(argument, "size"),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_chunk_zero_size_rejected_even_for_empty_input() {
        let empty: [i32; 0] = [];
        assert!(matches!(
            chunk(&empty, 0),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_chunk_size_from() {
        assert_eq!(chunk_size_from(3).unwrap(), 3);
        assert!(matches!(
            chunk_size_from(0),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            chunk_size_from(-1),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_interleave_equal_lengths() {
        assert_eq!(interleave(&[1, 3, 5], &[2, 4, 6]), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_interleave_unequal_lengths() {
        assert_eq!(
            interleave(&["a", "b"], &["1", "2", "3", "4"]),
            vec!["a", "1", "b", "2", "3", "4"]
        );
        let none: [i32; 0] = [];
        assert_eq!(interleave(&[1, 2, 3], &none), vec![1, 2, 3]);
        assert_eq!(interleave(&none, &[1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_interleave_both_empty() {
        let empty: [i32; 0] = [];
        assert!(interleave(&empty, &empty).is_empty());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: concatenating the chunks reconstructs the input.
            #[test]
            fn chunks_reconstruct_input(
                values in prop::collection::vec(any::<i16>(), 0..128),
                size in 1usize..20
            ) {
                let chunks = chunk(&values, size).unwrap();
                let flattened: Vec<i16> = chunks.concat();
                prop_assert_eq!(flattened, values);
            }

            /// Property: all chunks but the last are full; the last is non-empty.
            #[test]
            fn chunk_lengths_respect_size(
                values in prop::collection::vec(any::<u8>(), 1..128),
                size in 1usize..20
            ) {
                let chunks = chunk(&values, size).unwrap();
                let (last, full) = chunks.split_last().unwrap();
                prop_assert!(full.iter().all(|c| c.len() == size));
                prop_assert!(!last.is_empty() && last.len() <= size);
            }

            /// Property: interleaving keeps every element of both sides.
            #[test]
            fn interleave_preserves_length(
                left in prop::collection::vec(any::<u8>(), 0..32),
                right in prop::collection::vec(any::<u8>(), 0..32)
            ) {
                prop_assert_eq!(interleave(&left, &right).len(), left.len() + right.len());
            }
        }
    }
}
