//! Every contiguous sub-slice of a slice.

use itertools::Itertools;

/// Lazily yield every non-empty contiguous sub-slice of `array`.
///
/// Sub-slices are ordered by start index, then by end index. Each one is
/// `array[i..j]` for a pair of boundaries `i < j` taken from `0..=len`, so a
/// slice of length `n` produces `n * (n + 1) / 2` items and an empty slice
/// produces none. No elements are copied.
pub fn contiguous_subarrays<T>(array: &[T]) -> impl Iterator<Item = &[T]> + Clone + '_ {
    (0..=array.len())
        .tuple_combinations()
        .map(move |(start, end)| &array[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_three_elements() {
        let subarrays: Vec<&[i32]> = contiguous_subarrays(&[1, 2, 3]).collect();
        let expected: Vec<&[i32]> = vec![
            &[1][..],
            &[1, 2],
            &[1, 2, 3],
            &[2],
            &[2, 3],
            &[3],
        ];
        assert_eq!(subarrays, expected);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let empty: [u8; 0] = [];
        assert_eq!(contiguous_subarrays(&empty).count(), 0);
    }

    #[test]
    fn test_single_element() {
        let subarrays: Vec<&[char]> = contiguous_subarrays(&['x']).collect();
        assert_eq!(subarrays, vec![&['x'][..]]);
    }

    #[test]
    fn test_is_lazy() {
        let data: Vec<u32> = (0..10_000).collect();
        let first_three: Vec<usize> = contiguous_subarrays(&data)
            .take(3)
            .map(|s| s.len())
            .collect();
        assert_eq!(first_three, vec![1, 2, 3]);
    }

    #[test]
    fn test_restartable_by_clone() {
        let data = [4, 5];
        let iter = contiguous_subarrays(&data);
        let again = iter.clone();
        assert_eq!(iter.count(), again.count());
    }

    proptest! {
        #[test]
        fn test_count_is_triangular(data in prop::collection::vec(any::<i16>(), 0..40)) {
            let n = data.len();
            prop_assert_eq!(contiguous_subarrays(&data).count(), n * (n + 1) / 2);
        }

        #[test]
        fn test_every_item_is_a_window(data in prop::collection::vec(any::<i16>(), 0..20)) {
            for sub in contiguous_subarrays(&data) {
                prop_assert!(!sub.is_empty());
                prop_assert!(data.windows(sub.len()).any(|w| w == sub));
            }
        }
    }
}
