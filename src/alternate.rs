//! Alternating reduce: `(((a0 + a1) * a2 + a3) * a4 + ...)`.

use std::ops::{Add, Mul};

use tracing::debug;

use crate::error::{Error, Result};

/// Fold `numbers` by alternately adding and multiplying.
///
/// The first element is the starting operand. Elements at odd indices are
/// added to the running value, elements at even indices multiply it:
///
/// ```
/// use sequence_exercises::alternate_reduce;
///
/// // ((1 + 2) * 3 + 4) * 5 + 6
/// assert_eq!(alternate_reduce(&[1, 2, 3, 4, 5, 6]).unwrap(), 71);
/// ```
///
/// Returns [`Error::EmptyInput`] for an empty slice.
pub fn alternate_reduce<T>(numbers: &[T]) -> Result<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    let Some((&first, rest)) = numbers.split_first() else {
        debug!("alternate_reduce called with an empty slice");
        return Err(Error::EmptyInput);
    };

    // `rest` starts at index 1, so even offsets here are odd indices overall.
    let value = rest
        .iter()
        .enumerate()
        .fold(first, |acc, (offset, &x)| {
            if offset % 2 == 0 {
                acc + x
            } else {
                acc * x
            }
        });
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_documented_example() {
        assert_eq!(alternate_reduce(&[1, 2, 3, 4, 5, 6]).unwrap(), 71);
    }

    #[test]
    fn test_odd_length_ends_with_multiply() {
        // (2 + 3) * 4
        assert_eq!(alternate_reduce(&[2, 3, 4]).unwrap(), 20);
    }

    #[test]
    fn test_two_elements_is_sum() {
        assert_eq!(alternate_reduce(&[7, 5]).unwrap(), 12);
    }

    #[test]
    fn test_floats() {
        let result = alternate_reduce(&[0.5, 1.5, 2.0]).unwrap();
        assert!((result - 4.0_f64).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let empty: [i64; 0] = [];
        assert!(matches!(alternate_reduce(&empty), Err(Error::EmptyInput)));
    }

    proptest! {
        #[test]
        fn test_single_element_is_identity(x in any::<i64>()) {
            prop_assert_eq!(alternate_reduce(&[x]).unwrap(), x);
        }

        #[test]
        fn test_matches_explicit_loop(numbers in prop::collection::vec(-20i64..20, 1..12)) {
            let mut expected = numbers[0];
            for (i, &x) in numbers.iter().enumerate().skip(1) {
                if i % 2 == 1 {
                    expected += x;
                } else {
                    expected *= x;
                }
            }
            prop_assert_eq!(alternate_reduce(&numbers).unwrap(), expected);
        }
    }
}
