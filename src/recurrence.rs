//! Second-order linear recurrences: `s(n) = p * s(n-1) + q * s(n-2) + r`.
//!
//! Fibonacci, Pell and Lucas numbers are all instances with different
//! coefficients and seeds. The generated sequences are infinite in principle;
//! the iterator yields every term that fits in the term type and then ends.

use std::iter::FusedIterator;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};

/// A number that can be a term of a [`SecondOrder`] sequence.
pub trait Term: Copy {
    /// `p * prev + q * prev2 + r`, or `None` once the result leaves the range
    /// of the type.
    fn next_term(p: Self, q: Self, r: Self, prev: Self, prev2: Self) -> Option<Self>;
}

// Unsigned partial sums only grow, so checked arithmetic is exact.
macro_rules! impl_unsigned_term {
    ($($t:ty),*) => {
        $(
            impl Term for $t {
                fn next_term(p: Self, q: Self, r: Self, prev: Self, prev2: Self) -> Option<Self> {
                    p.checked_mul(prev)?
                        .checked_add(q.checked_mul(prev2)?)?
                        .checked_add(r)
                }
            }
        )*
    };
}

// Products of two 64-bit values always fit in i128. A sum that leaves i128
// is far outside every 64-bit range, so a failed checked add is an overflow.
macro_rules! impl_widened_term {
    ($($t:ty),*) => {
        $(
            impl Term for $t {
                fn next_term(p: Self, q: Self, r: Self, prev: Self, prev2: Self) -> Option<Self> {
                    let next = (p as i128 * prev as i128)
                        .checked_add(q as i128 * prev2 as i128)?
                        .checked_add(r as i128)?;
                    <$t>::try_from(next).ok()
                }
            }
        )*
    };
}

impl Term for i128 {
    /// Each product must fit in `i128`; the sum may overflow in between as
    /// long as the wraps cancel out.
    fn next_term(p: Self, q: Self, r: Self, prev: Self, prev2: Self) -> Option<Self> {
        let mut total: i128 = 0;
        let mut wraps = 0i32;
        for part in [p.checked_mul(prev)?, q.checked_mul(prev2)?, r] {
            let (sum, overflowed) = total.overflowing_add(part);
            if overflowed {
                wraps += part.signum() as i32;
            }
            total = sum;
        }
        (wraps == 0).then_some(total)
    }
}

macro_rules! impl_float_term {
    ($($t:ty),*) => {
        $(
            impl Term for $t {
                fn next_term(p: Self, q: Self, r: Self, prev: Self, prev2: Self) -> Option<Self> {
                    let next = p * prev + q * prev2 + r;
                    next.is_finite().then_some(next)
                }
            }
        )*
    };
}

impl_unsigned_term!(u8, u16, u32, u64, u128, usize);
impl_widened_term!(i8, i16, i32, i64, isize);
impl_float_term!(f32, f64);

/// Coefficients and seeds of a recurrence.
///
/// Deserializes from TOML like:
///
/// ```toml
/// p = 2
/// q = 1
/// r = 0
/// initial = [0, 1]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recurrence<T> {
    pub p: T,
    pub q: T,
    pub r: T,
    pub initial: (T, T),
}

impl<T: Term> Recurrence<T> {
    pub fn new(p: T, q: T, r: T, initial: (T, T)) -> Self {
        Recurrence { p, q, r, initial }
    }

    /// Iterate the sequence from `s0`.
    pub fn terms(&self) -> SecondOrder<T> {
        SecondOrder {
            recurrence: *self,
            current: Some(self.initial.0),
            upcoming: Some(self.initial.1),
            index: 0,
        }
    }

    /// The term at 0-based `index`.
    ///
    /// Returns [`Error::Overflow`] if the sequence leaves the term type
    /// before reaching it.
    pub fn nth_term(&self, index: usize) -> Result<T> {
        self.terms().nth(index).ok_or(Error::Overflow { index })
    }
}

impl<T: Term + DeserializeOwned> Recurrence<T> {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

/// Lazy iterator over the terms of a [`Recurrence`].
///
/// Holds the next two terms so that the last representable term is still
/// yielded when the one after it would overflow.
#[derive(Debug, Clone)]
pub struct SecondOrder<T> {
    recurrence: Recurrence<T>,
    current: Option<T>,
    upcoming: Option<T>,
    index: usize,
}

impl<T: Term> Iterator for SecondOrder<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        if let Some(upcoming) = self.upcoming.take() {
            let Recurrence { p, q, r, .. } = self.recurrence;
            self.upcoming = T::next_term(p, q, r, upcoming, current);
            if self.upcoming.is_none() {
                trace!(index = self.index + 2, "recurrence left the range of its term type");
            }
            self.current = Some(upcoming);
        }
        self.index += 1;
        Some(current)
    }
}

impl<T: Term> FusedIterator for SecondOrder<T> {}

/// Terms of `s(n) = p * s(n-1) + q * s(n-2) + r` starting at
/// `initial_values.0, initial_values.1`.
pub fn recurrence_sequence<T: Term>(p: T, q: T, r: T, initial_values: (T, T)) -> SecondOrder<T> {
    Recurrence::new(p, q, r, initial_values).terms()
}

/// 0, 1, 1, 2, 3, 5, 8, ...
pub fn fibonacci<T: Term + From<u8>>() -> SecondOrder<T> {
    let (zero, one) = (T::from(0u8), T::from(1u8));
    recurrence_sequence(one, one, zero, (zero, one))
}

/// 0, 1, 2, 5, 12, 29, ...
pub fn pell<T: Term + From<u8>>() -> SecondOrder<T> {
    let (zero, one, two) = (T::from(0u8), T::from(1u8), T::from(2u8));
    recurrence_sequence(two, one, zero, (zero, one))
}

/// 2, 1, 3, 4, 7, 11, ...
pub fn lucas<T: Term + From<u8>>() -> SecondOrder<T> {
    let (zero, one, two) = (T::from(0u8), T::from(1u8), T::from(2u8));
    recurrence_sequence(one, one, zero, (two, one))
}
