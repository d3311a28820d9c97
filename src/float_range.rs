//! `range` for floating point values.

use std::iter::FusedIterator;

use tracing::debug;

use crate::error::{Error, Result};

/// Lazy iterator over `start + k * step` for `k = 0, 1, 2, ...`.
///
/// Each value is computed from `start` directly instead of by repeatedly
/// adding `step`, so rounding error does not accumulate over long ranges.
#[derive(Debug, Clone)]
pub struct FloatRange {
    start: f64,
    stop: f64,
    step: f64,
    index: u64,
    exhausted: bool,
}

impl FloatRange {
    fn contains(&self, value: f64) -> bool {
        if self.step > 0.0 {
            value < self.stop
        } else {
            value > self.stop
        }
    }
}

impl Iterator for FloatRange {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let value = self.start + self.index as f64 * self.step;
        if !self.contains(value) {
            self.exhausted = true;
            return None;
        }
        self.index += 1;
        Some(value)
    }
}

impl FusedIterator for FloatRange {}

/// Values from `start` (inclusive) to `stop` (exclusive) spaced by `step`.
///
/// ```
/// use sequence_exercises::float_range;
///
/// let values: Vec<f64> = float_range(0.0, 1.0, 0.25).unwrap().collect();
/// assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75]);
/// ```
///
/// A negative step counts down towards `stop`. A step pointing away from
/// `stop` gives an empty range. A zero or non-finite step is rejected with
/// [`Error::InvalidStep`], non-finite bounds with [`Error::InvalidBounds`].
pub fn float_range(start: f64, stop: f64, step: f64) -> Result<FloatRange> {
    if step == 0.0 || !step.is_finite() {
        debug!(start, stop, step, "rejected float range step");
        return Err(Error::InvalidStep { step });
    }
    if !start.is_finite() || !stop.is_finite() {
        debug!(start, stop, step, "rejected float range bounds");
        return Err(Error::InvalidBounds { start, stop });
    }
    Ok(FloatRange {
        start,
        stop,
        step,
        index: 0,
        exhausted: false,
    })
}
