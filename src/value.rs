//! Integer-backed values whose construction is counted.
//!
//! A [`CountedValue`] owns one `i32` length, fixed for its lifetime, and
//! exposes the square of that length. Every construction advances the
//! [`InstanceCounter`] it was built against by exactly one.
//!
//! # Overflow
//!
//! [`CountedValue::value`] uses wrapping two's-complement multiplication in
//! both debug and release builds, so `46341` squares to a negative number
//! rather than panicking. Use [`CountedValue::checked_value`] to detect it.
//!
//! # Example
//!
//! ```rust
//! use counted::{CountedValue, InstanceCounter};
//!
//! let counter = InstanceCounter::new();
//! let first = CountedValue::new(10, &counter);
//! let _second = CountedValue::new(20, &counter);
//!
//! assert_eq!(first.value(), 100);
//! assert_eq!(counter.count(), 2);
//! ```

use crate::counter::InstanceCounter;
use rayon::prelude::*;
use tracing::debug;

/// A length fixed at construction, counted by a shared [`InstanceCounter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountedValue {
    length: i32,
}

impl CountedValue {
    /// Construct a value and record it on `counter`.
    ///
    /// Every `i32` is accepted, including zero and negatives.
    pub fn new(length: i32, counter: &InstanceCounter) -> Self {
        let count = counter.increment();
        debug!(length, count, "constructed counted value");
        Self { length }
    }

    /// Construct a value against the process-wide counter.
    pub fn new_global(length: i32) -> Self {
        Self::new(length, &InstanceCounter::global())
    }

    /// Number of values constructed against the process-wide counter.
    pub fn instance_count() -> u64 {
        InstanceCounter::global().count()
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    /// Square of the length, wrapping on overflow.
    #[inline]
    pub fn value(&self) -> i32 {
        self.length.wrapping_mul(self.length)
    }

    /// Square of the length, or `None` if it does not fit in an `i32`.
    pub fn checked_value(&self) -> Option<i32> {
        self.length.checked_mul(self.length)
    }
}

/// Construct one value per length, in input order.
///
/// With `parallel` set the constructions run on the rayon pool; the counter
/// still advances by exactly `lengths.len()`.
pub fn construct_all(
    lengths: &[i32],
    counter: &InstanceCounter,
    parallel: bool,
) -> Vec<CountedValue> {
    if parallel {
        lengths
            .par_iter()
            .map(|&length| CountedValue::new(length, counter))
            .collect()
    } else {
        lengths
            .iter()
            .map(|&length| CountedValue::new(length, counter))
            .collect()
    }
}
