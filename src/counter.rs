//! Shared construction counter.
//!
//! An [`InstanceCounter`] is the state that all [`CountedValue`]s built
//! against it share. It is a handle over a single atomic, so clones observe
//! and advance the same count, and construction from many threads never
//! loses an increment.
//!
//! The count only ever grows. There is no decrement and no reset: a test
//! that needs a clean slate creates a fresh counter instead.
//!
//! [`CountedValue`]: crate::value::CountedValue

use once_cell::sync::Lazy;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Process-wide counter, created on first use and alive until exit.
static GLOBAL: Lazy<InstanceCounter> = Lazy::new(InstanceCounter::new);

/// Count of constructions, shared across clones.
#[derive(Debug, Clone, Default)]
pub struct InstanceCounter(Arc<AtomicU64>);

impl InstanceCounter {
    /// Create a fresh counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicU64::new(0)))
    }

    /// Handle to the process-wide counter.
    #[must_use]
    pub fn global() -> Self {
        GLOBAL.clone()
    }

    /// Current number of constructions recorded.
    #[inline]
    pub fn count(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Record one construction and return the new count.
    pub(crate) fn increment(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether two handles share the same underlying count.
    pub fn shares_with(&self, other: &InstanceCounter) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for InstanceCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}
