//! Process-wide live-instance counters.
//!
//! Every container kind owns one [`LiveCounter`] static. A counter starts at
//! 0, goes up once per successfully constructed (or cloned) instance and
//! down once when that instance is dropped. The counters are diagnostics
//! only: nothing in the crate reads them to make decisions.
//!
//! The value is kept in an atomic so the counter can live in a `static`.
//! All accesses use relaxed ordering and no cross-thread consistency is
//! promised.
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
pub struct LiveCounter {
    count: AtomicUsize,
}

impl LiveCounter {
    pub const fn new() -> Self {
        Self {
            count: AtomicUsize::new(0),
        }
    }

    pub fn acquire(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Decrement the counter, saturating at 0.
    pub fn release(&self) {
        let _ = self
            .count
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1));
    }

    pub fn get(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}

impl Default for LiveCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Live [`VectorULong`](crate::math::VectorULong) instances.
pub static VECTOR_COUNT: LiveCounter = LiveCounter::new();

/// Live [`MatrixULong`](crate::math::MatrixULong) instances.
pub static MATRIX_COUNT: LiveCounter = LiveCounter::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero_and_tracks_acquire_release() {
        let counter = LiveCounter::new();
        assert_eq!(counter.get(), 0);
        counter.acquire();
        counter.acquire();
        assert_eq!(counter.get(), 2);
        counter.release();
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn release_never_goes_below_zero() {
        let counter = LiveCounter::default();
        counter.release();
        assert_eq!(counter.get(), 0);
    }
}
