//! Shared test-support helpers for the integration test suite: a
//! thread-safe set that verifies exactly-once delivery, and a waitable
//! counter used as a rendezvous point for "wait until N threads have
//! blocked" tests.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::{Condvar, Mutex};

/// A set of expected items; each item can be crossed off at most once.
/// Used to verify that a concurrent producer/consumer run delivers every
/// expected value exactly once, with no duplicates and nothing missing.
pub struct CrossOffList<T> {
    items: Mutex<HashSet<T>>,
}

impl<T: Eq + Hash> CrossOffList<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        CrossOffList {
            items: Mutex::new(items.into_iter().collect()),
        }
    }

    /// Returns `true` if `item` was present and has now been removed.
    pub fn cross_off(&self, item: T) -> bool {
        self.items.lock().unwrap().remove(&item)
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().unwrap().is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.items.lock().unwrap().len()
    }
}

/// A counter that lets other threads wait until it reaches at least some
/// value, used to synchronize "block N consumer threads, then close" tests
/// without a fixed sleep race.
pub struct WaitableCounter {
    count: Mutex<usize>,
    changed: Condvar,
}

impl WaitableCounter {
    pub fn new() -> Self {
        WaitableCounter {
            count: Mutex::new(0),
            changed: Condvar::new(),
        }
    }

    pub fn increment(&self) {
        let mut count = self.count.lock().unwrap();
        *count += 1;
        self.changed.notify_all();
    }

    pub fn wait_at_least(&self, value: usize) {
        let guard = self.count.lock().unwrap();
        let _guard = self
            .changed
            .wait_while(guard, |count| *count < value)
            .unwrap();
    }
}
