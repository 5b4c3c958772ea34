//! The public queue facade.

use std::sync::Arc;

use crate::error::{ClosedError, ConfigError};
use crate::handle::CartHandle;
use crate::inner::Inner;
use crate::types::{QueueConfig, SlotId};

/// A bounded, slot-batching multi-producer/multi-consumer queue.
///
/// Producers [`enqueue`](SlottedCartQueue::enqueue) one value at a time into a
/// slot of their choosing; once a slot accumulates `capacity` values they are
/// promoted together into a *cart* that a consumer receives whole from
/// [`dequeue`](SlottedCartQueue::dequeue). The queue holds at most `carts`
/// carts in flight (empty, filling, or full) at any time, which is the
/// backpressure mechanism: a producer starting a new slot's batch blocks
/// until a cart is available.
///
/// Cloning a `SlottedCartQueue` is cheap and shares the same underlying
/// queue — all clones (and every [`CartHandle`] in flight) refer to the same
/// `Arc`-held state.
pub struct SlottedCartQueue<T> {
    inner: Arc<Inner<T>>,
}

impl<T> SlottedCartQueue<T> {
    /// Constructs a new queue.
    ///
    /// Fails with [`ConfigError`] if `config.capacity == 0` (a cart must hold
    /// at least one value) or `config.carts < config.slots` (fewer carts than
    /// slots is a deadlock configuration: every slot might need its own cart
    /// reservation to make progress).
    pub fn new(config: QueueConfig) -> Result<Self, ConfigError> {
        Ok(SlottedCartQueue {
            inner: Inner::new(config)?,
        })
    }

    /// Number of slots this queue was constructed with.
    pub fn slots(&self) -> usize {
        self.inner.slots()
    }

    /// Total in-flight cart capacity this queue was constructed with.
    pub fn carts(&self) -> usize {
        self.inner.carts()
    }

    /// Maximum values per cart this queue was constructed with.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Appends `value` to `slot`'s in-progress cart, blocking the calling
    /// thread if the slot needs a fresh cart reservation and none is
    /// available.
    ///
    /// Fails with [`ClosedError`] if the queue is closed, either already at
    /// the time of the call or discovered after waking from a wait for an
    /// empty cart. On failure `value` is dropped, not returned.
    ///
    /// # Panics
    ///
    /// Panics if `slot.0 >= self.slots()`.
    pub fn enqueue(&self, slot: SlotId, value: T) -> Result<(), ClosedError> {
        self.inner.enqueue(slot, value)
    }

    /// Blocks until a full cart is available or the queue closes.
    ///
    /// Returns a valid [`CartHandle`] carrying one cart's worth of values.
    /// Once the queue is closed and every promoted cart (including partial
    /// carts drained by [`close`](SlottedCartQueue::close)) has been
    /// delivered, every subsequent call returns an invalid handle immediately
    /// without blocking.
    pub fn dequeue(&self) -> CartHandle<T> {
        match self.inner.dequeue() {
            Some(cart) => CartHandle::from_cart(Arc::clone(&self.inner), cart),
            None => CartHandle::invalid(Arc::clone(&self.inner)),
        }
    }

    /// Marks the queue closed and drains every non-empty slot fill buffer
    /// into the full-cart buffer as a partial cart (the only time a
    /// delivered cart may have fewer than `capacity` values).
    ///
    /// Idempotent: calling this more than once has the same effect as
    /// calling it once. Wakes every thread blocked in `enqueue` or `dequeue`.
    pub fn close(&self) {
        self.inner.close();
    }
}

impl<T> Clone for SlottedCartQueue<T> {
    fn clone(&self) -> Self {
        SlottedCartQueue {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for SlottedCartQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlottedCartQueue")
            .field("slots", &self.slots())
            .field("carts", &self.carts())
            .field("capacity", &self.capacity())
            .finish()
    }
}
