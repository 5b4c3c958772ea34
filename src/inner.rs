//! The queue coordinator's shared mutable state and blocking protocols.
//!
//! This is the mutex/condvar core that backs the queue. Everything
//! here is crate-private; [`crate::SlottedCartQueue`] is the public facade and
//! [`crate::CartHandle`] is the only other type that reaches into `Inner`.

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};

use tracing::{debug, trace};

use crate::error::{ClosedError, ConfigError};
use crate::types::{QueueConfig, SlotId};

/// One promoted cart: the slot it was filled for and its values.
pub(crate) type FullCart<T> = (SlotId, Vec<T>);

struct State<T> {
    /// Per-slot accumulator, length in `[0, capacity)` while held here.
    fill_buffers: Vec<Vec<T>>,
    /// Ready-to-deliver carts, FIFO.
    full_carts: VecDeque<FullCart<T>>,
    /// `E`: empty carts available to start a new slot's batch.
    empty_count: usize,
    /// `F`: full carts waiting for a consumer. Kept alongside
    /// `full_carts.len()` so invariant assertions are O(1) rather than
    /// reconstructing it from the deque each time.
    full_count: usize,
    closed: bool,
}

impl<T> State<T> {
    fn assert_invariants(&self, carts: usize) {
        debug_assert!(self.empty_count <= carts, "empty_count {} exceeds cart count {}", self.empty_count, carts);
        debug_assert!(self.full_count <= carts, "full_count {} exceeds cart count {}", self.full_count, carts);
        debug_assert_eq!(self.full_count, self.full_carts.len(), "full_count out of sync with full_carts");
        let in_progress = self.fill_buffers.iter().filter(|b| !b.is_empty()).count();
        debug_assert!(
            self.empty_count + self.full_count + in_progress <= carts,
            "empty_count {} + full_count {} + in_progress {} exceeds cart count {}",
            self.empty_count,
            self.full_count,
            in_progress,
            carts
        );
    }
}

pub(crate) struct Inner<T> {
    slots: usize,
    carts: usize,
    capacity: usize,
    state: Mutex<State<T>>,
    /// Signalled when an empty cart becomes available, or the queue closes.
    empty_cart_available: Condvar,
    /// Signalled when a full cart becomes available, or the queue closes.
    full_cart_available: Condvar,
}

impl<T> Inner<T> {
    pub(crate) fn new(config: QueueConfig) -> Result<Arc<Self>, ConfigError> {
        if config.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if config.carts < config.slots {
            return Err(ConfigError::TooFewCarts {
                carts: config.carts,
                slots: config.slots,
            });
        }

        let fill_buffers = (0..config.slots).map(|_| Vec::new()).collect();
        Ok(Arc::new(Inner {
            slots: config.slots,
            carts: config.carts,
            capacity: config.capacity,
            state: Mutex::new(State {
                fill_buffers,
                full_carts: VecDeque::new(),
                empty_count: config.carts,
                full_count: 0,
                closed: false,
            }),
            empty_cart_available: Condvar::new(),
            full_cart_available: Condvar::new(),
        }))
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn slots(&self) -> usize {
        self.slots
    }

    pub(crate) fn carts(&self) -> usize {
        self.carts
    }

    /// Moves a full slot's fill buffer into the full-cart buffer. Caller must
    /// hold the lock and have already verified the buffer is non-empty.
    fn promote(state: &mut State<T>, slot: SlotId) {
        let buffer = std::mem::take(&mut state.fill_buffers[slot.0]);
        debug_assert!(!buffer.is_empty(), "promoting an empty fill buffer");
        state.full_carts.push_back((slot, buffer));
        state.full_count += 1;
    }

    pub(crate) fn enqueue(&self, slot: SlotId, value: T) -> Result<(), ClosedError> {
        let promoted_into_empty_full_buffer;

        {
            let mut state = self.state.lock().expect("slotted cart queue mutex poisoned");

            if !state.closed && state.fill_buffers[slot.0].is_empty() {
                trace!(slot = slot.0, "enqueue waiting for an empty cart");
                state = self
                    .empty_cart_available
                    .wait_while(state, |s| s.empty_count == 0 && !s.closed)
                    .expect("slotted cart queue mutex poisoned");

                if state.closed {
                    return Err(ClosedError);
                }

                state.empty_count -= 1;
                state.assert_invariants(self.carts);
            }

            // A concurrent `close()` between the check above and here is
            // impossible: we never released the lock in between.
            if state.closed {
                return Err(ClosedError);
            }

            state.fill_buffers[slot.0].push(value);
            promoted_into_empty_full_buffer = if state.fill_buffers[slot.0].len() == self.capacity {
                let was_empty = state.full_count == 0;
                Self::promote(&mut state, slot);
                state.assert_invariants(self.carts);
                debug!(slot = slot.0, "promoted fill buffer to a full cart");
                was_empty
            } else {
                false
            };
        }

        if promoted_into_empty_full_buffer {
            self.full_cart_available.notify_one();
        }

        Ok(())
    }

    /// Returns `None` for an invalid handle (closed with nothing left to
    /// deliver), `Some(cart)` otherwise.
    pub(crate) fn dequeue(&self) -> Option<FullCart<T>> {
        let mut state = self.state.lock().expect("slotted cart queue mutex poisoned");

        trace!("dequeue waiting for a full cart");
        state = self
            .full_cart_available
            .wait_while(state, |s| s.full_count == 0 && !s.closed)
            .expect("slotted cart queue mutex poisoned");

        if state.full_count == 0 {
            return None;
        }

        let cart = state.full_carts.pop_front().expect("full_count says data is present");
        state.full_count -= 1;
        state.assert_invariants(self.carts);
        Some(cart)
    }

    pub(crate) fn close(&self) {
        {
            let mut state = self.state.lock().expect("slotted cart queue mutex poisoned");
            state.closed = true;

            for slot in 0..self.slots {
                if !state.fill_buffers[slot].is_empty() {
                    Self::promote(&mut state, SlotId(slot));
                }
            }
            state.assert_invariants(self.carts);
        }

        debug!("queue closed, notifying all waiters");
        self.empty_cart_available.notify_all();
        self.full_cart_available.notify_all();
    }

    /// Returns one cart's worth of capacity to the empty pool. Called from
    /// [`crate::CartHandle`]'s `Drop` impl.
    pub(crate) fn return_empty_cart(&self) {
        let empty_pool_was_empty;
        {
            let mut state = self.state.lock().expect("slotted cart queue mutex poisoned");
            empty_pool_was_empty = state.empty_count == 0;
            state.empty_count += 1;
            state.assert_invariants(self.carts);
        }

        if empty_pool_was_empty {
            self.empty_cart_available.notify_one();
        }
    }
}
