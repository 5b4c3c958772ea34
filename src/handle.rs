//! The consumer-side delivery handle returned by [`crate::SlottedCartQueue::dequeue`].

use std::sync::Arc;

use crate::error::NoStateError;
use crate::inner::{FullCart, Inner};
use crate::types::SlotId;

/// A delivered cart, or the "no more data" sentinel returned once a closed
/// queue has drained.
///
/// `CartHandle` is move-only (it does not implement `Clone`); dropping a
/// valid handle returns one cart's worth of capacity to the queue's empty
/// pool. A handle that is still valid when the queue closes remains usable —
/// its drop still returns a cart — but that cart is never reused because no
/// further enqueues can succeed.
pub struct CartHandle<T> {
    queue: Arc<Inner<T>>,
    cart: Option<FullCart<T>>,
}

impl<T> CartHandle<T> {
    pub(crate) fn from_cart(queue: Arc<Inner<T>>, cart: FullCart<T>) -> Self {
        CartHandle {
            queue,
            cart: Some(cart),
        }
    }

    pub(crate) fn invalid(queue: Arc<Inner<T>>) -> Self {
        CartHandle { queue, cart: None }
    }

    /// True iff this handle carries a full cart.
    pub fn valid(&self) -> bool {
        self.cart.is_some()
    }

    /// Returns the slot and a view over the cart's values.
    ///
    /// Calling this repeatedly is fine; it does not consume the handle.
    /// Fails with [`NoStateError`] if the handle is invalid (the queue was
    /// closed with no data left to deliver).
    pub fn get(&self) -> Result<(SlotId, &[T]), NoStateError> {
        match &self.cart {
            Some((slot, values)) => Ok((*slot, values.as_slice())),
            None => Err(NoStateError),
        }
    }
}

impl<T> Drop for CartHandle<T> {
    fn drop(&mut self) {
        if self.cart.take().is_some() {
            self.queue.return_empty_cart();
        }
    }
}

impl<T> std::fmt::Debug for CartHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartHandle").field("valid", &self.valid()).finish()
    }
}
