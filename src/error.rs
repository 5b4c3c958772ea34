//! Error taxonomy surfaced to callers.

use thiserror::Error;

/// Raised synchronously by [`crate::SlottedCartQueue::new`] when the
/// constructor parameters can't form a queue that is able to make progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A cart must be able to hold at least one value.
    #[error("cart capacity must be >= 1, got 0")]
    ZeroCapacity,
    /// Fewer carts than slots means some slot could never get a reservation.
    #[error("cart count ({carts}) must be >= slot count ({slots})")]
    TooFewCarts {
        /// The configured number of carts, `K`.
        carts: usize,
        /// The configured number of slots, `S`.
        slots: usize,
    },
}

/// Raised by [`crate::SlottedCartQueue::enqueue`] when the queue is closed,
/// either on entry or after waking from a wait for an empty cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("slotted cart queue is closed")]
pub struct ClosedError;

/// Raised by [`crate::CartHandle::get`] on a handle that carries no cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cart handle has no state (queue closed with no data to deliver)")]
pub struct NoStateError;
