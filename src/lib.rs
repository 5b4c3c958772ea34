//! A bounded, slot-batching multi-producer/multi-consumer queue.
//!
//! Producers enqueue one value at a time, tagged with a slot identifier;
//! values sharing a slot accumulate into a fixed-capacity *cart*. Consumers
//! receive whole carts, not individual values. The queue bounds the total
//! number of carts in flight (empty, filling, or full) and applies
//! backpressure to producers when no cart is available to start a new
//! slot's batch. A cooperative [`SlottedCartQueue::close`] drains any
//! partially filled carts so no enqueued value is lost.
//!
//! ```
//! use scq::{CartCapacity, CartCount, QueueConfig, SlotCount, SlotId, SlottedCartQueue};
//!
//! let queue = SlottedCartQueue::<i32>::new(QueueConfig::new(
//!     SlotCount(2),
//!     CartCount(2),
//!     CartCapacity(2),
//! ))
//! .unwrap();
//!
//! queue.enqueue(SlotId(0), 1).unwrap();
//! queue.enqueue(SlotId(0), 2).unwrap(); // fills the cart, no blocking
//! queue.close();
//!
//! let cart = queue.dequeue();
//! let (slot, values) = cart.get().unwrap();
//! assert_eq!(slot, SlotId(0));
//! assert_eq!(values, &[1, 2]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

mod error;
mod handle;
mod inner;
mod queue;
mod types;

pub use error::{ClosedError, ConfigError, NoStateError};
pub use handle::CartHandle;
pub use queue::SlottedCartQueue;
pub use types::{CartCapacity, CartCount, QueueConfig, SlotCount, SlotId};
