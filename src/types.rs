//! Small value types used at the public construction and delivery surface.

/// A producer-chosen batching bucket in `[0, slots)`.
///
/// Values enqueued to the same slot batch together into the same cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(pub usize);

impl From<usize> for SlotId {
    fn from(id: usize) -> Self {
        SlotId(id)
    }
}

/// Number of distinct slots a queue accepts, wrapped so it can't be
/// transposed with [`CartCount`] or [`CartCapacity`] at a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCount(pub usize);

/// Total number of carts (in-flight capacity) a queue is allowed to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartCount(pub usize);

/// Maximum number of values a single cart may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartCapacity(pub usize);

/// Construction parameters for a [`crate::SlottedCartQueue`].
///
/// Can be built either as a record literal (`QueueConfig { slots, carts,
/// capacity }`) or from the individual newtypes via [`QueueConfig::new`],
/// whichever a call site finds harder to transpose by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    /// Number of distinct slots, `S`.
    pub slots: usize,
    /// Total in-flight cart capacity, `K`.
    pub carts: usize,
    /// Maximum values per cart, `C`.
    pub capacity: usize,
}

impl QueueConfig {
    /// Builds a [`QueueConfig`] from the individually-typed constructor
    /// parameters, so positional arguments can't be confused with each other.
    pub fn new(slots: SlotCount, carts: CartCount, capacity: CartCapacity) -> Self {
        QueueConfig {
            slots: slots.0,
            carts: carts.0,
            capacity: capacity.0,
        }
    }
}
