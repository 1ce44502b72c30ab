//! FIFO queue primitives with interchangeable backings.
//!
//! The queue contract is split into [`QueueBase`], [`QueueWriter`], and [`QueueReader`];
//! the predicate-driven bulk operations ([`QueueBulkOps`]) are implemented once on top of
//! those primitives and work against any backing. Two backings are provided:
//! a growable circular buffer ([`RingQueue`]) and a singly linked chain ([`LinkedQueue`]).

mod linked_queue;
mod queue_error;
mod queue_size;
mod ring_queue;
mod traits;

pub use linked_queue::LinkedQueue;
pub use queue_error::QueueError;
pub use queue_size::QueueSize;
pub use ring_queue::{RingQueue, DEFAULT_CAPACITY};
pub use traits::{QueueBase, QueueBulkOps, QueueReader, QueueWriter};
