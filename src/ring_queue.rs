use tracing::{debug, trace};

use crate::{QueueBase, QueueError, QueueReader, QueueSize, QueueWriter};

pub const DEFAULT_CAPACITY: usize = 8;

/// FIFO queue backed by a growable circular buffer.
///
/// Logical element `i` lives at buffer slot `(head + i) % capacity`. When the
/// buffer fills up, a fresh buffer of exactly twice the capacity is allocated
/// and the logical window is unwrapped into it starting at slot 0, so enqueue
/// stays amortized O(1) and FIFO order survives every resize. Capacity never
/// shrinks; [`QueueReader::clean_up_mut`] is the only path back to the
/// construction-time capacity.
#[derive(Debug)]
pub struct RingQueue<E> {
  buf: Box<[Option<E>]>,
  head: usize,
  len: usize,
  initial_capacity: usize,
}

impl<E> RingQueue<E> {
  /// Creates an empty queue whose first buffer holds `capacity` elements.
  ///
  /// # Panics
  ///
  /// Panics if `capacity` is zero.
  pub fn new(capacity: usize) -> Self {
    assert!(capacity > 0, "capacity must be > 0");
    Self {
      buf: Self::alloc_buffer(capacity),
      head: 0,
      len: 0,
      initial_capacity: capacity,
    }
  }

  /// Current physical capacity of the backing buffer.
  pub fn buffer_capacity(&self) -> usize {
    self.buf.len()
  }

  fn alloc_buffer(capacity: usize) -> Box<[Option<E>]> {
    let mut vec = Vec::with_capacity(capacity);
    vec.resize_with(capacity, || None);
    vec.into_boxed_slice()
  }

  /// Moves the logical window into a buffer of `new_capacity`, unwrapping it
  /// so the old logical front lands in slot 0.
  fn grow(&mut self, new_capacity: usize) {
    let old_capacity = self.buf.len();
    let mut buf = Self::alloc_buffer(new_capacity);
    for i in 0..self.len {
      buf[i] = self.buf[(self.head + i) % old_capacity].take();
    }
    self.buf = buf;
    self.head = 0;
    trace!(old_capacity, new_capacity, "ring buffer capacity doubled");
  }
}

impl<E> Default for RingQueue<E> {
  fn default() -> Self {
    Self::new(DEFAULT_CAPACITY)
  }
}

impl<E> QueueBase<E> for RingQueue<E> {
  fn len(&self) -> QueueSize {
    QueueSize::limited(self.len)
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::limitless()
  }
}

impl<E> QueueWriter<E> for RingQueue<E> {
  fn offer_mut(&mut self, element: E) -> Result<(), QueueError<E>> {
    if self.len == self.buf.len() {
      let Some(new_capacity) = self.buf.len().checked_mul(2) else {
        return Err(QueueError::OfferError(element));
      };
      self.grow(new_capacity);
    }
    let slot = (self.head + self.len) % self.buf.len();
    self.buf[slot] = Some(element);
    self.len += 1;
    Ok(())
  }
}

impl<E> QueueReader<E> for RingQueue<E> {
  fn peek(&self) -> Option<&E> {
    if self.len == 0 {
      return None;
    }
    self.buf[self.head].as_ref()
  }

  fn poll_mut(&mut self) -> Result<Option<E>, QueueError<E>> {
    if self.len == 0 {
      return Ok(None);
    }
    // take() leaves the vacated slot empty, so no element outlives its
    // logical removal.
    let value = self.buf[self.head].take();
    debug_assert!(value.is_some(), "occupied slot within the logical window");
    self.head = (self.head + 1) % self.buf.len();
    self.len -= 1;
    Ok(value)
  }

  fn clean_up_mut(&mut self) {
    if self.len > 0 {
      debug!(len = self.len, "clearing non-empty ring queue");
    }
    self.buf = Self::alloc_buffer(self.initial_capacity);
    self.head = 0;
    self.len = 0;
  }
}
