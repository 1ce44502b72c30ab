use core::ptr::NonNull;

use tracing::debug;

use crate::{QueueBase, QueueError, QueueReader, QueueSize, QueueWriter};

/// FIFO queue backed by a singly linked chain of nodes.
///
/// The chain is linked with raw pointers end to end: a node is allocated with
/// `Box::into_raw` on enqueue and reclaimed with `Box::from_raw` on dequeue,
/// so no owning `Box` ever coexists with the tail cursor. A `Box` stored
/// inside the chain would invalidate the cursor under the aliasing model
/// every time the box moves. The queue still exclusively owns every node; the
/// raw pointers make this type `!Send`/`!Sync`, which matches the
/// single-threaded contract.
#[derive(Debug)]
pub struct LinkedQueue<E> {
  head: Option<NonNull<Node<E>>>,
  tail: Option<NonNull<Node<E>>>,
  len: usize,
}

#[derive(Debug)]
struct Node<E> {
  element: E,
  next: Option<NonNull<Node<E>>>,
}

impl<E> LinkedQueue<E> {
  pub fn new() -> Self {
    Self {
      head: None,
      tail: None,
      len: 0,
    }
  }

  /// Reclaims the chain front-to-back, one node per iteration.
  fn unlink_all(&mut self) {
    let mut cursor = self.head.take();
    while let Some(node) = cursor {
      let node = unsafe { Box::from_raw(node.as_ptr()) };
      cursor = node.next;
    }
    self.tail = None;
    self.len = 0;
  }
}

impl<E> Default for LinkedQueue<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E> Drop for LinkedQueue<E> {
  fn drop(&mut self) {
    self.unlink_all();
  }
}

impl<E> QueueBase<E> for LinkedQueue<E> {
  fn len(&self) -> QueueSize {
    QueueSize::limited(self.len)
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::limitless()
  }
}

impl<E> QueueWriter<E> for LinkedQueue<E> {
  fn offer_mut(&mut self, element: E) -> Result<(), QueueError<E>> {
    let node = NonNull::from(Box::leak(Box::new(Node { element, next: None })));
    match self.tail {
      // Invariant: tail is Some iff head is Some, so the chain-empty test on
      // tail is equivalent to testing head.
      Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
      None => self.head = Some(node),
    }
    self.tail = Some(node);
    self.len += 1;
    Ok(())
  }
}

impl<E> QueueReader<E> for LinkedQueue<E> {
  fn peek(&self) -> Option<&E> {
    self.head.map(|node| unsafe { &node.as_ref().element })
  }

  fn poll_mut(&mut self) -> Result<Option<E>, QueueError<E>> {
    let Some(node) = self.head else {
      return Ok(None);
    };
    let node = unsafe { Box::from_raw(node.as_ptr()) };
    self.head = node.next;
    if self.head.is_none() {
      // The old tail node is gone; a stale cursor would dangle.
      self.tail = None;
    }
    self.len -= 1;
    Ok(Some(node.element))
  }

  fn clean_up_mut(&mut self) {
    if self.len > 0 {
      debug!(len = self.len, "clearing non-empty linked queue");
    }
    self.unlink_all();
  }
}
