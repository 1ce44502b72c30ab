use crate::{QueueError, QueueSize};

/// Common trait defining basic queue operations.
///
/// Serves as the base trait for [`QueueWriter`] and [`QueueReader`].
///
/// # Type Parameters
///
/// * `E` - Type of elements stored in the queue
pub trait QueueBase<E> {
  /// Returns the current number of elements as [`QueueSize`].
  fn len(&self) -> QueueSize;

  /// Returns the queue capacity.
  ///
  /// Backings that grow on demand report `QueueSize::Limitless`.
  fn capacity(&self) -> QueueSize;

  /// Checks if the queue is empty.
  fn is_empty(&self) -> bool {
    self.len() == QueueSize::limited(0)
  }
}

/// Trait providing write access to the back of the queue.
pub trait QueueWriter<E>: QueueBase<E> {
  /// Appends an element at the back.
  ///
  /// Existing elements keep their relative order. Growable backings only fail
  /// when the backing store cannot be enlarged any further, in which case the
  /// element is handed back inside [`QueueError::OfferError`].
  fn offer_mut(&mut self, element: E) -> Result<(), QueueError<E>>;
}

/// Trait providing read access to the front of the queue.
pub trait QueueReader<E>: QueueBase<E> {
  /// Returns a reference to the front element without removing it, or `None`
  /// if the queue is empty.
  fn peek(&self) -> Option<&E>;

  /// Removes and returns the front element. Returns `Ok(None)` if the queue
  /// is empty; every remaining element moves one logical position forward.
  fn poll_mut(&mut self) -> Result<Option<E>, QueueError<E>>;

  /// Empties the queue and releases the storage it exclusively owns.
  fn clean_up_mut(&mut self);
}

/// Predicate-driven bulk operations, implemented once for every backing.
///
/// All four operations are composed purely from [`QueueBase::len`],
/// [`QueueReader::peek`], [`QueueReader::poll_mut`], and
/// [`QueueWriter::offer_mut`]; they never touch backing-specific state. Each
/// pass is bounded by the size captured before the first primitive call, so a
/// bulk operation re-examines no element it already re-appended.
///
/// Predicates are called at most once per original element, and never on an
/// empty queue.
pub trait QueueBulkOps<E>: QueueReader<E> + QueueWriter<E> {
  /// Removes every element for which the predicate does NOT hold, preserving
  /// the relative order of the survivors.
  ///
  /// Survivors are rotated through the back exactly once and settle at the
  /// front in their original order once the pass completes.
  fn retain_if<F>(&mut self, mut predicate: F) -> Result<(), QueueError<E>>
  where
    F: FnMut(&E) -> bool, {
    let budget = self.len().to_usize();
    for _ in 0..budget {
      if let Some(element) = self.poll_mut()? {
        if predicate(&element) {
          self.offer_mut(element)?;
        }
      }
    }
    Ok(())
  }

  /// Removes every element for which the predicate holds, preserving the
  /// relative order of the survivors.
  fn remove_if<F>(&mut self, mut predicate: F) -> Result<(), QueueError<E>>
  where
    F: FnMut(&E) -> bool, {
    self.retain_if(|element| !predicate(element))
  }

  /// Keeps the longest front-anchored prefix whose elements all satisfy the
  /// predicate, discarding everything from the first failure onward.
  fn take_while<F>(&mut self, predicate: F) -> Result<(), QueueError<E>>
  where
    F: FnMut(&E) -> bool, {
    prefix_scan(self, predicate, PrefixMode::Take)
  }

  /// Discards the longest front-anchored prefix whose elements all satisfy
  /// the predicate; the first failing element and everything after it survive
  /// untouched.
  fn drop_while<F>(&mut self, predicate: F) -> Result<(), QueueError<E>>
  where
    F: FnMut(&E) -> bool, {
    prefix_scan(self, predicate, PrefixMode::Drop)
  }
}

impl<E, Q> QueueBulkOps<E> for Q where Q: QueueReader<E> + QueueWriter<E> {}

enum PrefixMode {
  /// Rotate satisfying elements to the back; flush the rest on first failure.
  Take,
  /// Discard satisfying elements; stop on first failure.
  Drop,
}

/// Shared scan for `take_while`/`drop_while`.
///
/// Walks the front `budget` logical positions by peeking, never dequeuing
/// ahead of the predicate outcome. Terminates in O(budget) primitive calls.
fn prefix_scan<E, Q, F>(queue: &mut Q, mut predicate: F, mode: PrefixMode) -> Result<(), QueueError<E>>
where
  Q: QueueReader<E> + QueueWriter<E> + ?Sized,
  F: FnMut(&E) -> bool, {
  let budget = queue.len().to_usize();
  for scanned in 0..budget {
    let holds = match queue.peek() {
      Some(element) => predicate(element),
      None => return Ok(()),
    };
    if !holds {
      if let PrefixMode::Take = mode {
        // The satisfying prefix has been rotated to the back; the failing
        // element and the unexamined suffix are the `budget - scanned`
        // elements now at the front.
        for _ in 0..budget - scanned {
          queue.poll_mut()?;
        }
      }
      return Ok(());
    }
    match mode {
      PrefixMode::Take => {
        if let Some(element) = queue.poll_mut()? {
          queue.offer_mut(element)?;
        }
      }
      PrefixMode::Drop => {
        queue.poll_mut()?;
      }
    }
  }
  Ok(())
}
