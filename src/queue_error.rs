use thiserror::Error;

/// An error that occurs when a queue operation fails.
///
/// Both in-tree backings grow on demand, so the only failure left is the ring
/// buffer being unable to double its capacity because the arithmetic would
/// overflow `usize`. The rejected element is handed back to the caller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueueError<E> {
  #[error("Failed to offer an element: {0:?}")]
  OfferError(E),
}
