/// The size or capacity of a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueSize {
  /// No limit; reported by backings that grow on demand.
  Limitless,
  /// An exact number of elements.
  Limited(usize),
}

impl QueueSize {
  pub const fn limitless() -> Self {
    Self::Limitless
  }

  pub const fn limited(value: usize) -> Self {
    Self::Limited(value)
  }

  pub const fn is_limitless(&self) -> bool {
    matches!(self, Self::Limitless)
  }

  /// Converts to `usize`; limitless maps to `usize::MAX`.
  pub const fn to_usize(self) -> usize {
    match self {
      Self::Limitless => usize::MAX,
      Self::Limited(value) => value,
    }
  }
}

impl Default for QueueSize {
  fn default() -> Self {
    QueueSize::limited(0)
  }
}
