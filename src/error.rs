use std::error;
use std::fmt;

/// The errors surfaced by deque and cursor operations.
///
/// Every failure is reported to the caller; nothing is retried
/// internally, and no error leaves the deque's head/tail/length
/// bookkeeping inconsistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The deque holds no elements to access or remove.
    Empty,
    /// The arena could not provide a slot for a new node. The deque is
    /// left exactly as it was before the failed operation.
    OutOfMemory,
    /// A cursor was dereferenced at its end position, or moved past a
    /// traversal boundary.
    InvalidCursor,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => f.write_str("deque is empty"),
            Error::OutOfMemory => f.write_str("arena cannot allocate a node"),
            Error::InvalidCursor => f.write_str("cursor moved or read past a boundary"),
        }
    }
}

impl error::Error for Error {}
