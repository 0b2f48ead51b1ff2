/// The slot index used when a node has no neighbor on one side, or when
/// the deque has no node at an end.
pub(crate) const NONE: usize = usize::MAX;

/// A single deque node: one owned element plus the slot indices of its
/// neighbors.
///
/// Arena implementations store whole `Node` values and hand out stable
/// indices for them; the links themselves are maintained by the deque
/// and are not part of the arena contract.
pub struct Node<T> {
    // The contained element.
    pub(crate) value: T,
    // Index of the neighbor toward the front. NONE when this node is
    // the head.
    pub(crate) prev: usize,
    // Index of the neighbor toward the back. NONE when this node is
    // the tail.
    pub(crate) next: usize,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, prev: usize, next: usize) -> Node<T> {
        Node { value, prev, next }
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}
