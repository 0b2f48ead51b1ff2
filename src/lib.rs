//! A double-ended queue built as a doubly-linked chain of nodes, with
//! the node storage behind a pluggable arena.
//!
//! The deque tracks its front, back, and neighbor relationships by
//! stable slot index rather than by pointer; the [`Arena`] trait
//! decides where those slots live. The default [`HeapArena`] grows on
//! the process heap, [`FixedArena`] caps the node count and surfaces
//! [`Error::OutOfMemory`] when full, and [`CountingArena`] wraps any
//! arena to audit allocation traffic. Custom strategies (pools,
//! bump regions) only need the four-method [`Arena`] capability.
//!
//! Traversal comes in two shapes: ordinary Rust iterators
//! ([`Deque::iter`] and `IntoIterator`), and bidirectional
//! [`Cursor`]/[`CursorMut`] views that step one element at a time in
//! either [`Direction`] and report boundary misuse as
//! [`Error::InvalidCursor`] instead of walking off the chain.

mod arena;
mod cursor;
mod deque;
mod error;
mod iterators;
mod node;

pub use crate::arena::{Arena, CountingArena, FixedArena, HeapArena};
pub use crate::cursor::{Cursor, CursorMut, Direction, Forward, Reverse};
pub use crate::deque::Deque;
pub use crate::error::Error;
pub use crate::iterators::{IntoIter, Iter};
pub use crate::node::Node;
