//! Arenas: the pluggable stores that deque nodes live in.
//!
//! A [`Deque`] never touches node storage directly. Every node it
//! creates or destroys goes through an [`Arena`], and nodes are
//! addressed by the stable `usize` indices the arena hands out. Swapping
//! the arena swaps the allocation strategy (growable heap store, fixed
//! pool, counting wrapper) without touching the container logic.
//!
//! [`Deque`]: crate::Deque

use crate::error::Error;
use crate::node::{Node, NONE};

/// The allocation capability a [`Deque`](crate::Deque) is built against.
///
/// An arena owns slots for [`Node`] values and addresses them with
/// stable indices: an index stays valid until the node is deallocated.
/// The arena tracks which slots are live; which nodes form the chain,
/// and in what order, is entirely the deque's business.
///
/// Implementations must provide O(1) `allocate`, `deallocate`, `node`,
/// and `node_mut`. An arena instance must outlive every node it
/// allocated, which the deque guarantees by owning its arena.
pub trait Arena<T> {
    /// Stores `node` and returns its index, or [`Error::OutOfMemory`]
    /// if no slot can be provided. On failure the arena is unchanged.
    fn allocate(&mut self, node: Node<T>) -> Result<usize, Error>;

    /// Removes and returns the node at `index`, releasing its slot for
    /// reuse.
    ///
    /// # Panics
    ///
    /// May panic if `index` is vacant or was not returned by this
    /// arena's `allocate`. The deque only ever deallocates indices that
    /// are live in its own chain.
    fn deallocate(&mut self, index: usize) -> Node<T>;

    /// Returns the node at `index`.
    ///
    /// # Panics
    ///
    /// May panic if `index` is vacant.
    fn node(&self, index: usize) -> &Node<T>;

    /// Returns the node at `index` mutably.
    ///
    /// # Panics
    ///
    /// May panic if `index` is vacant.
    fn node_mut(&mut self, index: usize) -> &mut Node<T>;

    /// Moves every slot out of `other` into `self` without allocating
    /// per node, leaving `other` empty. Returns the offset that
    /// re-bases `other`'s indices: a node that lived at `i` in `other`
    /// lives at `i + offset` afterward.
    ///
    /// Moved nodes are stored unchanged; their link fields still hold
    /// `other`-relative indices, and the caller is responsible for
    /// re-basing them. On failure both arenas are unchanged.
    fn absorb(&mut self, other: &mut Self) -> Result<usize, Error>
    where
        Self: Sized;
}

// A slot either holds a live node or sits on the free list, remembering
// the next free slot below it.
enum Slot<T> {
    Free(usize),
    Used(Node<T>),
}

impl<T> Slot<T> {
    fn node(&self) -> &Node<T> {
        match self {
            Slot::Used(node) => node,
            Slot::Free(_) => panic!("vacant arena slot"),
        }
    }

    fn node_mut(&mut self) -> &mut Node<T> {
        match self {
            Slot::Used(node) => node,
            Slot::Free(_) => panic!("vacant arena slot"),
        }
    }

    fn into_node(self) -> Node<T> {
        match self {
            Slot::Used(node) => node,
            Slot::Free(_) => panic!("vacant arena slot"),
        }
    }
}

/// The default arena: a growable slot vector backed by the process
/// heap, with an intrusive free list over released slots.
///
/// Allocation never fails; released slots are reused before the vector
/// grows.
///
/// # Examples
///
/// ```
/// use arena_deque::{Deque, HeapArena};
///
/// let mut d: Deque<u32> = Deque::new_in(HeapArena::new());
/// d.push_back(1).unwrap();
/// assert_eq!(Ok(&1), d.front());
/// ```
pub struct HeapArena<T> {
    // Slot storage. Free and used slots are interleaved.
    slots: Vec<Slot<T>>,
    // Index of the first free slot. NONE when the free list is empty.
    free: usize,
}

impl<T> HeapArena<T> {
    /// Creates an empty arena. No storage is allocated until a node is.
    pub fn new() -> HeapArena<T> {
        HeapArena {
            slots: Vec::new(),
            free: NONE,
        }
    }

    /// Creates an arena with `capacity` slots already on the free list.
    pub fn with_capacity(capacity: usize) -> HeapArena<T> {
        let mut slots = Vec::with_capacity(capacity);

        let mut next = NONE;
        for i in 0..capacity {
            slots.push(Slot::Free(next));
            next = i;
        }

        HeapArena { slots, free: next }
    }

    /// How many nodes the arena can hold without growing its slot
    /// vector.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }
}

impl<T> Default for HeapArena<T> {
    fn default() -> HeapArena<T> {
        HeapArena::new()
    }
}

impl<T> Arena<T> for HeapArena<T> {
    fn allocate(&mut self, node: Node<T>) -> Result<usize, Error> {
        let slot = Slot::Used(node);

        let ix = if NONE == self.free {
            self.slots.push(slot);
            self.slots.len() - 1
        } else {
            let ix = self.free;
            self.free = match self.slots[ix] {
                Slot::Free(next) => next,
                Slot::Used(_) => panic!("occupied slot on the free list"),
            };
            self.slots[ix] = slot;
            ix
        };

        Ok(ix)
    }

    fn deallocate(&mut self, index: usize) -> Node<T> {
        let slot = std::mem::replace(&mut self.slots[index], Slot::Free(self.free));
        self.free = index;
        slot.into_node()
    }

    fn node(&self, index: usize) -> &Node<T> {
        self.slots[index].node()
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        self.slots[index].node_mut()
    }

    fn absorb(&mut self, other: &mut HeapArena<T>) -> Result<usize, Error> {
        let offset = self.slots.len();

        self.slots.reserve(other.slots.len());
        for slot in other.slots.drain(..) {
            match slot {
                // Free slots from the donor are rethreaded onto our own
                // free list; their old ordering is irrelevant.
                Slot::Free(_) => {
                    let ix = self.slots.len();
                    self.slots.push(Slot::Free(self.free));
                    self.free = ix;
                }
                Slot::Used(node) => self.slots.push(Slot::Used(node)),
            }
        }
        other.free = NONE;

        Ok(offset)
    }
}

/// A fixed-capacity arena: the same slot mechanism as [`HeapArena`],
/// but allocation fails with [`Error::OutOfMemory`] once `capacity`
/// slots are in use and none have been released.
///
/// # Examples
///
/// ```
/// use arena_deque::{Deque, Error, FixedArena};
///
/// let mut d: Deque<u32, _> = Deque::new_in(FixedArena::with_capacity(2));
/// d.push_back(1).unwrap();
/// d.push_back(2).unwrap();
/// assert_eq!(Err(Error::OutOfMemory), d.push_back(3));
/// assert_eq!(2, d.len());
/// ```
pub struct FixedArena<T> {
    slots: Vec<Slot<T>>,
    free: usize,
    capacity: usize,
}

impl<T> FixedArena<T> {
    /// Creates an arena that will never hold more than `capacity`
    /// nodes.
    pub fn with_capacity(capacity: usize) -> FixedArena<T> {
        FixedArena {
            slots: Vec::with_capacity(capacity),
            free: NONE,
            capacity,
        }
    }

    /// The slot limit this arena was created with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Arena<T> for FixedArena<T> {
    fn allocate(&mut self, node: Node<T>) -> Result<usize, Error> {
        let slot = Slot::Used(node);

        if NONE != self.free {
            let ix = self.free;
            self.free = match self.slots[ix] {
                Slot::Free(next) => next,
                Slot::Used(_) => panic!("occupied slot on the free list"),
            };
            self.slots[ix] = slot;
            Ok(ix)
        } else if self.slots.len() < self.capacity {
            self.slots.push(slot);
            Ok(self.slots.len() - 1)
        } else {
            Err(Error::OutOfMemory)
        }
    }

    fn deallocate(&mut self, index: usize) -> Node<T> {
        let slot = std::mem::replace(&mut self.slots[index], Slot::Free(self.free));
        self.free = index;
        slot.into_node()
    }

    fn node(&self, index: usize) -> &Node<T> {
        self.slots[index].node()
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        self.slots[index].node_mut()
    }

    fn absorb(&mut self, other: &mut FixedArena<T>) -> Result<usize, Error> {
        // The whole slot vector moves over, vacant slots included.
        if self.slots.len() + other.slots.len() > self.capacity {
            return Err(Error::OutOfMemory);
        }

        let offset = self.slots.len();

        for slot in other.slots.drain(..) {
            match slot {
                Slot::Free(_) => {
                    let ix = self.slots.len();
                    self.slots.push(Slot::Free(self.free));
                    self.free = ix;
                }
                Slot::Used(node) => self.slots.push(Slot::Used(node)),
            }
        }
        other.free = NONE;

        Ok(offset)
    }
}

/// A tracking wrapper around any arena, counting how many times
/// `allocate` and `deallocate` are called.
///
/// Useful for asserting allocation behavior in tests, or for auditing a
/// workload's churn. `absorb` is delegated and deliberately not
/// counted: bulk adoption allocates no nodes.
///
/// # Examples
///
/// ```
/// use arena_deque::{CountingArena, Deque, HeapArena};
///
/// let mut d: Deque<u32, _> = Deque::new_in(CountingArena::new(HeapArena::new()));
/// d.push_back(1).unwrap();
/// d.push_back(2).unwrap();
/// d.pop_front().unwrap();
///
/// assert_eq!(2, d.arena().allocations());
/// assert_eq!(1, d.arena().deallocations());
/// ```
pub struct CountingArena<A> {
    inner: A,
    allocations: usize,
    deallocations: usize,
}

impl<A> CountingArena<A> {
    /// Wraps `inner`, with both counters at zero.
    pub fn new(inner: A) -> CountingArena<A> {
        CountingArena {
            inner,
            allocations: 0,
            deallocations: 0,
        }
    }

    /// How many nodes have been allocated through this wrapper.
    pub fn allocations(&self) -> usize {
        self.allocations
    }

    /// How many nodes have been deallocated through this wrapper.
    pub fn deallocations(&self) -> usize {
        self.deallocations
    }
}

impl<A: Default> Default for CountingArena<A> {
    fn default() -> CountingArena<A> {
        CountingArena::new(A::default())
    }
}

impl<T, A: Arena<T>> Arena<T> for CountingArena<A> {
    fn allocate(&mut self, node: Node<T>) -> Result<usize, Error> {
        let ix = self.inner.allocate(node)?;
        self.allocations += 1;
        Ok(ix)
    }

    fn deallocate(&mut self, index: usize) -> Node<T> {
        let node = self.inner.deallocate(index);
        self.deallocations += 1;
        node
    }

    fn node(&self, index: usize) -> &Node<T> {
        self.inner.node(index)
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        self.inner.node_mut(index)
    }

    fn absorb(&mut self, other: &mut CountingArena<A>) -> Result<usize, Error> {
        self.inner.absorb(&mut other.inner)
    }
}
