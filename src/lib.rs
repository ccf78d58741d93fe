//! This crate provides the classic pointer-chained list containers with
//! owned nodes (singly linked, doubly linked and circular) together
//! with two stack adapters.
//!
//! Every container owns its nodes through the forward chain: a node is
//! allocated when an element is pushed, freed when it is unlinked, and
//! the whole chain is freed transitively when the list is dropped.
//! Back-references and ring closures are plain non-owning pointers, so
//! teardown never runs over an edge twice.
//!
//! # Containers
//!
//! - [`SinglyList`]: ordered sequence with `push_back`/`push_front`,
//!   equality-based `remove` and `find`, an O(1) length counter, and a
//!   Floyd cycle check.
//! - [`DoublyList`]: ordered sequence with bidirectional links, a Floyd
//!   cycle check over the forward chain, and a link-integrity
//!   diagnostic.
//! - [`CircularList`]: a singly linked ring; the tail's `next` is the
//!   head, and a single node is its own successor.
//! - [`CircularDoublyList`]: the doubly linked ring's data model only,
//!   an extension point, not yet a container.
//! - [`Stack`] and [`ListStack`]: LIFO adapters over a contiguous
//!   buffer and over [`SinglyList`] respectively.
//!
//! # Memory Layout
//!
//! The circular list closes its forward chain into a ring:
//!
//! ```text
//!    head                                 tail
//!     ↓                                    ↓
//! ┌────────┐      ┌────────┐           ┌────────┐
//! │  next  │ ───→ │  next  │ ─→ ┄┄ ──→ │  next  │ ─┐
//! ├────────┤      ├────────┤           ├────────┤  │
//! │ elem 0 │      │ elem 1 │           │ elem n │  │
//! └────────┘      └────────┘           └────────┘  │
//!     ↑                                            │
//!     └────────────────────────────────────────────┘
//! ```
//!
//! The acyclic lists terminate on `None` instead; a length-one ring
//! points at itself.
//!
//! # Examples
//!
//! ```
//! use chain_list::SinglyList;
//!
//! let mut list = SinglyList::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_back(3);
//!
//! let removed = list.remove(&2).unwrap();
//! assert_eq!(removed.into_element(), 2);
//!
//! assert!(list.find(&2).is_none());
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
//! assert!(!list.is_cyclic());
//! ```

#[doc(inline)]
pub use circular::{CircularDoublyList, CircularList};
#[doc(inline)]
pub use doubly::DoublyList;
#[doc(inline)]
pub use singly::SinglyList;
#[doc(inline)]
pub use stack::{ListStack, Stack};

pub mod circular;
pub mod doubly;
pub mod singly;
pub mod stack;

mod algorithms;

mod token_list;
