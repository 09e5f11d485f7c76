//! This crate provides a queue of strings on top of a doubly-linked list with
//! owned nodes, implemented as a cyclic list in an arena.
//!
//! The [`Queue`] allows inserting and removing strings at both ends in constant
//! time, and reshaping itself in place: reversing, reversing by groups, swapping
//! pairs, sorting, filtering into a monotonic sequence and removing duplicated
//! runs. Sorted queues can be collected in a [`QueueChain`] and merged into one.
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use cyclic_queue::Queue;
//!
//! let mut queue = Queue::from_iter(["pear", "fig", "apple", "fig"]);
//!
//! queue.sort(false);
//! assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["apple", "fig", "fig", "pear"]);
//!
//! assert_eq!(queue.delete_dup(), 2); // both "fig" are gone
//! queue.insert_head("kiwi")?;
//! assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["kiwi", "apple", "pear"]);
//!
//! let element = queue.remove_tail(None)?;
//! assert_eq!(element.map(|e| e.into_value()), Some(String::from("pear")));
//! # Ok::<(), cyclic_queue::QueueError>(())
//! ```
//!
//! # Memory Layout
//!
//! The nodes of a [`List`] live in a `Vec` owned by the list, and link to each
//! other by their index in it:
//! ```text
//!        slot 0            slot 1            slot 2            slot 3
//!    ┌───────────┐     ╔═══════════╗     ╔═══════════╗     ╔═══════════╗
//!    │ next = 2  │     ║ next = 0  ║     ║ next = 1  ║     ║ next = -  ║ ─→ free chain
//!    ├───────────┤     ╟───────────╢     ╟───────────╢     ╟───────────╢
//!    │ prev = 1  │     ║ prev = 2  ║     ║ prev = 0  ║     ║ prev = 3  ║
//!    ├───────────┤     ╟───────────╢     ╟───────────╢     ╟───────────╢
//!    ┊No payload ┊     ║ payload T ║     ║ payload T ║     ║   None    ║
//!    └╌╌╌╌╌╌╌╌╌╌╌┘     ╚═══════════╝     ╚═══════════╝     ╚═══════════╝
//!     Ghost node          Node 1            Node 0          free slot
//! ```
//!
//! Slot 0 is always the ghost node. It carries no payload; its `next` is the
//! first element (or itself in an empty list) and its `prev` the last one.
//!
//! Removing an element gives the payload back and chains its slot into a free
//! list, so the next insertion reuses it. Since a node is an index, relinking
//! never needs more than plain assignments, and nodes can never outlive the list
//! that owns them.
//!
//! # Allocation Failures
//!
//! [`Queue::insert_head`] and [`Queue::insert_tail`] reserve both the text copy
//! and the arena slot with `try_reserve` before any link is changed, and report
//! [`QueueError::AllocationFailure`] with the queue untouched. Every other
//! operation only relinks nodes or drops them, and cannot fail.
//!
//! # Logging
//!
//! With the default `tracing` feature, operations emit [`tracing`] events:
//! `trace` for each reshaping operation, and `debug` for allocation failures
//! and merge passes. No subscriber is installed by this crate.
//!
//! [`tracing`]: https://docs.rs/tracing
#![forbid(unsafe_code)]

#[macro_use]
mod trace;

#[doc(inline)]
pub use chain::{ChainEntry, QueueChain};
#[doc(inline)]
pub use error::QueueError;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::List;
#[doc(inline)]
pub use queue::{Element, Queue};

pub mod chain;
pub mod error;
pub mod list;
pub mod queue;
