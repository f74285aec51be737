//! Array-Backed Max-Priority-Queue
//!
//! This crate provides a bounded-growth binary max-heap storing
//! (priority, data) pairs in a single contiguous buffer.
//!
//! # Features
//!
//! - **Max-heap ordering**: the entry with the greatest priority is always at
//!   the front; `push` and `pop` are O(log n), inspection is O(1)
//! - **Explicit capacity control**: the buffer is allocated up front
//!   (`with_capacity`), grows by roughly 1.5x when full, and never falls
//!   below the number of live entries
//! - **Value semantics**: cloning deep-copies the buffer capacity-for-capacity,
//!   so a clone is a fully independent replica of the source
//! - **Debug dumps**: pure formatters render the live entries in storage
//!   order or as an indented tree, without touching the queue
//!
//! Priorities only need `Ord`; duplicates are allowed, and every entry with a
//! duplicated priority is eventually returned exactly once.
//!
//! # Example
//!
//! ```rust
//! use priority_heap::PriorityHeap;
//!
//! let mut queue = PriorityHeap::new();
//! queue.push(2, "routine");
//! queue.push(9, "urgent");
//! queue.push(5, "soon");
//!
//! assert_eq!(*queue.front(), "urgent");
//! queue.pop();
//! assert_eq!(queue.peek(), Some((&5, &"soon")));
//!
//! while !queue.is_empty() {
//!     queue.pop();
//! }
//! assert!(queue.is_empty());
//! ```

pub mod display;
pub mod heap;

// Re-export the main type for convenience
pub use heap::{PriorityHeap, DEFAULT_CAPACITY};
