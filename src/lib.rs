//! # BART - Byte-keyed Adaptive Radix Tree
//!
//! An ordered, in-memory map from byte-string keys to values, implemented as
//! an Adaptive Radix Tree (ART).
//!
//! ## Overview
//!
//! ART is a radix trie whose interior nodes adapt their branching
//! representation to their actual fan-out (4, 16, 48 or 256 child slots)
//! and which collapses runs of single-child nodes into a per-node prefix
//! (path compression). That combination gives:
//!
//! - **O(k) operations**: lookup, insert and delete cost is bounded by the
//!   key length, independent of how many entries the tree holds
//! - **Space that tracks density**: sparse nodes stay small, dense nodes pay
//!   for direct addressing only once they can use it
//! - **Ordered iteration**: entries come out in lexicographic key order,
//!   from the start or from any lower bound
//!
//! ## Quick start
//!
//! ```rust
//! use bart::AdaptiveRadixTree;
//!
//! let mut tree = AdaptiveRadixTree::new();
//!
//! // Insert returns the displaced value on replacement.
//! assert_eq!(tree.insert(b"hello", 1), None);
//! assert_eq!(tree.insert(b"hello", 2), Some(1));
//! tree.insert(b"world", 3);
//!
//! assert_eq!(tree.get(b"hello"), Some(&2));
//! assert_eq!(tree.remove(b"world"), Some(3));
//!
//! // Iterate in key order, optionally from a lower bound.
//! tree.insert(b"apple", 4);
//! for (key, value) in tree.iter_from(b"b") {
//!     println!("{:?} -> {}", key, value);
//! }
//! ```
//!
//! Keys are arbitrary byte slices — the empty key included — compared
//! lexicographically on unsigned bytes. Values are moved into the tree and
//! handed back by `insert` (on replacement) and `remove`.

// Private implementation modules
mod node;
mod prefix;

// Internal modules (public for benchmarking, not part of the stable API)
#[doc(hidden)]
pub mod mapping;
#[doc(hidden)]
pub mod utils;

// Public API modules
pub mod iter;
pub mod range;
pub mod tree;

#[cfg(test)]
mod proptests;

// Re-export main types for convenience
pub use iter::Iter;
pub use range::Range;
pub use tree::AdaptiveRadixTree;
