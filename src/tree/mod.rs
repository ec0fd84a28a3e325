//! Ordered map based on an arena-backed red-black tree.
//!
//! This module provides [`RedBlackTreeMap`], a mutable ordered map keyed by
//! `i64` with `String` payloads:
//!
//! - O(log N) find
//! - O(log N) insert
//! - O(log N) remove
//! - O(N) in-order iteration in ascending key order
//! - O(1) len and `is_empty`
//!
//! Duplicate keys are a first-class part of the contract: inserting a key
//! that is already present creates a new node (equal keys route to the
//! right subtree), and [`RedBlackTreeMap::find`] / [`RedBlackTreeMap::remove`]
//! operate on the *first* match encountered on the search path from the
//! root, not necessarily the most recently inserted one.
//!
//! # Examples
//!
//! ```rust
//! use crimson::tree::RedBlackTreeMap;
//!
//! let mut map = RedBlackTreeMap::new();
//! map.insert(3, "three");
//! map.insert(1, "one");
//! map.insert(2, "two");
//!
//! // Entries are always enumerated in sorted order
//! let keys: Vec<i64> = map.keys().collect();
//! assert_eq!(keys, vec![1, 2, 3]);
//!
//! map.remove(2).unwrap();
//! assert!(map.find(2).is_err());
//! ```
//!
//! # Internal Structure
//!
//! The red-black tree maintains the following invariants:
//! 1. Every node is either red or black
//! 2. The root is black
//! 3. All leaves (the nil sentinel) are black
//! 4. Red nodes have only black children
//! 5. Every path from root to leaf has the same number of black nodes
//!
//! These invariants ensure the tree height is O(log N).
//!
//! Nodes are stored in a flat arena indexed by integer handles; the handle
//! at slot zero is the nil sentinel. Freed slots are recycled by later
//! insertions.

mod map;

pub use map::KeyNotFoundError;
pub use map::RedBlackTreeMap;
pub use map::RedBlackTreeMapIntoIterator;
pub use map::RedBlackTreeMapIterator;
