//! # bintree
//!
//! A persistent (immutable) binary search tree mapping string keys to
//! arbitrary values.
//!
//! ## Overview
//!
//! [`PersistentTree`] is an immutable ordered map from [`String`] keys to
//! values of any type. Every mutating operation returns a new tree and
//! leaves the original untouched; unmodified subtrees are shared by
//! reference between versions, so an insert or removal allocates only the
//! path from the root to the changed position.
//!
//! The tree is deliberately unbalanced: there is no rotation and no height
//! invariant, so depth depends on insertion order. Lookups, inserts, and
//! removals are O(h) where h is the current height.
//!
//! ## Example
//!
//! ```rust
//! use bintree::PersistentTree;
//!
//! let tree = PersistentTree::new()
//!     .insert("two".to_string(), 2)
//!     .insert("one".to_string(), 1);
//!
//! let updated = tree.remove("one");
//!
//! assert_eq!(tree.get("one"), Some(&1)); // Original unchanged
//! assert_eq!(updated.get("one"), None);  // New version
//! ```
//!
//! ## Feature Flags
//!
//! - `arc`: use `Arc` instead of `Rc` for structural sharing, making trees
//!   of `Send + Sync` values shareable across threads.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod persistent;

pub use persistent::PersistentTree;
pub use persistent::PersistentTreeIntoIterator;
pub use persistent::PersistentTreeIterator;
pub use persistent::PersistentTreeRangeIterator;
