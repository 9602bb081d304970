//! An intrusive, self-balancing AVL binary search tree.
//!
//! [`node`] is the allocation-free core: a [`node::Node`] carries only a
//! parent reference, two child references, and a balance factor, and the
//! free functions in that module rebalance a tree of caller-owned,
//! caller-linked nodes without ever allocating or freeing one themselves.
//! This is the part of the crate meant for embedded and hard-real-time
//! use, where the caller controls allocation (or has none at all).
//!
//! [`AvlMap`] and [`AvlSet`] build an ordinary, allocating, safe ordered
//! map and set on top of that core, for everyone else.
//!
//! ```rust
//! use avl_tree::AvlMap;
//!
//! let mut map = AvlMap::new();
//! map.insert(2, "b");
//! map.insert(1, "a");
//! map.insert(3, "c");
//!
//! assert_eq!(map.get(&2), Some(&"b"));
//! assert_eq!(map.iter().map(|(k, _)| *k).collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

pub mod node;
pub mod map;
pub mod set;

#[cfg(feature = "quickcheck")]
#[path = "quickcheck.rs"]
mod quickcheck_impls;

#[cfg(feature = "ordered_iter")]
#[path = "ordered_iter.rs"]
mod ordered_iter_impls;

pub use crate::map::AvlMap;
pub use crate::node::{Link, Node, Side};
pub use crate::set::AvlSet;
