//! A module containing [`AvlTree`] and associated types.
//!
//! The tree keeps itself height-balanced through rotations, so lookups, insertions and removals
//! all stay `O(log n)`. Four borrowed iterators cover the classic traversal orders, with in-order
//! (ascending) as the default.
//!
//! [`AvlTree`] is also re-exported under the parent module.

mod avl_tree;
mod iter;
mod node;

pub use avl_tree::*;
pub use iter::*;
pub(crate) use node::*;
