//! A module containing [`Queue`] and associated types.
//!
//! The included iterators walk the Queue from front to back, in pop order.
//!
//! [`Queue`] is also re-exported under the parent module.

mod iter;
mod queue;

pub use iter::*;
pub use queue::*;
