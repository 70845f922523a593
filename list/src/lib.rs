//! Sentinel-based doubly-linked list with O(1) operations on node handles.
//!
//! Inserting a value returns a [`NodeId`] that can later be used to remove the
//! node, move it, insert next to it, or navigate from it, all in constant time.
//! A dummy sentinel node closes the list into a ring, so the ends are handled
//! by the same code as the interior.
//!
//! # Example
//!
//! ```rust
//! use coil_list::List;
//!
//! let mut list = List::new();
//! let a = list.push_back("a");
//! let c = list.push_back("c");
//! list.insert_after("b", a).unwrap();
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
//!
//! list.move_to_front(c).unwrap();
//! assert_eq!(list.front_value(), Some(&"c"));
//!
//! assert_eq!(list.remove(a), Ok("a"));
//! assert!(list.remove(a).is_err()); // handle is dead now
//! ```
//!
//! # Handles
//!
//! A [`NodeId`] belongs to the list that issued it. Passing it to another
//! list, or using it after its node was removed or the list was cleared,
//! fails with [`ListError::ForeignNode`] instead of being silently ignored.
//!
//! # Splicing
//!
//! [`List::push_back_list`] and [`List::push_front_list`] copy *values* from
//! another list. The source list is not modified and the new nodes are
//! independent of the source's nodes:
//!
//! ```rust
//! use coil_list::List;
//!
//! let other: List<i32> = [1, 2].into_iter().collect();
//! let mut list: List<i32> = [3].into_iter().collect();
//!
//! list.push_front_list(&other);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! assert_eq!(other.len(), 2);
//! ```

mod error;
mod iter;
mod list;

pub use error::ListError;
pub use iter::{Ids, IntoIter, Iter};
pub use list::{List, NodeId};

#[cfg(test)]
mod tests;
