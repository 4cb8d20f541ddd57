// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! A singly linked list that owns its elements.
//!
//! [`ForwardList`] boxes every element on insertion and keeps a sentinel head in front of the
//! first element.
//! The sentinel is the position "before the first element" and lets [`CursorMut::insert_after`]
//! and [`CursorMut::erase_after`] work at the front of the list just like anywhere else:
//!
//! ```
//! use forward_list::list::ForwardList;
//!
//! let mut list = ForwardList::from([1, 2, 3]);
//!
//! let mut cursor = list.before_begin_mut();
//! cursor.insert_after(0);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
//!
//! let mut cursor = list.before_begin_mut();
//! cursor.erase_after();
//! cursor.erase_after();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 3]);
//! assert_eq!(list.len(), 2);
//! ```
//!
//! Positions within the list are expressed through cursors.
//! A single generic [`BasicCursor`] provides both flavors:
//! [`Cursor`] only reads, while [`CursorMut`] holds the exclusive borrow of its list and may
//! modify the element it points to as well as link and unlink the element after it.
//! Since a cursor always borrows the list it was created from, it can neither outlive an element
//! it points to nor be used with another list.
//!
//! Cloning a list builds a complete copy before handing it out, and [`Clone::clone_from`] swaps
//! such a copy into place.
//! If cloning an element panics, the target list is left untouched.

mod base;
mod cursor;
mod iter;
mod ops;

pub use base::*;
pub use cursor::*;
pub use iter::*;
pub use ops::*;
