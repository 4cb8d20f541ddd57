// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;
use core::marker::PhantomData;
use core::ptr::{self, NonNull};

use super::base::{ForwardList, Link, Node};
use crate::traits::{Access, Exclusive, Shared};

/// A position within a [`ForwardList`].
///
/// A cursor points to one of three kinds of positions:
/// the sentinel head before the first element, an element, or the end of the list.
/// It only ever moves forward.
///
/// The `A` type parameter selects the flavor of the cursor:
/// [`Cursor`] (`A` = [`Shared`]) can only read the element it points to and can be copied freely,
/// while [`CursorMut`] (`A` = [`Exclusive`]) holds the exclusive borrow of the list and can modify,
/// insert, and erase elements.
///
/// Use [`get`](Self::get) and [`get_mut`](BasicCursor::get_mut) to access the element a cursor
/// points to. Both return `None` at the position before the first element and at the end.
///
/// Cursors of both flavors compare equal if they point to the same position.
/// All end positions compare equal.
///
/// Cursors are invariant over `T`, as a [`CursorMut`] can link new elements into its list.
pub struct BasicCursor<'a, T, A: Access> {
    list: NonNull<ForwardList<T>>,
    /// The sentinel head, the link of a node, or null for the end position.
    link: *mut Link<T>,
    marker: PhantomData<(&'a mut ForwardList<T>, A)>,
}

/// A read-only cursor over a [`ForwardList`].
pub type Cursor<'a, T> = BasicCursor<'a, T, Shared>;

/// A cursor over a [`ForwardList`] that can modify the list.
pub type CursorMut<'a, T> = BasicCursor<'a, T, Exclusive>;

impl<'a, T, A> BasicCursor<'a, T, A>
where
    A: Access,
{
    fn new(list: NonNull<ForwardList<T>>, link: *mut Link<T>) -> Self {
        Self {
            list,
            link,
            marker: PhantomData,
        }
    }

    /// Returns a reference to the element the cursor points to, or `None` if the cursor points
    /// to the position before the first element or to the end of the list.
    pub fn get(&self) -> Option<&T> {
        self.node().map(|node| unsafe { &(*node).value })
    }

    /// Returns `true` if the cursor points to the position before the first element.
    pub fn is_before_begin(&self) -> bool {
        self.link == unsafe { ForwardList::head_link(self.list.as_ptr()) }
    }

    /// Returns `true` if the cursor points to the end of the list.
    pub fn is_end(&self) -> bool {
        self.link.is_null()
    }

    /// Moves the cursor to the next position.
    ///
    /// A cursor pointing to the end of the list stays there.
    pub fn move_next(&mut self) {
        if !self.is_end() {
            self.link = unsafe { (*self.link).next_link() };
        }
    }

    /// Returns a reference to the element after the cursor, or `None` if there is none.
    pub fn peek_next(&self) -> Option<&T> {
        if self.is_end() {
            None
        } else {
            unsafe { (*self.link).next.map(|node| &(*node.as_ptr()).value) }
        }
    }

    fn node(&self) -> Option<*mut Node<T>> {
        (!self.is_end() && !self.is_before_begin()).then(|| self.link.cast())
    }

    fn next_link(&self) -> *mut Link<T> {
        if self.is_end() {
            ptr::null_mut()
        } else {
            unsafe { (*self.link).next_link() }
        }
    }
}

impl<'a, T> BasicCursor<'a, T, Shared> {
    /// Returns a reference to the element the cursor points to, with the lifetime of the list.
    pub fn into_ref(self) -> Option<&'a T> {
        self.node().map(|node| unsafe { &(*node).value })
    }
}

impl<'a, T> BasicCursor<'a, T, Exclusive> {
    /// Returns a read-only cursor to the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        BasicCursor::new(self.list, self.link)
    }

    /// Removes the element after the cursor and returns a cursor to the position that now
    /// follows this cursor.
    ///
    /// Nothing is removed if the cursor has no next element, and the returned cursor then points
    /// to the end of the list.
    /// The cursor itself does not move.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn erase_after(&mut self) -> CursorMut<'_, T> {
        drop(self.remove_after());
        BasicCursor::new(self.list, self.next_link())
    }

    /// Returns a mutable reference to the element the cursor points to, or `None` if the cursor
    /// points to the position before the first element or to the end of the list.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.node().map(|node| unsafe { &mut (*node).value })
    }

    /// Inserts an element after the cursor and returns a cursor pointing to it.
    ///
    /// The cursor itself does not move, so inserting repeatedly at the same cursor puts the
    /// elements in reverse order.
    ///
    /// This operation computes in *O*(*1*) time.
    ///
    /// # Panics
    ///
    /// Panics if the cursor points to the end of the list.
    pub fn insert_after(&mut self, value: T) -> CursorMut<'_, T> {
        assert!(
            !self.is_end(),
            "insert_after called on the end position of a ForwardList"
        );

        let node = unsafe { ForwardList::link_after(self.list.as_ptr(), self.link, value) };
        BasicCursor::new(self.list, node.as_ptr().cast())
    }

    /// Returns a cursor to the same position that borrows from this one.
    pub fn reborrow(&mut self) -> CursorMut<'_, T> {
        BasicCursor::new(self.list, self.link)
    }

    /// Removes the element after the cursor and returns it, or `None` if there is none.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn remove_after(&mut self) -> Option<T> {
        if self.is_end() {
            None
        } else {
            unsafe { ForwardList::unlink_after(self.list.as_ptr(), self.link) }
        }
    }
}

impl<'a, T> Clone for BasicCursor<'a, T, Shared> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for BasicCursor<'a, T, Shared> {}

impl<'a, T, A> fmt::Debug for BasicCursor<'a, T, A>
where
    T: fmt::Debug,
    A: Access,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_before_begin() {
            f.write_str("BasicCursor(before_begin)")
        } else if self.is_end() {
            f.write_str("BasicCursor(end)")
        } else {
            f.debug_tuple("BasicCursor").field(&self.get()).finish()
        }
    }
}

impl<'a, T> From<BasicCursor<'a, T, Exclusive>> for BasicCursor<'a, T, Shared> {
    fn from(cursor: BasicCursor<'a, T, Exclusive>) -> Self {
        BasicCursor::new(cursor.list, cursor.link)
    }
}

impl<'a, 'b, T, A, B> PartialEq<BasicCursor<'b, T, B>> for BasicCursor<'a, T, A>
where
    A: Access,
    B: Access,
{
    fn eq(&self, other: &BasicCursor<'b, T, B>) -> bool {
        self.link == other.link
    }
}

impl<'a, T, A> Eq for BasicCursor<'a, T, A> where A: Access {}

// A cursor may hand out `&T` and, for `CursorMut`, `&mut T` and owned `T` values.
unsafe impl<'a, T, A> Send for BasicCursor<'a, T, A>
where
    T: Send + Sync,
    A: Access,
{
}

unsafe impl<'a, T, A> Sync for BasicCursor<'a, T, A>
where
    T: Sync,
    A: Access,
{
}

impl<T> ForwardList<T> {
    /// Returns a read-only cursor pointing to the position before the first element.
    pub fn before_begin(&self) -> Cursor<'_, T> {
        let list = NonNull::from(self);
        BasicCursor::new(list, unsafe { ForwardList::head_link(list.as_ptr()) })
    }

    /// Returns a cursor pointing to the position before the first element.
    ///
    /// Inserting after this position inserts at the front of the list,
    /// erasing after it removes the first element.
    pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        let list = NonNull::from(self);
        BasicCursor::new(list, unsafe { ForwardList::head_link(list.as_ptr()) })
    }

    /// Returns a read-only cursor pointing to the first element, or to the end if the list is
    /// empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        BasicCursor::new(NonNull::from(self), self.head.next_link())
    }

    /// Returns a cursor pointing to the first element, or to the end if the list is empty.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let first = self.head.next_link();
        BasicCursor::new(NonNull::from(self), first)
    }

    /// Returns a read-only cursor pointing to the end of the list.
    pub fn end(&self) -> Cursor<'_, T> {
        BasicCursor::new(NonNull::from(self), ptr::null_mut())
    }

    /// Removes the element after `position`, see [`CursorMut::erase_after`].
    pub fn erase_after<'c>(position: &'c mut CursorMut<'_, T>) -> CursorMut<'c, T> {
        position.erase_after()
    }

    /// Inserts an element after `position`, see [`CursorMut::insert_after`].
    pub fn insert_after<'c>(position: &'c mut CursorMut<'_, T>, value: T) -> CursorMut<'c, T> {
        position.insert_after(value)
    }
}
