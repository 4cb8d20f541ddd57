// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

use alloc::boxed::Box;

/// The link part shared by the sentinel head and every node.
///
/// As [`Node`] is `#[repr(C)]` with a `Link` as its first field, a pointer to a node can be
/// reinterpreted as a pointer to its link and back.
/// This lets a position reference the sentinel and real nodes alike.
#[repr(C)]
pub(crate) struct Link<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
}

impl<T> Link<T> {
    /// Returns the link of the next node, or null if there is none.
    pub(crate) fn next_link(&self) -> *mut Link<T> {
        self.next.map_or(ptr::null_mut(), |node| node.as_ptr().cast())
    }
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) link: Link<T>,
    pub(crate) value: T,
}

impl<T> Node<T> {
    fn alloc(value: T, next: Option<NonNull<Node<T>>>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self {
            link: Link { next },
            value,
        })))
    }
}

/// A singly linked list that owns its elements.
///
/// The list consists of a sentinel head, which holds no element, and a chain of boxed nodes.
/// It keeps track of its length, so that [`len`](Self::len) computes in *O*(*1*) time.
///
/// See the [module-level documentation](crate::list) for more details.
pub struct ForwardList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
    pub(crate) marker: PhantomData<Box<Node<T>>>,
}

impl<T> ForwardList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        Self {
            head: Link { next: None },
            len: 0,
            marker: PhantomData,
        }
    }

    /// Removes all elements from the list, deallocating their memory.
    ///
    /// The sentinel head stays in place and the list can be reused afterwards.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn clear(&mut self) {
        // Make the list appear empty before deallocating any element.
        // If the `Drop` handler of an element panics, the `Drop` handler of `ForwardList`
        // won't find any elements, and thereby it won't drop any element twice.
        let mut current = self.head.next.take();
        self.len = 0;

        while let Some(node) = current {
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            current = node.link.next;
            drop(node);
        }
    }

    /// Provides a reference to the first element, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn front(&self) -> Option<&T> {
        unsafe { self.head.next.map(|node| &(*node.as_ptr()).value) }
    }

    /// Provides a mutable reference to the first element, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        unsafe { self.head.next.map(|node| &mut (*node.as_ptr()).value) }
    }

    /// Returns `true` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements in the list.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes the first element from the list and returns it.
    ///
    /// Use [`try_pop_front`](Self::try_pop_front) if the list may be empty.
    ///
    /// This operation computes in *O*(*1*) time.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn pop_front(&mut self) -> T {
        match self.try_pop_front() {
            Some(value) => value,
            None => panic!("pop_front called on an empty ForwardList"),
        }
    }

    /// Appends an element to the front of the list.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn push_front(&mut self, value: T) {
        let list: *mut Self = self;

        unsafe {
            Self::link_after(list, Self::head_link(list), value);
        }
    }

    /// Retains only the elements specified by the predicate, passing a mutable reference to it.
    ///
    /// In other words, remove all elements `e` for which `f(&mut e)` returns `false`.
    /// This method operates in place, visiting each element exactly once in the original order,
    /// and preserves the order of the retained elements.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        let list: *mut Self = self;

        unsafe {
            let mut previous = Self::head_link(list);

            while let Some(current) = (*previous).next {
                if f(&mut (*current.as_ptr()).value) {
                    previous = current.as_ptr().cast();
                } else {
                    drop(Self::unlink_after(list, previous));
                }
            }
        }
    }

    /// Swaps the elements of this list with those of `other`.
    ///
    /// Only the links of the sentinel heads and the lengths are exchanged, no element is moved.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.head.next, &mut other.head.next);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Removes the first element from the list and returns it, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn try_pop_front(&mut self) -> Option<T> {
        let list: *mut Self = self;
        unsafe { Self::unlink_after(list, Self::head_link(list)) }
    }

    /// Returns a pointer to the sentinel head, interpreted as a [`Link`].
    pub(crate) unsafe fn head_link(list: *mut Self) -> *mut Link<T> {
        ptr::addr_of_mut!((*list).head)
    }

    /// Allocates a new node for `value` and links it right after `link`.
    ///
    /// `link` must be the sentinel head of `list` or the link of one of its nodes.
    pub(crate) unsafe fn link_after(
        list: *mut Self,
        link: *mut Link<T>,
        value: T,
    ) -> NonNull<Node<T>> {
        debug_assert!(!link.is_null());

        let node = Node::alloc(value, (*link).next);
        (*link).next = Some(node);
        (*list).len += 1;

        node
    }

    /// Appends all values of `iter` after `tail`, which must be the last link of `list`.
    pub(crate) unsafe fn link_all_after<I>(list: *mut Self, mut tail: *mut Link<T>, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            tail = Self::link_after(list, tail, value).as_ptr().cast();
        }
    }

    /// Returns the link of the last node, or the sentinel head if the list is empty.
    ///
    /// This operation computes in *O*(*n*) time.
    pub(crate) unsafe fn tail_link(list: *mut Self) -> *mut Link<T> {
        let mut tail = Self::head_link(list);

        while let Some(next) = (*tail).next {
            tail = next.as_ptr().cast();
        }

        tail
    }

    /// Unlinks the node following `link`, deallocates it and returns its value.
    /// Returns `None` if `link` has no successor.
    ///
    /// `link` must be the sentinel head of `list` or the link of one of its nodes.
    pub(crate) unsafe fn unlink_after(list: *mut Self, link: *mut Link<T>) -> Option<T> {
        debug_assert!(!link.is_null());

        let node = Box::from_raw((*link).next?.as_ptr());
        (*link).next = node.link.next;
        debug_assert!((*list).len > 0);
        (*list).len -= 1;

        Some(node.value)
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// The list exclusively owns all of its nodes.
unsafe impl<T: Send> Send for ForwardList<T> {}
unsafe impl<T: Sync> Sync for ForwardList<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::Cell;

    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_clear() {
        let mut list = ForwardList::new();

        for i in 0..10 {
            list.push_front(i);
        }

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.front().is_none());

        // The sentinel head is still usable.
        list.push_front(42);
        assert_eq!(list.len(), 1);
        assert_eq!(list.front(), Some(&42));
    }

    #[test]
    fn test_covariance() {
        fn shorten<'a>(list: ForwardList<&'static str>) -> ForwardList<&'a str> {
            list
        }

        fn shorten_ref<'a, 'b>(list: &'b ForwardList<&'static str>) -> &'b ForwardList<&'a str> {
            list
        }

        let list = ForwardList::from(["a", "b"]);
        assert_eq!(shorten_ref(&list).len(), 2);

        let local = alloc::string::String::from("c");
        let mut list = shorten(list);
        list.push_front(&local);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["c", "a", "b"]);
    }

    #[test]
    fn test_drop_releases_all_elements() {
        let drops = Rc::new(Cell::new(0));

        {
            let mut list = ForwardList::new();
            for _ in 0..10 {
                list.push_front(DropCounter(drops.clone()));
            }

            drop(list.pop_front());
            assert_eq!(drops.get(), 1);
        }

        assert_eq!(drops.get(), 10);

        let mut list = ForwardList::new();
        for _ in 0..5 {
            list.push_front(DropCounter(drops.clone()));
        }
        list.clear();
        assert_eq!(drops.get(), 15);
    }

    #[test]
    fn test_front() {
        let mut list = ForwardList::new();
        assert!(list.front().is_none());
        assert!(list.front_mut().is_none());

        for i in 0..=3 {
            list.push_front(i);
        }

        assert_eq!(list.front(), Some(&3));

        *list.front_mut().unwrap() = 30;
        assert_eq!(list.front(), Some(&30));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_pop_front() {
        let mut list = ForwardList::new();

        for i in 0..10 {
            list.push_front(i);
        }

        for i in (0..10).rev() {
            assert_eq!(list.len(), i + 1);
            assert_eq!(list.pop_front(), i);
        }

        assert!(list.is_empty());
        assert!(list.try_pop_front().is_none());
    }

    #[test]
    #[should_panic(expected = "empty ForwardList")]
    fn test_pop_front_empty() {
        let mut list = ForwardList::<i32>::new();
        list.pop_front();
    }

    #[test]
    fn test_push_front() {
        let mut list = ForwardList::new();

        list.push_front(3);
        list.push_front(2);
        list.push_front(1);

        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn test_retain() {
        let mut list = ForwardList::new();

        for i in 0..10 {
            list.push_front(i);
        }

        // Keep only the even elements.
        list.retain(|value| *value % 2 == 0);

        assert_eq!(list.len(), 5);

        for (i, value) in (0..=8).rev().step_by(2).zip(list.iter()) {
            assert_eq!(i, *value);
        }

        // Keep only the first and last of the remaining elements.
        list.retain(|value| *value == 8 || *value == 0);

        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&8));
        assert_eq!(iter.next(), Some(&0));
        assert!(matches!(iter.next(), None));

        list.retain(|_| false);
        assert!(list.is_empty());
    }

    #[test]
    fn test_swap() {
        let mut a = ForwardList::from([1, 2, 3]);
        let mut b = ForwardList::from([4, 5]);

        a.swap(&mut b);

        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 3);
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), [4, 5]);
        assert_eq!(b.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);

        // Mutating one list after the swap must not show up in the other one.
        a.push_front(0);
        b.clear();
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), [0, 4, 5]);
        assert!(b.is_empty());

        let mut empty = ForwardList::new();
        a.swap(&mut empty);
        assert!(a.is_empty());
        assert_eq!(empty.len(), 3);
    }
}
