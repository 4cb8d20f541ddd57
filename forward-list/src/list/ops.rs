// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FromIterator;

use super::base::ForwardList;

/// Swaps the elements of two lists, see [`ForwardList::swap`].
pub fn swap<T>(a: &mut ForwardList<T>, b: &mut ForwardList<T>) {
    a.swap(b);
}

impl<T> Clone for ForwardList<T>
where
    T: Clone,
{
    /// This operation computes in *O*(*n*) time.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Replaces the elements of this list with clones of the elements of `source`.
    ///
    /// The clones are collected in a separate list, which is only swapped into place once it is
    /// complete.
    /// If cloning any element panics, `self` is left untouched.
    ///
    /// This operation computes in *O*(*n*) time.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> fmt::Debug for ForwardList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T> Extend<T> for ForwardList<T> {
    /// Appends all elements of `iter` to the back of the list.
    ///
    /// This operation computes in *O*(*n* + *m*) time, as it first needs to find the last
    /// element.
    /// If `iter` panics, the elements appended so far stay in the list.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let list: *mut Self = self;

        unsafe {
            let tail = Self::tail_link(list);
            Self::link_all_after(list, tail, iter);
        }
    }
}

impl<'a, T> Extend<&'a T> for ForwardList<T>
where
    T: 'a + Copy,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_iter(values)
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    /// Builds the list in iteration order.
    ///
    /// If `iter` panics, the elements collected so far are dropped along with the partial list.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let ptr: *mut Self = &mut list;

        unsafe {
            Self::link_all_after(ptr, Self::head_link(ptr), iter);
        }

        list
    }
}

impl<T> Hash for ForwardList<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);

        for value in self {
            value.hash(state);
        }
    }
}

impl<T> PartialEq for ForwardList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T> Eq for ForwardList<T> where T: Eq {}

impl<T> PartialOrd for ForwardList<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T> Ord for ForwardList<T>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}
