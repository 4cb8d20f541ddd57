// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::private::Sealed;

/// Designates how a [`BasicCursor`] may access the element it points to.
///
/// This trait is sealed and only implemented by the empty enums [`Shared`] and [`Exclusive`].
/// They are never instantiated and only serve as the `A` type parameter of [`BasicCursor`],
/// so that a single cursor implementation provides both the read-only and the mutable flavor.
///
/// [`BasicCursor`]: crate::list::BasicCursor
pub trait Access: Sealed {}

/// Read-only access, as provided by [`Cursor`].
///
/// [`Cursor`]: crate::list::Cursor
pub enum Shared {}
impl Access for Shared {}
impl Sealed for Shared {}

/// Mutable access, as provided by [`CursorMut`].
///
/// A cursor of this flavor holds the exclusive borrow of its list and can therefore also
/// insert and erase elements.
///
/// [`CursorMut`]: crate::list::CursorMut
pub enum Exclusive {}
impl Access for Exclusive {}
impl Sealed for Exclusive {}
