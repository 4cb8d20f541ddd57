// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_std]

extern crate alloc;

// Panic-safety tests need `std::panic::catch_unwind`.
#[cfg(test)]
extern crate std;

pub mod list;
mod private;
mod traits;

pub use traits::*;
