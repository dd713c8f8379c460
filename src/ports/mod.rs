// SPDX-License-Identifier: MIT OR Apache-2.0

//! Port traits: interface boundaries with external collaborators.
//!
//! The object model imposes no format-specific behavior; textual format
//! parsers sit behind the [`ConfigFormat`] trait and populate a context
//! through the domain creation operations.

pub mod format;

pub use format::ConfigFormat;
