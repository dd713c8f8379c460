// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer: reload orchestration.
//!
//! This module hosts the two pieces a hot-reload is built from:
//! [`reconstruct()`], which deep-clones a (possibly buffer-bound) context into
//! a fully owned one, and [`LiveConfig`], which holds the currently live
//! context and swaps it atomically when a reload succeeds.

pub mod live;
pub mod reconstruct;

pub use live::LiveConfig;
pub use reconstruct::{reconstruct, ReconstructError};
