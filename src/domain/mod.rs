// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the configuration graph and its invariants.
//!
//! This module contains the core types of the configuration object model:
//! the [`Context`] that owns a whole configuration, the [`Section`]s and
//! [`Group`]s it is made of, and the ordered [`Properties`] stores they
//! carry. It is independent of any textual format and of the pipeline
//! runtime that consumes the finished graph.

pub mod context;
pub mod dump;
pub mod errors;
pub mod meta;
pub mod properties;
pub mod section;

// Re-export commonly used types
pub use context::{Categories, Context, KvPair};
pub use errors::{ConfigError, Result};
pub use properties::{Properties, Property};
pub use section::{Group, Section, SectionId, SectionKind};
