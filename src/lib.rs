// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration object model for a telemetry/log processing pipeline.
//!
//! This crate provides the typed configuration graph a pipeline runs from —
//! sections, nested groups, ordered key/value properties, meta-directives and
//! environment bindings — together with the reconstruction engine that
//! deep-clones a graph into a fully owned copy for safe hot-reload.
//!
//! # Architecture
//!
//! The crate is split into three layers:
//!
//! - **Domain Layer**: the graph types and their invariants ([`Context`],
//!   [`Section`], [`Group`], [`Properties`], errors)
//! - **Ports**: trait boundaries for external collaborators
//!   ([`ConfigFormat`] for textual format parsers)
//! - **Service**: reload orchestration — [`reconstruct`] and the
//!   [`LiveConfig`] atomic handoff
//!
//! # Borrowed vs. owned strings
//!
//! Format parsers may populate a [`Context`] with string *views* borrowed
//! from their input buffer (`Context<'a>` where `'a` is the buffer's
//! lifetime), avoiding per-token allocation. Before such a graph can outlive
//! the buffer — in particular, before it becomes the live configuration
//! across a reload — it must pass through [`reconstruct`], which produces a
//! `Context<'static>` whose every string has independent storage.
//!
//! # Quick Start
//!
//! ```rust
//! use pipecfg::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let mut ctx = Context::new();
//! let service = ctx.create_section("SERVICE", SectionKind::Service)?;
//! ctx.section_mut(service).properties_mut().add("flush", "1")?;
//!
//! let input = ctx.create_section("tail", SectionKind::Input)?;
//! ctx.section_mut(input).properties_mut().add("path", "/var/log/syslog")?;
//!
//! // Detach the graph from whatever produced it.
//! let owned = pipecfg::service::reconstruct(&ctx)?;
//! assert_eq!(owned.sections().len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! [`Context`]: domain::Context
//! [`Section`]: domain::Section
//! [`Group`]: domain::Group
//! [`Properties`]: domain::Properties
//! [`ConfigFormat`]: ports::ConfigFormat
//! [`reconstruct`]: service::reconstruct()
//! [`LiveConfig`]: service::LiveConfig

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for
/// convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, Context, Group, KvPair, Properties, Property, Result, Section, SectionId,
        SectionKind,
    };
    pub use crate::ports::ConfigFormat;
    pub use crate::service::{reconstruct, LiveConfig, ReconstructError};
}
