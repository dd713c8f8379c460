// SPDX-License-Identifier: MIT OR Apache-2.0

//! Format parser trait definition.
//!
//! This module defines the [`ConfigFormat`] trait, the boundary at which
//! textual configuration formats (classic key/value syntax, YAML, ...) hand
//! their input to the object model. A parser walks its input and builds a
//! [`Context`] through [`Context::create_section`],
//! [`Section::create_group`], [`Properties::add`], [`Context::add_meta`] and
//! [`Context::add_env`]; the model only enforces the trimming, emptiness and
//! singleton rules.
//!
//! [`Context::create_section`]: crate::domain::Context::create_section
//! [`Section::create_group`]: crate::domain::Section::create_group
//! [`Properties::add`]: crate::domain::Properties::add
//! [`Context::add_meta`]: crate::domain::Context::add_meta
//! [`Context::add_env`]: crate::domain::Context::add_env

use crate::domain::{Context, Result};

/// A trait for textual configuration format parsers.
///
/// The lifetime `'a` is the lifetime of the input buffer: a parser is free to
/// populate the returned [`Context`] with string views borrowed from `input`
/// (zero-copy), which is why the context it returns cannot outlive the
/// buffer. Callers that need the graph to persist — in particular across a
/// hot-reload — pass it through
/// [`reconstruct`](crate::service::reconstruct()) first.
///
/// # Examples
///
/// A minimal line-oriented parser:
///
/// ```rust
/// use pipecfg::prelude::*;
///
/// struct LineFormat;
///
/// impl<'a> ConfigFormat<'a> for LineFormat {
///     fn name(&self) -> &str {
///         "line"
///     }
///
///     fn parse(&self, input: &'a str) -> Result<Context<'a>> {
///         let mut ctx = Context::new();
///         for line in input.lines().filter(|l| !l.trim().is_empty()) {
///             ctx.add_meta(line)?;
///         }
///         Ok(ctx)
///     }
/// }
///
/// let ctx = LineFormat.parse("@SET a=1\n@SET b=2\n").unwrap();
/// assert_eq!(ctx.metas().len(), 2);
/// ```
pub trait ConfigFormat<'a> {
    /// Returns the name of this format, used in logs and error messages.
    ///
    /// It should be a short identifier like "classic" or "yaml".
    fn name(&self) -> &str;

    /// Parses `input` into a configuration context.
    ///
    /// Whether a validation failure from the model (for example an empty
    /// property key in the source text) aborts the parse or is skipped is
    /// the parser's decision; the model leaves the graph unchanged either
    /// way.
    fn parse(&self, input: &'a str) -> Result<Context<'a>>;
}
