// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration context: owner of the whole graph.
//!
//! A [`Context`] exclusively owns every section (and transitively every group
//! and property store), every environment binding and every meta-directive of
//! one configuration instance. Sections live in a single master arena in
//! creation order; the per-category views store [`SectionId`]s into that
//! arena, so the "same section, two lists" relationship is explicit and never
//! duplicates ownership.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::meta;
use crate::domain::properties::trim_cow;
use crate::domain::section::{Section, SectionId, SectionKind};
use serde::Serialize;
use std::borrow::Cow;

/// A plain key/value pair, used for environment bindings and meta-directives.
///
/// Unlike properties, pairs are stored verbatim; any trimming happens before
/// they reach the context (meta-directive parsing trims, environment bindings
/// are taken as given).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KvPair<'a> {
    /// The pair's key.
    pub key: Cow<'a, str>,
    /// The pair's value.
    pub value: Cow<'a, str>,
}

/// The per-category `SectionId` sequences of a context.
///
/// Service is not listed here: the singleton lives in its own slot on the
/// context.
#[derive(Clone, Debug, Default, Serialize)]
struct KindIndex {
    inputs: Vec<SectionId>,
    outputs: Vec<SectionId>,
    filters: Vec<SectionId>,
    customs: Vec<SectionId>,
    parsers: Vec<SectionId>,
    multiline_parsers: Vec<SectionId>,
    others: Vec<SectionId>,
}

impl KindIndex {
    fn of(&self, kind: SectionKind) -> &[SectionId] {
        match kind {
            SectionKind::Service => &[],
            SectionKind::Input => &self.inputs,
            SectionKind::Output => &self.outputs,
            SectionKind::Filter => &self.filters,
            SectionKind::Custom => &self.customs,
            SectionKind::Parser => &self.parsers,
            SectionKind::MultilineParser => &self.multiline_parsers,
            SectionKind::Other => &self.others,
        }
    }

    fn push(&mut self, kind: SectionKind, id: SectionId) {
        match kind {
            // Service never lands in a kind sequence.
            SectionKind::Service => {}
            SectionKind::Input => self.inputs.push(id),
            SectionKind::Output => self.outputs.push(id),
            SectionKind::Filter => self.filters.push(id),
            SectionKind::Custom => self.customs.push(id),
            SectionKind::Parser => self.parsers.push(id),
            SectionKind::MultilineParser => self.multiline_parsers.push(id),
            SectionKind::Other => self.others.push(id),
        }
    }
}

/// The top-level owner of one configuration graph.
///
/// The lifetime `'a` is the lifetime of whatever text buffer the graph's
/// strings may borrow from. A context built from owned strings (or produced
/// by [`reconstruct`](crate::service::reconstruct())) is a `Context<'static>`
/// and can live arbitrarily long.
///
/// # Examples
///
/// ```
/// use pipecfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let mut ctx = Context::new();
///
/// // SERVICE is a singleton: the second request returns the first section.
/// let a = ctx.create_section("SERVICE", SectionKind::Service)?;
/// let b = ctx.create_section("SERVICE", SectionKind::Service)?;
/// assert_eq!(a, b);
///
/// // Everything else is multi-instance, even with duplicate names.
/// let x = ctx.create_section("tail", SectionKind::Input)?;
/// let y = ctx.create_section("tail", SectionKind::Input)?;
/// assert_ne!(x, y);
/// assert_eq!(ctx.sections().len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, Serialize)]
pub struct Context<'a> {
    sections: Vec<Section<'a>>,
    service: Option<SectionId>,
    kinds: KindIndex,
    env: Vec<KvPair<'a>>,
    metas: Vec<KvPair<'a>>,
}

impl<'a> Context<'a> {
    /// Creates an empty context: no service, no sections, no env bindings,
    /// no meta-directives.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a section, or returns the existing SERVICE singleton.
    ///
    /// The name is trimmed; an empty result fails with
    /// [`ConfigError::InvalidName`] and nothing is appended. For
    /// [`SectionKind::Service`], a second creation request returns the id of
    /// the existing service section and mutates nothing (the requested name
    /// is ignored in that case). For every other kind a new section is always
    /// allocated and appended to both the master sequence and its kind
    /// sequence, in call order — duplicate names included.
    pub fn create_section(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        kind: SectionKind,
    ) -> Result<SectionId> {
        let name = trim_cow(name.into());
        if name.is_empty() {
            return Err(ConfigError::InvalidName { entity: "section" });
        }
        if kind == SectionKind::Service {
            if let Some(existing) = self.service {
                return Ok(existing);
            }
        }
        let id = SectionId(self.sections.len());
        self.sections.push(Section::new(name, kind));
        if kind == SectionKind::Service {
            self.service = Some(id);
        } else {
            self.kinds.push(kind, id);
        }
        Ok(id)
    }

    /// Returns the section for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different context. Use
    /// [`try_section`](Self::try_section) for a checked lookup.
    pub fn section(&self, id: SectionId) -> &Section<'a> {
        &self.sections[id.0]
    }

    /// Returns the section for `id`, for mutation.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different context.
    pub fn section_mut(&mut self, id: SectionId) -> &mut Section<'a> {
        &mut self.sections[id.0]
    }

    /// Checked variant of [`section`](Self::section).
    pub fn try_section(&self, id: SectionId) -> Result<&Section<'a>> {
        self.sections
            .get(id.0)
            .ok_or(ConfigError::UnknownSection { id: id.0 })
    }

    /// Returns the master section sequence, in creation order.
    ///
    /// This is the superset every category view indexes into; its length is
    /// the total section count of the context.
    pub fn sections(&self) -> &[Section<'a>] {
        &self.sections
    }

    /// Returns the ids of one category's sections, in creation order.
    ///
    /// For [`SectionKind::Service`] this is always empty; the singleton is
    /// reachable through [`service`](Self::service) instead.
    pub fn section_ids_of(&self, kind: SectionKind) -> &[SectionId] {
        self.kinds.of(kind)
    }

    /// Iterates one category's sections, in creation order.
    pub fn sections_of(&self, kind: SectionKind) -> impl Iterator<Item = &Section<'a>> {
        self.kinds.of(kind).iter().map(|id| &self.sections[id.0])
    }

    /// Returns the SERVICE singleton, if one was created.
    pub fn service(&self) -> Option<&Section<'a>> {
        self.service.map(|id| &self.sections[id.0])
    }

    /// Returns the id of the SERVICE singleton, if one was created.
    pub fn service_id(&self) -> Option<SectionId> {
        self.service
    }

    /// Finds the first section whose name matches, scanning the master
    /// sequence in creation order.
    ///
    /// Comparison is ASCII case-insensitive: format parsers preserve the
    /// source spelling of section names, while lookups are usually written
    /// in lowercase.
    pub fn find_section_by_name(&self, name: &str) -> Option<SectionId> {
        self.sections
            .iter()
            .position(|s| s.name().eq_ignore_ascii_case(name))
            .map(SectionId)
    }

    /// Appends an environment binding.
    ///
    /// Bindings are append-only and duplicates are allowed; the pair is
    /// stored verbatim.
    pub fn add_env(&mut self, key: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) {
        self.env.push(KvPair {
            key: key.into(),
            value: value.into(),
        });
    }

    /// Returns the environment bindings in insertion order.
    pub fn env(&self) -> &[KvPair<'a>] {
        &self.env
    }

    /// Parses and appends a meta-directive from a raw `@COMMAND rest` line.
    ///
    /// The command token (case preserved) becomes the key, the trimmed
    /// remainder the value. Fails with [`ConfigError::InvalidMetaMarker`]
    /// when the line does not start with `@`, or
    /// [`ConfigError::InvalidName`] when the command token is empty; the
    /// directive sequence is unchanged on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipecfg::domain::Context;
    ///
    /// let mut ctx = Context::new();
    /// let directive = ctx.add_meta("@SET        a=1     ").unwrap();
    /// assert_eq!(directive.key, "SET");
    /// assert_eq!(directive.value, "a=1");
    /// ```
    pub fn add_meta(&mut self, raw_line: impl Into<Cow<'a, str>>) -> Result<&KvPair<'a>> {
        let (key, value) = meta::split_line(raw_line.into())?;
        let idx = self.metas.len();
        self.metas.push(KvPair { key, value });
        Ok(&self.metas[idx])
    }

    /// Appends an already-split meta-directive, used by the reconstruction
    /// engine to copy directives without re-rendering them as text.
    pub(crate) fn append_meta(&mut self, key: Cow<'a, str>, value: Cow<'a, str>) -> Result<()> {
        if key.trim().is_empty() {
            return Err(ConfigError::InvalidName {
                entity: "meta directive",
            });
        }
        self.metas.push(KvPair { key, value });
        Ok(())
    }

    /// Returns the meta-directives in insertion order.
    pub fn metas(&self) -> &[KvPair<'a>] {
        &self.metas
    }

    /// Returns the one-shot read-only view the pipeline builder consumes.
    pub fn categories(&self) -> Categories<'_, 'a> {
        Categories {
            service: self.service(),
            inputs: self.collect(SectionKind::Input),
            outputs: self.collect(SectionKind::Output),
            filters: self.collect(SectionKind::Filter),
            customs: self.collect(SectionKind::Custom),
            parsers: self.collect(SectionKind::Parser),
            multiline_parsers: self.collect(SectionKind::MultilineParser),
            others: self.collect(SectionKind::Other),
            env: &self.env,
            metas: &self.metas,
        }
    }

    fn collect<'c>(&'c self, kind: SectionKind) -> Vec<&'c Section<'a>> {
        self.sections_of(kind).collect()
    }
}

/// Read-only classified view of a [`Context`], consumed by the pipeline
/// builder to instantiate runtime plugin objects.
///
/// Every sequence preserves the context's creation order, and property
/// duplication inside each section is intact — the builder contract relies
/// on both.
#[derive(Debug, Serialize)]
pub struct Categories<'c, 'a> {
    /// The SERVICE singleton, if present.
    pub service: Option<&'c Section<'a>>,
    /// Input sections, in creation order.
    pub inputs: Vec<&'c Section<'a>>,
    /// Output sections, in creation order.
    pub outputs: Vec<&'c Section<'a>>,
    /// Filter sections, in creation order.
    pub filters: Vec<&'c Section<'a>>,
    /// Custom sections, in creation order.
    pub customs: Vec<&'c Section<'a>>,
    /// Parser sections, in creation order.
    pub parsers: Vec<&'c Section<'a>>,
    /// Multiline parser sections, in creation order.
    pub multiline_parsers: Vec<&'c Section<'a>>,
    /// Unclassified sections, in creation order.
    pub others: Vec<&'c Section<'a>>,
    /// Environment bindings, in insertion order.
    pub env: &'c [KvPair<'a>],
    /// Meta-directives, in insertion order.
    pub metas: &'c [KvPair<'a>],
}
