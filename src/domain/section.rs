// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sections and groups: the named blocks of the configuration graph.
//!
//! A [`Section`] is a top-level configuration block with a category tag
//! ([`SectionKind`]) that governs how the owning context classifies it.
//! A [`Group`] is a named sub-block inside a section, used to structurally
//! group related properties (for example per-header or per-label blocks).

use crate::domain::errors::{ConfigError, Result};
use crate::domain::properties::{trim_cow, Properties};
use serde::Serialize;
use std::borrow::Cow;

/// The category of a [`Section`].
///
/// The category determines which per-category sequence of the owning context
/// the section lands in, and whether creation is singleton (`Service`) or
/// multi-instance (everything else).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// The pipeline-wide service block. At most one per context.
    Service,
    /// An input plugin definition.
    Input,
    /// An output plugin definition.
    Output,
    /// A filter plugin definition.
    Filter,
    /// A custom plugin definition.
    Custom,
    /// A parser definition.
    Parser,
    /// A multiline parser definition.
    MultilineParser,
    /// Any block the format parser did not recognize as one of the above.
    Other,
}

impl SectionKind {
    /// Every multi-instance kind, in the order category views are walked.
    pub const NON_SERVICE: [SectionKind; 7] = [
        SectionKind::Input,
        SectionKind::Output,
        SectionKind::Filter,
        SectionKind::Custom,
        SectionKind::Parser,
        SectionKind::MultilineParser,
        SectionKind::Other,
    ];

    /// A short lowercase label, used in the diagnostics dump and in logs.
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Service => "service",
            SectionKind::Input => "input",
            SectionKind::Output => "output",
            SectionKind::Filter => "filter",
            SectionKind::Custom => "custom",
            SectionKind::Parser => "parser",
            SectionKind::MultilineParser => "multiline_parser",
            SectionKind::Other => "other",
        }
    }
}

/// A stable handle to a section inside its owning [`Context`].
///
/// Ids index the context's master section arena and stay valid for the whole
/// life of that context (sections are never removed individually). An id is
/// only meaningful for the context that issued it.
///
/// [`Context`]: crate::domain::Context
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SectionId(pub(crate) usize);

impl SectionId {
    /// Returns the raw arena index.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A named sub-block of a [`Section`] owning its own property store.
///
/// Groups are created only through [`Section::create_group`] and live in the
/// section's group sequence in creation order. Duplicate names are allowed
/// and produce distinct groups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Group<'a> {
    name: Cow<'a, str>,
    properties: Properties<'a>,
}

impl<'a> Group<'a> {
    /// Returns the trimmed, non-empty group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the group's property store.
    pub fn properties(&self) -> &Properties<'a> {
        &self.properties
    }

    /// Returns the group's property store for mutation.
    pub fn properties_mut(&mut self) -> &mut Properties<'a> {
        &mut self.properties
    }
}

/// A named, categorized top-level configuration block.
///
/// A section owns an ordered [`Properties`] store and an ordered sequence of
/// [`Group`]s. Sections are created only through
/// [`Context::create_section`](crate::domain::Context::create_section) so the
/// owning context can keep its category views consistent.
///
/// # Examples
///
/// ```
/// use pipecfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let mut ctx = Context::new();
/// let id = ctx.create_section("tail", SectionKind::Input)?;
/// let section = ctx.section_mut(id);
/// section.properties_mut().add("path", "/var/log/syslog")?;
/// let group = section.create_group("headers")?;
/// group.properties_mut().add("X-Env", "prod")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section<'a> {
    name: Cow<'a, str>,
    kind: SectionKind,
    properties: Properties<'a>,
    groups: Vec<Group<'a>>,
}

impl<'a> Section<'a> {
    /// Builds a section with an already validated name. Creation goes through
    /// the owning context, which enforces trimming and the singleton rule.
    pub(crate) fn new(name: Cow<'a, str>, kind: SectionKind) -> Self {
        Self {
            name,
            kind,
            properties: Properties::new(),
            groups: Vec::new(),
        }
    }

    /// Returns the trimmed, non-empty section name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the section's category.
    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    /// Returns the section's own property store.
    pub fn properties(&self) -> &Properties<'a> {
        &self.properties
    }

    /// Returns the section's property store for mutation.
    pub fn properties_mut(&mut self) -> &mut Properties<'a> {
        &mut self.properties
    }

    /// Appends a new group to this section.
    ///
    /// The name is trimmed; an empty result fails with
    /// [`ConfigError::InvalidName`] and leaves the group sequence unchanged.
    /// There is no singleton behavior: a duplicate name yields a new,
    /// distinct group appended in call order.
    pub fn create_group(&mut self, name: impl Into<Cow<'a, str>>) -> Result<&mut Group<'a>> {
        let name = trim_cow(name.into());
        if name.is_empty() {
            return Err(ConfigError::InvalidName { entity: "group" });
        }
        let idx = self.groups.len();
        self.groups.push(Group {
            name,
            properties: Properties::new(),
        });
        Ok(&mut self.groups[idx])
    }

    /// Returns the section's groups in creation order.
    pub fn groups(&self) -> &[Group<'a>] {
        &self.groups
    }

    /// Returns the section's groups for mutation, in creation order.
    pub fn groups_mut(&mut self) -> &mut [Group<'a>] {
        &mut self.groups
    }
}
