// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deep reconstruction of a configuration context.
//!
//! Format parsers are allowed to build graphs whose strings are views into
//! an externally owned, short-lived text buffer. Before such a graph can
//! become the long-lived live configuration — the whole point of a
//! hot-reload — it has to be re-expressed with fully owned strings.
//! [`reconstruct`] is that single load-bearing operation: a structural
//! traversal that allocates fresh entities at every level and never aliases
//! storage owned by the source context.

use crate::domain::{ConfigError, Context, SectionKind};
use std::borrow::Cow;
use thiserror::Error;
use tracing::{debug, trace};

/// Error raised when a reconstruction walk cannot complete.
///
/// Reconstruction is all-or-nothing: on error the partially built target is
/// simply dropped by the engine and never reaches the caller, and the source
/// context is untouched, so a failed reload can fall back to the previous
/// configuration without cleanup.
///
/// A copy failure means a structural invariant of the source graph did not
/// hold (an empty name or key survived into the graph), which cannot happen
/// for graphs built through this crate's API.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReconstructError {
    /// A domain-level failure while copying one entity of the graph.
    #[error("Reconstruction failed while copying {location}: {source}")]
    Copy {
        /// Which part of the walk failed, e.g. `section 'tail'`.
        location: String,
        /// The underlying domain error.
        #[source]
        source: ConfigError,
    },
}

fn owned(s: &Cow<'_, str>) -> Cow<'static, str> {
    Cow::Owned(s.as_ref().to_string())
}

fn at(location: impl Into<String>) -> impl FnOnce(ConfigError) -> ReconstructError {
    let location = location.into();
    move |source| ReconstructError::Copy { location, source }
}

/// Deep-clones `source` into a new, fully owned, independent context.
///
/// The walk copies, in order: every meta-directive, every environment
/// binding, the SERVICE section (if present) with all its properties, then
/// every other category in fixed kind order and per-category stored order —
/// each section with its properties and its groups with theirs. Every string
/// in the returned `Context<'static>` has independent storage; nothing
/// references the source context or any parse buffer the source borrowed
/// from.
///
/// The source is only read and stays fully valid and destroyable whatever
/// the outcome. There is no partial-success state: the caller either gets an
/// equivalent graph or an error and nothing else.
///
/// # Examples
///
/// ```
/// use pipecfg::prelude::*;
///
/// # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
/// let owned: Context<'static> = {
///     let buffer = String::from("tail");
///     let mut parsed = Context::new();
///     parsed.create_section(buffer.as_str(), SectionKind::Input)?;
///     reconstruct(&parsed)?
///     // `buffer` and `parsed` are dropped here; `owned` survives them.
/// };
/// assert_eq!(owned.sections()[0].name(), "tail");
/// # Ok(())
/// # }
/// ```
pub fn reconstruct(source: &Context<'_>) -> Result<Context<'static>, ReconstructError> {
    let mut target = Context::new();

    for meta in source.metas() {
        trace!(command = %meta.key, "copying meta directive");
        target
            .append_meta(owned(&meta.key), owned(&meta.value))
            .map_err(at(format!("meta directive '@{}'", meta.key)))?;
    }

    for binding in source.env() {
        target.add_env(owned(&binding.key), owned(&binding.value));
    }

    if let Some(service) = source.service() {
        trace!(name = service.name(), "copying service section");
        let id = target
            .create_section(owned_name(service.name()), SectionKind::Service)
            .map_err(at(format!("service section '{}'", service.name())))?;
        copy_properties(service.properties(), &mut target, id, service.name())?;
    }

    for kind in SectionKind::NON_SERVICE {
        for section in source.sections_of(kind) {
            trace!(name = section.name(), kind = kind.label(), "copying section");
            let id = target
                .create_section(owned_name(section.name()), kind)
                .map_err(at(format!("section '{}'", section.name())))?;
            copy_properties(section.properties(), &mut target, id, section.name())?;

            for group in section.groups() {
                let target_section = target.section_mut(id);
                let target_group = target_section
                    .create_group(owned_name(group.name()))
                    .map_err(at(format!(
                        "group '{}' of section '{}'",
                        group.name(),
                        section.name()
                    )))?;
                for property in group.properties() {
                    target_group
                        .properties_mut()
                        .add(owned(&property.key), owned(&property.value))
                        .map_err(at(format!(
                            "property in group '{}' of section '{}'",
                            group.name(),
                            section.name()
                        )))?;
                }
            }
        }
    }

    debug!(
        sections = target.sections().len(),
        metas = target.metas().len(),
        env = target.env().len(),
        "reconstructed configuration context"
    );
    Ok(target)
}

fn owned_name(name: &str) -> Cow<'static, str> {
    Cow::Owned(name.to_string())
}

fn copy_properties(
    properties: &crate::domain::Properties<'_>,
    target: &mut Context<'static>,
    id: crate::domain::SectionId,
    section_name: &str,
) -> Result<(), ReconstructError> {
    let store = target.section_mut(id).properties_mut();
    for property in properties {
        // Values were trimmed on first insertion, so re-adding is a no-op
        // normalization.
        store
            .add(owned(&property.key), owned(&property.value))
            .map_err(at(format!("property in section '{section_name}'")))?;
    }
    Ok(())
}
