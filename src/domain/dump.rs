// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic textual rendering of a context.
//!
//! The dump is a diagnostics aid for operators and for verification in
//! tests: meta-directives first, then environment bindings, then every
//! section in master order with its properties and nested groups. The
//! rendering is a pure function of the context's stored order, so two
//! contexts with equal graphs dump identically.

use crate::domain::context::Context;
use crate::domain::section::Section;
use std::fmt;

const INDENT: &str = "    ";

/// A [`Display`](fmt::Display) wrapper rendering a context as text.
///
/// Obtained through [`Context::dump`]. The output is stable across runs and
/// shared between a source context and its reconstruction.
///
/// # Examples
///
/// ```
/// use pipecfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let mut ctx = Context::new();
/// ctx.add_meta("@SET a=1")?;
/// let id = ctx.create_section("tail", SectionKind::Input)?;
/// ctx.section_mut(id).properties_mut().add("path", "/var/log/syslog")?;
///
/// let text = ctx.dump().to_string();
/// assert!(text.contains("@SET a=1"));
/// assert!(text.contains("[tail]"));
/// # Ok(())
/// # }
/// ```
pub struct Dump<'c, 'a> {
    context: &'c Context<'a>,
}

impl fmt::Display for Dump<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for meta in self.context.metas() {
            writeln!(f, "@{} {}", meta.key, meta.value)?;
        }
        for binding in self.context.env() {
            writeln!(f, "env {}={}", binding.key, binding.value)?;
        }
        for section in self.context.sections() {
            write_section(f, section)?;
        }
        Ok(())
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, section: &Section<'_>) -> fmt::Result {
    writeln!(f, "[{}] ({})", section.name(), section.kind().label())?;
    for property in section.properties() {
        writeln!(f, "{INDENT}{} {}", property.key, property.value)?;
    }
    for group in section.groups() {
        writeln!(f, "{INDENT}[{}]", group.name())?;
        for property in group.properties() {
            writeln!(f, "{INDENT}{INDENT}{} {}", property.key, property.value)?;
        }
    }
    Ok(())
}

impl<'a> Context<'a> {
    /// Returns a displayable diagnostics rendering of this context.
    pub fn dump(&self) -> Dump<'_, 'a> {
        Dump { context: self }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{Context, SectionKind};

    fn sample() -> Context<'static> {
        let mut ctx = Context::new();
        ctx.add_meta("@SET a=1").unwrap();
        ctx.add_env("HOST", "localhost");
        let service = ctx.create_section("SERVICE", SectionKind::Service).unwrap();
        ctx.section_mut(service)
            .properties_mut()
            .add("flush", "1")
            .unwrap();
        let input = ctx.create_section("tail", SectionKind::Input).unwrap();
        let section = ctx.section_mut(input);
        section.properties_mut().add("path", "/var/log/syslog").unwrap();
        let group = section.create_group("processors").unwrap();
        group.properties_mut().add("name", "record_modifier").unwrap();
        ctx
    }

    #[test]
    fn test_dump_renders_every_layer() {
        let text = sample().dump().to_string();
        let expected = "\
@SET a=1
env HOST=localhost
[SERVICE] (service)
    flush 1
[tail] (input)
    path /var/log/syslog
    [processors]
        name record_modifier
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_dump_is_deterministic() {
        assert_eq!(sample().dump().to_string(), sample().dump().to_string());
    }
}
