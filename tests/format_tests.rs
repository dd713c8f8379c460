// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the format-parser port.
//!
//! The real textual parsers live outside this crate; these tests implement a
//! minimal classic-style parser against [`ConfigFormat`] to exercise the
//! boundary: zero-copy population of a context from a text buffer, followed
//! by reconstruction so the graph outlives that buffer.

use pipecfg::prelude::*;

/// A tiny line-oriented format:
///
/// - `@COMMAND rest` lines become meta-directives
/// - `env KEY=VALUE` lines become environment bindings
/// - `[NAME]` starts a section (`[SERVICE]` maps to the service singleton,
///   a handful of well-known names map to their category, anything else is
///   `Other`)
/// - `  (NAME)` starts a group inside the current section
/// - `key value` lines become properties of the current group or section
struct ClassicFormat;

fn kind_for(name: &str) -> SectionKind {
    match name.to_ascii_lowercase().as_str() {
        "service" => SectionKind::Service,
        "input" => SectionKind::Input,
        "output" => SectionKind::Output,
        "filter" => SectionKind::Filter,
        "custom" => SectionKind::Custom,
        "parser" => SectionKind::Parser,
        "multiline_parser" => SectionKind::MultilineParser,
        _ => SectionKind::Other,
    }
}

impl<'a> ConfigFormat<'a> for ClassicFormat {
    fn name(&self) -> &str {
        "classic"
    }

    fn parse(&self, input: &'a str) -> Result<Context<'a>> {
        let mut ctx = Context::new();
        let mut current: Option<SectionId> = None;
        let mut in_group = false;

        for raw in input.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with('@') {
                ctx.add_meta(line)?;
            } else if let Some(binding) = line.strip_prefix("env ") {
                let (key, value) = binding.split_once('=').unwrap_or((binding, ""));
                ctx.add_env(key, value);
            } else if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                let id = ctx.create_section(name, kind_for(name))?;
                current = Some(id);
                in_group = false;
            } else if let Some(name) = line.strip_prefix('(').and_then(|l| l.strip_suffix(')')) {
                if let Some(id) = current {
                    ctx.section_mut(id).create_group(name)?;
                    in_group = true;
                }
            } else if let Some(id) = current {
                let (key, value) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
                let section = ctx.section_mut(id);
                if in_group {
                    if let Some(group) = section.groups_mut().last_mut() {
                        group.properties_mut().add(key, value)?;
                    }
                } else {
                    section.properties_mut().add(key, value)?;
                }
            }
        }
        Ok(ctx)
    }
}

const FIXTURE: &str = "
@SET tag=app
env HOST=localhost
env PORT=24224

[SERVICE]
    flush 1
    daemon off
    log_level info

[custom]
    name telemetry_agent

[input]
    name tail
    path /var/log/syslog
    (processors)
        name record_modifier
        record hostname web

[input]
    name dummy

[input]
    name mem

[filter]
    name grep
    regex key .*

[output]
    name stdout

[output]
    name forward

[extra]
    note unclassified
";

#[test]
fn classic_fixture_classifies_sections() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let cf = ClassicFormat.parse(FIXTURE).unwrap();

    assert_eq!(cf.sections().len(), 9);
    let service = cf.service().expect("fixture has a SERVICE block");
    assert_eq!(service.properties().len(), 3);

    assert_eq!(cf.section_ids_of(SectionKind::Parser).len(), 0);
    assert_eq!(cf.section_ids_of(SectionKind::MultilineParser).len(), 0);
    assert_eq!(cf.section_ids_of(SectionKind::Custom).len(), 1);
    assert_eq!(cf.section_ids_of(SectionKind::Input).len(), 3);
    assert_eq!(cf.section_ids_of(SectionKind::Filter).len(), 1);
    assert_eq!(cf.section_ids_of(SectionKind::Output).len(), 2);
    assert_eq!(cf.section_ids_of(SectionKind::Other).len(), 1);
    assert_eq!(cf.env().len(), 2);
    assert_eq!(cf.metas().len(), 1);
}

#[test]
fn classic_fixture_groups() {
    let cf = ClassicFormat.parse(FIXTURE).unwrap();

    let id = cf.find_section_by_name("input").expect("lookup by name");
    let section = cf.section(id);
    assert_eq!(section.groups().len(), 1);
    for group in section.groups() {
        assert_eq!(group.properties().len(), 2);
    }
}

#[test]
fn parsed_context_reconstructs_with_equal_shape() {
    let cf = ClassicFormat.parse(FIXTURE).unwrap();
    let new_cf = reconstruct(&cf).unwrap();

    assert_eq!(new_cf.sections().len(), 9);
    assert_eq!(new_cf.service().unwrap().properties().len(), 3);
    assert_eq!(new_cf.section_ids_of(SectionKind::Custom).len(), 1);
    assert_eq!(new_cf.section_ids_of(SectionKind::Input).len(), 3);
    assert_eq!(new_cf.section_ids_of(SectionKind::Filter).len(), 1);
    assert_eq!(new_cf.section_ids_of(SectionKind::Output).len(), 2);
    assert_eq!(new_cf.section_ids_of(SectionKind::Other).len(), 1);
    assert_eq!(new_cf.env().len(), 2);

    // Per-section shape survives, in order.
    for kind in SectionKind::NON_SERVICE {
        let pairs = cf.sections_of(kind).zip(new_cf.sections_of(kind));
        for (old, new) in pairs {
            assert_eq!(old.name(), new.name());
            assert_eq!(old.properties().len(), new.properties().len());
            assert_eq!(old.groups().len(), new.groups().len());
        }
    }
}

#[test]
fn reconstructed_context_outlives_the_parse_buffer() {
    let new_cf = {
        let buffer = FIXTURE.to_string();
        let cf = ClassicFormat.parse(&buffer).unwrap();
        reconstruct(&cf).unwrap()
        // cf and buffer dropped here
    };

    let id = new_cf.find_section_by_name("input").unwrap();
    assert_eq!(new_cf.section(id).properties().get("name"), Some("tail"));
    assert_eq!(new_cf.metas()[0].value, "tag=app");
}
