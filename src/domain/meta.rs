// SPDX-License-Identifier: MIT OR Apache-2.0

//! Meta-directive line parsing.
//!
//! Meta-directives are out-of-band instructions of the form `@COMMAND rest`,
//! for example `@SET a=1` or `@INCLUDE extra.conf`. The command token (case
//! preserved as written) becomes the stored key and everything after the
//! first run of whitespace, trimmed, becomes the value. The directives
//! themselves are interpreted elsewhere; this module only splits and
//! validates the line.

use crate::domain::errors::{ConfigError, Result};
use std::borrow::Cow;

/// The marker every meta-directive line starts with.
pub const META_MARKER: char = '@';

/// Splits a raw directive line into `(command, value)` string slices.
fn split_str(line: &str) -> Result<(&str, &str)> {
    let rest = line
        .trim_start()
        .strip_prefix(META_MARKER)
        .ok_or(ConfigError::InvalidMetaMarker)?;
    let (command, value) = match rest.find(char::is_whitespace) {
        Some(at) => (&rest[..at], rest[at..].trim()),
        None => (rest.trim_end(), ""),
    };
    if command.is_empty() {
        return Err(ConfigError::InvalidName {
            entity: "meta directive",
        });
    }
    Ok((command, value))
}

/// Splits a raw directive line, preserving borrowed-ness.
///
/// A borrowed line yields borrowed key/value views into the same buffer; an
/// owned line yields owned copies of the two pieces.
pub(crate) fn split_line(line: Cow<'_, str>) -> Result<(Cow<'_, str>, Cow<'_, str>)> {
    match line {
        Cow::Borrowed(raw) => {
            let (command, value) = split_str(raw)?;
            Ok((Cow::Borrowed(command), Cow::Borrowed(value)))
        }
        Cow::Owned(raw) => {
            let (command, value) = split_str(&raw)?;
            Ok((Cow::Owned(command.to_string()), Cow::Owned(value.to_string())))
        }
    }
}
