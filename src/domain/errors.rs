// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration graph.
//!
//! This module defines the error types that can occur while building a
//! configuration graph. All errors use `thiserror` for proper error handling
//! and conversion. Reconstruction failures get their own wrapper type in the
//! service layer, [`crate::service::ReconstructError`].

use thiserror::Error;

/// The main error type for configuration graph operations.
///
/// Validation failures are local and non-fatal: the operation returns an
/// error and leaves the graph unchanged, and it is the caller's (typically a
/// format parser's) decision whether to abort or skip and continue.
///
/// The enum is `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use pipecfg::domain::errors::ConfigError;
///
/// fn create_thing(name: &str) -> Result<(), ConfigError> {
///     if name.trim().is_empty() {
///         return Err(ConfigError::InvalidName { entity: "section" });
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// A section, group, or meta-directive command name was empty after
    /// trimming surrounding whitespace.
    #[error("Invalid {entity} name: empty after trimming whitespace")]
    InvalidName {
        /// The kind of entity being named ("section", "group", "meta directive")
        entity: &'static str,
    },

    /// A property key was empty after trimming surrounding whitespace.
    ///
    /// The value may legitimately be empty; only the key is constrained.
    #[error("Invalid property: key is empty after trimming whitespace")]
    InvalidProperty,

    /// A meta-directive line did not start with the `@` marker.
    #[error("Invalid meta directive: line does not start with '@'")]
    InvalidMetaMarker,

    /// A section id referenced a slot that does not exist in this context.
    ///
    /// Ids are only valid for the context that issued them; presenting an id
    /// from another context is a caller bug surfaced here.
    #[error("Unknown section id {id}")]
    UnknownSection {
        /// The out-of-range arena index
        id: usize,
    },
}

/// A specialized Result type for configuration graph operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_display() {
        let error = ConfigError::InvalidName { entity: "section" };
        assert_eq!(
            error.to_string(),
            "Invalid section name: empty after trimming whitespace"
        );
    }

    #[test]
    fn test_invalid_property_display() {
        let error = ConfigError::InvalidProperty;
        assert_eq!(
            error.to_string(),
            "Invalid property: key is empty after trimming whitespace"
        );
    }

    #[test]
    fn test_invalid_meta_marker_display() {
        let error = ConfigError::InvalidMetaMarker;
        assert!(error.to_string().contains("'@'"));
    }

    #[test]
    fn test_unknown_section_display() {
        let error = ConfigError::UnknownSection { id: 7 };
        assert_eq!(error.to_string(), "Unknown section id 7");
    }
}
