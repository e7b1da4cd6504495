//! Error types for the framegen generator.

use thiserror::Error;

use crate::render::RenderError;

/// Errors that can occur during schema assembly and code generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A specification entry populated zero, or more than one, kind payload.
    ///
    /// `entry` names the offending attribute, block, or element type and the
    /// kinds that were found.
    #[error("Unknown kind for '{entry}': expected exactly one kind, found [{}]", .found.join(", "))]
    UnknownKind {
        /// Name of the entry (or the enclosing entry, for element types).
        entry: String,
        /// Every populated kind key; empty when none was populated.
        found: Vec<String>,
    },

    /// A collection or object has an element or member kind with no known
    /// conversion to and from its external type.
    #[error("No conversion is defined for element kind '{element_kind}'")]
    UnresolvedElementConversion {
        /// Kind of the element or member that could not be converted.
        element_kind: String,
    },

    /// The conversion for this node kind is not implemented yet.
    ///
    /// This is a recoverable condition: schema and record code for the node
    /// are still generated, only its conversion functions are skipped.
    #[error("Conversion for '{kind}' is not implemented; write it by hand")]
    Unimplemented {
        /// Kind whose conversion is missing.
        kind: String,
    },

    /// Two nodes of one file would generate wrappers with the same Go name.
    #[error("Wrapper '{wrapper}' is generated for both '{first}' and '{second}'")]
    DuplicateWrapper {
        wrapper: String,
        /// Dotted path of the first node generating it.
        first: String,
        /// Dotted path of the second node generating it.
        second: String,
    },

    /// An attribute and a block share a name within one object level.
    #[error("'{name}' names both an attribute and a block")]
    NameClash { name: String },

    /// The rendering collaborator failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Failed to read or parse a specification document.
    #[error("Failed to parse specification '{path}': {reason}")]
    ParseError {
        /// Path of the specification file.
        path: String,
        /// Parser message.
        reason: String,
    },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid command-line configuration.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeneratorError {
    /// Whether this error only reports a missing conversion implementation.
    ///
    /// Callers use this to skip a fragment instead of aborting generation.
    ///
    /// ## Examples
    ///
    /// ```
    /// use framegen_gen::errors::GeneratorError;
    ///
    /// let skip = GeneratorError::Unimplemented { kind: "single_nested".to_string() };
    /// assert!(skip.is_unimplemented());
    ///
    /// let abort = GeneratorError::UnresolvedElementConversion { element_kind: "list".to_string() };
    /// assert!(!abort.is_unimplemented());
    /// ```
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, GeneratorError::Unimplemented { .. })
    }

    pub(crate) fn unknown_kind(entry: &str, found: &[&str]) -> Self {
        GeneratorError::UnknownKind {
            entry: entry.to_string(),
            found: found.iter().map(|k| k.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_message_lists_found_kinds() {
        let err = GeneratorError::unknown_kind("thing", &["bool", "string"]);
        assert_eq!(
            err.to_string(),
            "Unknown kind for 'thing': expected exactly one kind, found [bool, string]"
        );
    }

    #[test]
    fn unknown_kind_message_with_no_kinds() {
        let err = GeneratorError::unknown_kind("thing", &[]);
        assert!(err.to_string().ends_with("found []"));
    }

    #[test]
    fn render_errors_pass_through_verbatim() {
        let err: GeneratorError = RenderError::Template {
            template: "to_from_scalar".to_string(),
            reason: "boom".to_string(),
        }
        .into();

        assert_eq!(
            err.to_string(),
            RenderError::Template {
                template: "to_from_scalar".to_string(),
                reason: "boom".to_string(),
            }
            .to_string()
        );
    }
}
