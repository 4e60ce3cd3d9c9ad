//! Error types for icon-table loading and compilation.

use smol_str::SmolStr;
use thiserror::Error;

use crate::diagnostics::{Diagnostic, FieldPath};

/// Fatal failure while loading the icon table.
///
/// These are integrity errors in the embedding application's data, not in
/// the panel configuration, and are raised before any compile runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IconTableError {
    /// The source is not a JSON list of icon records.
    #[error("icon table is not valid JSON: {0}")]
    Parse(SmolStr),

    /// The source parsed but contains no records.
    #[error("icon table contains no records")]
    Empty,

    /// A record is missing its name or hex value.
    #[error("icon record {index} has an empty name or hex value")]
    IncompleteRecord {
        /// Position of the record in the table.
        index: usize,
    },

    /// A hex value does not denote a Unicode codepoint.
    #[error("icon '{name}' has an invalid codepoint '{hex}'")]
    BadCodepoint {
        /// Name of the offending record.
        name: SmolStr,
        /// The rejected hex value.
        hex: SmolStr,
    },
}

/// Failure of one compile invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The configuration violates one or more rules.
    ///
    /// Carries every violation found, in configuration order.
    #[error("invalid configuration: {} error(s)", .0.len())]
    Validation(Vec<Diagnostic>),

    /// An icon required during graph construction is not in the library.
    ///
    /// User-supplied icon names are checked during validation, so this is
    /// only reachable when the library lacks one of the built-in default
    /// icon names.
    #[error("icon '{name}' is not in the icon library (at {path})")]
    UnresolvedIcon {
        /// Nearest configuration location.
        path: FieldPath,
        /// The unresolved icon name.
        name: SmolStr,
    },
}

impl CompileError {
    /// Returns the collected diagnostics for a validation failure.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Validation(diagnostics) => diagnostics,
            Self::UnresolvedIcon { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticCode;

    #[test]
    fn test_error_display() {
        let err = IconTableError::BadCodepoint {
            name: SmolStr::new("broken"),
            hex: SmolStr::new("ZZZZ"),
        };
        assert_eq!(err.to_string(), "icon 'broken' has an invalid codepoint 'ZZZZ'");

        let err = CompileError::Validation(vec![Diagnostic::new(
            DiagnosticCode::InvalidIdentifier,
            FieldPath::root("cards").index(0).key("id"),
            "bad id",
        )]);
        assert_eq!(err.to_string(), "invalid configuration: 1 error(s)");
        assert_eq!(err.diagnostics().len(), 1);
    }
}
