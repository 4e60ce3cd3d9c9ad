//! Diagnostic types for configuration errors.
//!
//! Every rule violation is reported as a [`Diagnostic`] carrying a stable
//! code, the path of the offending field, and a human-readable message.
//! Violations are collected, not short-circuited, so one compile reports
//! everything that is wrong with a configuration.

use smol_str::SmolStr;

/// A diagnostic code identifying the kind of violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    // Format errors (E100-E199)
    /// Identifier does not match the page-id syntax.
    InvalidIdentifier,
    /// Entity reference does not parse.
    InvalidEntityRef,
    /// Entity type is outside the allow-list for this slot.
    WrongEntityDomain,
    /// Icon name or `hex:` literal not present in the icon library.
    UnknownIcon,
    /// Sleep timeout outside the supported range.
    SleepTimeoutOutOfRange,
    /// Clock format string too short or too long.
    ClockFormatLength,

    // Cardinality errors (E200-E299)
    /// Fewer entities than the card kind requires.
    TooFewEntities,
    /// More entities than the card kind allows.
    TooManyEntities,
    /// Entities supplied to a card kind without an entities slot.
    EntitiesNotAllowed,
    /// Required variant field is missing.
    MissingEntity,
    /// Alarm mode list is empty or longer than the mode set.
    ArmModeCount,
    /// Alarm mode named more than once.
    DuplicateArmMode,
    /// Day-of-week override is not a [short, long] pair.
    DayNameArity,

    // Reference errors (E300-E399)
    /// Page identifier used more than once.
    DuplicatePageId,
    /// Navigation target names no card.
    UnknownNavigationTarget,
}

impl DiagnosticCode {
    /// Returns the string code (e.g., "E101").
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            // Format
            Self::InvalidIdentifier => "E101",
            Self::InvalidEntityRef => "E102",
            Self::WrongEntityDomain => "E103",
            Self::UnknownIcon => "E104",
            Self::SleepTimeoutOutOfRange => "E105",
            Self::ClockFormatLength => "E106",
            // Cardinality
            Self::TooFewEntities => "E201",
            Self::TooManyEntities => "E202",
            Self::EntitiesNotAllowed => "E203",
            Self::MissingEntity => "E204",
            Self::ArmModeCount => "E205",
            Self::DuplicateArmMode => "E206",
            Self::DayNameArity => "E207",
            // Reference
            Self::DuplicatePageId => "E301",
            Self::UnknownNavigationTarget => "E302",
        }
    }
}

/// Path of a configuration field, e.g. `cards[2].entities[0].entity_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(SmolStr);

impl FieldPath {
    /// Creates a path rooted at a top-level field.
    #[must_use]
    pub fn root(name: &str) -> Self {
        Self(SmolStr::new(name))
    }

    /// Extends the path with a named field.
    #[must_use]
    pub fn key(&self, name: &str) -> Self {
        Self(SmolStr::new(format!("{}.{name}", self.0)))
    }

    /// Extends the path with a list index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self(SmolStr::new(format!("{}[{index}]", self.0)))
    }

    /// Returns the rendered path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The diagnostic code.
    pub code: DiagnosticCode,
    /// Path of the offending field.
    pub path: FieldPath,
    /// The diagnostic message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(code: DiagnosticCode, path: FieldPath, message: impl Into<String>) -> Self {
        Self {
            code,
            path,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error[{}]: {} (at {})", self.code.code(), self.message, self.path)
    }
}

/// Builder for collecting diagnostics.
#[derive(Debug, Default)]
pub struct DiagnosticBuilder {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBuilder {
    /// Creates a new diagnostic builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Adds an error.
    pub fn error(&mut self, code: DiagnosticCode, path: FieldPath, message: impl Into<String>) {
        self.add(Diagnostic::new(code, path, message));
    }

    /// Returns true if any errors have been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Consumes the builder and returns the diagnostics.
    #[must_use]
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path() {
        let path = FieldPath::root("cards").index(2).key("entities").index(0).key("entity_id");
        assert_eq!(path.as_str(), "cards[2].entities[0].entity_id");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(
            DiagnosticCode::UnknownNavigationTarget,
            FieldPath::root("cards").index(1).key("entities").index(3).key("entity_id"),
            "no card has identifier 'garage'",
        );
        assert_eq!(
            diag.to_string(),
            "error[E302]: no card has identifier 'garage' (at cards[1].entities[3].entity_id)"
        );
    }

    #[test]
    fn test_diagnostic_builder() {
        let mut builder = DiagnosticBuilder::new();
        assert!(!builder.has_errors());

        builder.error(
            DiagnosticCode::TooFewEntities,
            FieldPath::root("cards").index(0).key("entities"),
            "card type 'qr' requires at least 1 entity",
        );

        assert!(builder.has_errors());
        let diagnostics = builder.finish();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code.code(), "E201");
    }
}
