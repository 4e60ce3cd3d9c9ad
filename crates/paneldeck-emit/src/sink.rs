//! Code sink trait.

use crate::directive::Directive;

/// Receiver for the ordered directive stream.
///
/// A backend implements this once per output target (YAML generator,
/// device protocol writer, ...). Directives arrive in a defined order;
/// see [`emit_graph`](crate::emit_graph).
pub trait CodeSink {
    /// Called once per directive, in emission order.
    fn emit(&mut self, directive: Directive);
}

/// Sink that records every directive it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    directives: Vec<Directive>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded directives.
    #[must_use]
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Consumes the sink and returns the recorded directives.
    #[must_use]
    pub fn into_directives(self) -> Vec<Directive> {
        self.directives
    }
}

impl CodeSink for RecordingSink {
    fn emit(&mut self, directive: Directive) {
        self.directives.push(directive);
    }
}
