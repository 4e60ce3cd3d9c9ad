//! The compile entry point.

use paneldeck_config::PanelConfig;
use tracing::debug;

use crate::build::GraphBuilder;
use crate::error::CompileError;
use crate::graph::PageGraph;
use crate::icons::IconLibrary;
use crate::validate::Validator;

/// Compiles panel configurations against a fixed icon library.
///
/// The compiler itself is stateless between invocations; the interner and
/// identifier allocator are created fresh for every [`compile`] call, so
/// independent compiles never observe each other.
///
/// [`compile`]: Compiler::compile
#[derive(Debug)]
pub struct Compiler {
    icons: IconLibrary,
}

impl Compiler {
    /// Creates a compiler over a loaded icon library.
    #[must_use]
    pub fn new(icons: IconLibrary) -> Self {
        Self { icons }
    }

    /// Returns the icon library this compiler resolves against.
    #[must_use]
    pub fn icons(&self) -> &IconLibrary {
        &self.icons
    }

    /// Validates the configuration and builds the page graph.
    ///
    /// All-or-nothing: no graph node is constructed unless every rule
    /// passes.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Validation`] with every violation found, or
    /// [`CompileError::UnresolvedIcon`] when the library lacks a built-in
    /// default icon.
    pub fn compile(&self, config: &PanelConfig) -> Result<PageGraph, CompileError> {
        debug!(
            model = %config.model,
            cards = config.cards.len(),
            "compiling panel configuration"
        );
        let validated = Validator::new(&self.icons)
            .validate(config)
            .map_err(CompileError::Validation)?;
        GraphBuilder::new(&self.icons, validated).build()
    }
}
