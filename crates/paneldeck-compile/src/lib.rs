//! `paneldeck-compile` - Semantic pass of the paneldeck compiler.
//!
//! Turns a [`paneldeck_config::PanelConfig`] into a fully resolved
//! [`PageGraph`]:
//!
//! - **Validation**: format, cardinality, and cross-reference rules,
//!   collected into path-located diagnostics ([`validate`])
//! - **Icon resolution**: name or `hex:` literal to display codepoint
//!   ([`icons`])
//! - **Entity interning**: one stable symbol per distinct entity
//!   reference ([`intern`])
//! - **Identifier allocation**: generated ids for pages and items that
//!   lack one ([`uid`])
//! - **Graph construction**: pages, items, and the circular navigation
//!   ring over visible pages ([`graph`], [`Compiler`])
//!
//! The pass is all-or-nothing: no graph node is built unless the whole
//! configuration validates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod build;
pub mod compiler;
pub mod diagnostics;
pub mod error;
pub mod graph;
pub mod icons;
pub mod intern;
pub mod uid;
pub mod validate;

pub use compiler::Compiler;
pub use diagnostics::{Diagnostic, DiagnosticCode, FieldPath};
pub use error::{CompileError, IconTableError};
pub use graph::{
    DayNames, EntityBinding, Item, NavLink, Page, PageGraph, PageKind, ResolvedIcon, Screensaver,
    StatusIcon, WEATHER_SLOTS,
};
pub use icons::IconLibrary;
pub use intern::{EntitySymbol, EntityTable};
pub use uid::UidAllocator;
pub use validate::{ValidatedPanel, Validator};
