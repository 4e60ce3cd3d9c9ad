//! `paneldeck-emit` - Backend seam of the paneldeck compiler.
//!
//! Walks a compiled [`paneldeck_compile::PageGraph`] and feeds an ordered
//! stream of [`Directive`]s to a [`CodeSink`]. Backends (YAML generators,
//! device protocol writers) implement the sink; [`RecordingSink`] captures
//! the stream for inspection and tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod directive;
pub mod emit;
pub mod sink;

pub use directive::Directive;
pub use emit::emit_graph;
pub use sink::{CodeSink, RecordingSink};
