//! Outline parsing.
//!
//! Both notations are turned into the same stream of [`OutlineEvent`]s: one
//! [`OutlineEvent::Root`] for the top-level directory, then one
//! [`OutlineEvent::Node`] per recognized entry. Lines that match neither
//! notation are skipped without error.

mod layered;
mod node;
mod parser;
mod tree;

pub use layered::LayeredParser;
pub use node::{NodeKind, OutlineEvent, OutlineNode, RootDirectory};
pub use parser::OutlineParser;
pub use tree::TreeParser;
