use clap::ValueEnum;
use derive_more::Display;

/// Notation the input outline is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Display)]
pub enum OutlineFormat {
    /// Bullet list, two spaces per level
    #[display("layered")]
    Layered,
    /// Box-drawing diagram as printed by `tree`
    #[default]
    #[display("tree")]
    Tree,
}
