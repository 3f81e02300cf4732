//! Turns an outline event stream into directories and files.

mod path_stack;
pub mod progress;
mod scaffolder;

pub use path_stack::PathStack;
pub use scaffolder::{ScaffoldReport, Scaffolder};
