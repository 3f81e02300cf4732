use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::ext::OutlineLineExt;
use crate::outline::{OutlineEvent, OutlineNode, RootDirectory};

static ENTRY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[_A-Za-z0-9][A-Za-z0-9._-]*$").expect("entry name pattern is valid")
});

/// Parses diagrams drawn with box glyphs, as printed by `tree`:
///
/// ```text
/// root/
/// ├── src/
/// │   └── main.go
/// └── docs/
/// ```
///
/// Depth is the raw column of the name, so tools that indent by three or
/// five columns work as long as children sit right of their parent.
#[derive(Debug, Default)]
pub struct TreeParser {
    has_root: bool,
}

impl TreeParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse_line(&mut self, line: &str) -> Option<OutlineEvent> {
        if line.trim().is_empty() || line.is_code_fence() {
            return None;
        }

        if !self.has_root {
            self.has_root = true;
            return Some(OutlineEvent::Root(RootDirectory::from_line(line)));
        }

        let Some(column) = line.name_column() else {
            debug!("Skipping decoration-only line: {line:?}");
            return None;
        };

        let name = line.strip_tree_decoration();
        if !ENTRY_NAME.is_match(name) {
            debug!("Skipping line with unsupported entry name: {line:?}");
            return None;
        }

        OutlineNode::new(column, name).map(OutlineEvent::Node)
    }
}
