use tracing::debug;

use crate::ext::OutlineLineExt;
use crate::outline::{OutlineEvent, OutlineNode, RootDirectory};

/// Spaces per nesting level in the layered notation.
const INDENT_WIDTH: usize = 2;

/// Parses bullet lists indented two spaces per level:
///
/// ```text
/// root
/// - src
///   - main.go
/// - docs
/// ```
#[derive(Debug, Default)]
pub struct LayeredParser {
    has_root: bool,
    /// Level of the first bulleted entry below the root; first-level
    /// children sit here.
    baseline: Option<usize>,
}

impl LayeredParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse_line(&mut self, line: &str) -> Option<OutlineEvent> {
        if line.trim().is_empty() || line.is_code_fence() {
            return None;
        }

        let indent = line.leading_spaces();
        let (name, bulleted) = match line.strip_bullet() {
            Some(name) => (name, true),
            None if indent == 0 => (line.trim(), false),
            None => {
                debug!("Skipping unrecognized layered line: {line:?}");
                return None;
            }
        };

        if !self.has_root {
            if indent > 0 {
                debug!("Skipping indented entry before the root directory line: {line:?}");
                return None;
            }
            self.has_root = true;
            return Some(OutlineEvent::Root(RootDirectory::from_line(name)));
        }

        let level = indent / INDENT_WIDTH;
        let depth = if bulleted {
            let baseline = *self.baseline.get_or_insert(level);
            level.saturating_sub(baseline)
        } else {
            0
        };

        let node = OutlineNode::new(depth, name.trim_end_matches('/'));
        if node.is_none() {
            debug!("Skipping layered line without a name: {line:?}");
        }
        node.map(OutlineEvent::Node)
    }
}
