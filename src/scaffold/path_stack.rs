use std::path::PathBuf;

use crate::ext::ContainedPathExt;
use crate::outline::OutlineNode;

#[derive(Debug, Clone, PartialEq, Eq)]
struct StackEntry {
    name: String,
    depth: usize,
    created: bool,
}

/// Where an outline entry lands on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub path: PathBuf,
    /// Some ancestor (or the root) could not be created, so this entry
    /// must not be created either.
    pub blocked: bool,
}

/// Open ancestor directories of the entry currently being placed.
///
/// Entries are popped while the incoming depth is less than or equal to the
/// top's depth, so a sibling always closes the scope of the entry before it.
/// Depths only need to be ordered, not contiguous: the tree notation hands
/// in raw column indices.
#[derive(Debug, Clone)]
pub struct PathStack {
    root: PathBuf,
    root_created: bool,
    entries: Vec<StackEntry>,
}

impl PathStack {
    pub fn new(root: impl Into<PathBuf>, root_created: bool) -> Self {
        Self {
            root: root.into(),
            root_created,
            entries: Vec::new(),
        }
    }

    /// Closes scopes the node is not part of and returns its full path.
    /// Names never leave the root: absolute names and `..` are joined
    /// component by component below it.
    pub fn resolve(&mut self, node: &OutlineNode) -> Resolution {
        while self
            .entries
            .last()
            .is_some_and(|top| node.depth() <= top.depth)
        {
            self.entries.pop();
        }

        let mut path = self.root.clone();
        for entry in &self.entries {
            path.push_contained(&entry.name);
        }
        path.push_contained(node.name());

        Resolution {
            path,
            blocked: !self.root_created || self.entries.iter().any(|entry| !entry.created),
        }
    }

    /// Opens a directory scope for deeper entries. `created` records whether
    /// the directory actually exists.
    pub fn push(&mut self, node: &OutlineNode, created: bool) {
        self.entries.push(StackEntry {
            name: node.name().to_string(),
            depth: node.depth(),
            created,
        });
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}
