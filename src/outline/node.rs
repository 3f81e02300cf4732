use derive_more::Display;

/// Kind of entry an outline line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NodeKind {
    #[display("file")]
    File,
    #[display("directory")]
    Directory,
}

impl NodeKind {
    /// Names with a `.` are files, everything else is a directory.
    pub fn classify(name: &str) -> Self {
        if name.contains('.') {
            NodeKind::File
        } else {
            NodeKind::Directory
        }
    }
}

/// A single entry recovered from one outline line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    depth: usize,
    name: String,
    kind: NodeKind,
}

impl OutlineNode {
    /// Returns `None` for an empty name.
    pub fn new(depth: usize, name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }
        let kind = NodeKind::classify(&name);
        Some(Self { depth, name, kind })
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}

/// The top-level directory every other entry is created under.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{name}")]
pub struct RootDirectory {
    name: String,
}

impl RootDirectory {
    /// Strips a leading `./` and trailing `/`. A bare `.` or `./` means the
    /// output directory itself.
    pub fn from_line(line: &str) -> Self {
        let trimmed = line.trim();
        let trimmed = trimmed.strip_prefix("./").unwrap_or(trimmed);
        let trimmed = trimmed.trim_end_matches('/').trim();
        let name = if trimmed.is_empty() { "." } else { trimmed };
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// What a parser hands to the path-stack tracker for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineEvent {
    Root(RootDirectory),
    Node(OutlineNode),
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("README.md", NodeKind::File)]
    #[case(".gitignore", NodeKind::File)]
    #[case("main.go", NodeKind::File)]
    #[case("src", NodeKind::Directory)]
    #[case("my-module_2", NodeKind::Directory)]
    fn classify_by_dot(#[case] name: &str, #[case] expected: NodeKind) {
        assert_eq!(NodeKind::classify(name), expected);
        assert_eq!(OutlineNode::new(0, name).unwrap().kind(), expected);
    }

    #[test]
    fn node_rejects_empty_name() {
        assert!(OutlineNode::new(3, "").is_none());
    }

    #[rstest]
    #[case("root", "root")]
    #[case("root/", "root")]
    #[case("./root/", "root")]
    #[case("  my-app/  ", "my-app")]
    #[case("./", ".")]
    #[case(".", ".")]
    fn root_directory_normalization(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(RootDirectory::from_line(line).name(), expected);
    }
}
