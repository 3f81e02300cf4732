use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::ext::ContainedPathExt;
use crate::filesystem::FilesystemSink;
use crate::outline::{NodeKind, OutlineEvent, OutlineNode, RootDirectory};
use crate::scaffold::{PathStack, progress};

/// Counts of what a run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub directories: usize,
    pub files: usize,
    pub failures: usize,
    /// Entries not attempted because an ancestor failed.
    pub abandoned: usize,
}

impl ScaffoldReport {
    pub fn has_problems(&self) -> bool {
        self.failures > 0 || self.abandoned > 0
    }
}

/// Feeds outline events through a [`PathStack`] into a [`FilesystemSink`].
pub struct Scaffolder<S> {
    sink: S,
    output_dir: PathBuf,
    stack: Option<PathStack>,
    report: ScaffoldReport,
}

impl<S: FilesystemSink> Scaffolder<S> {
    pub fn new(sink: S, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            sink,
            output_dir: output_dir.into(),
            stack: None,
            report: ScaffoldReport::default(),
        }
    }

    /// Processes every event in order and returns the final counts.
    pub async fn build(
        mut self,
        events: impl IntoIterator<Item = OutlineEvent>,
    ) -> ScaffoldReport {
        for event in events {
            self.apply(event).await;
        }
        if self.stack.is_none() {
            warn!("Outline contained no root directory, nothing was created");
        }
        self.report
    }

    pub async fn apply(&mut self, event: OutlineEvent) {
        match event {
            OutlineEvent::Root(root) => self.create_root(root).await,
            OutlineEvent::Node(node) => self.create_node(node).await,
        }
    }

    async fn create_root(&mut self, root: RootDirectory) {
        if self.stack.is_some() {
            debug!("Ignoring second root directory {root}");
            return;
        }
        let path = self.output_dir.join_contained(root.name());
        info!("Creating root directory {}", path.display());
        let created = self.create_directory(&path).await;
        self.stack = Some(PathStack::new(path, created));
    }

    async fn create_node(&mut self, node: OutlineNode) {
        let Some(stack) = self.stack.as_mut() else {
            debug!("Skipping {} before any root directory", node.name());
            return;
        };

        let resolution = stack.resolve(&node);
        debug!(
            "Resolved {} under {} open directories",
            resolution.path.display(),
            stack.depth()
        );
        if resolution.blocked {
            warn!(
                "Abandoning {} {} below a directory that was not created",
                node.kind(),
                resolution.path.display()
            );
            progress::print_abandoned(node.kind(), &resolution.path);
            self.report.abandoned += 1;
            if node.kind() == NodeKind::Directory {
                stack.push(&node, false);
            }
            return;
        }

        match node.kind() {
            NodeKind::File => {
                self.create_file(&resolution.path).await;
            }
            NodeKind::Directory => {
                let created = self.create_directory(&resolution.path).await;
                if let Some(stack) = self.stack.as_mut() {
                    stack.push(&node, created);
                }
            }
        }
    }

    async fn create_directory(&mut self, path: &Path) -> bool {
        match self.sink.ensure_directory(path).await {
            Ok(()) => {
                progress::print_created(NodeKind::Directory, path);
                self.report.directories += 1;
                true
            }
            Err(error) => {
                warn!("{error}");
                progress::print_failed(NodeKind::Directory, path, &error);
                self.report.failures += 1;
                false
            }
        }
    }

    async fn create_file(&mut self, path: &Path) {
        let sink = &self.sink;
        let result = async {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                sink.ensure_directory(parent).await?;
            }
            sink.create_empty_file(path).await
        }
        .await;

        match result {
            Ok(()) => {
                progress::print_created(NodeKind::File, path);
                self.report.files += 1;
            }
            Err(error) => {
                warn!("{error}");
                progress::print_failed(NodeKind::File, path, &error);
                self.report.failures += 1;
            }
        }
    }
}
