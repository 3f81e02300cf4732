use std::path::{Component, Path, PathBuf};

/// Joining outline names without leaving the directory being joined onto.
pub trait ContainedPathExt {
    /// Appends only the normal components of `name`. Roots, drive prefixes,
    /// `.` and `..` are dropped.
    fn push_contained(&mut self, name: impl AsRef<Path>);

    fn join_contained(&self, name: impl AsRef<Path>) -> PathBuf;
}

impl ContainedPathExt for PathBuf {
    fn push_contained(&mut self, name: impl AsRef<Path>) {
        for component in name.as_ref().components() {
            if let Component::Normal(part) = component {
                self.push(part);
            }
        }
    }

    fn join_contained(&self, name: impl AsRef<Path>) -> PathBuf {
        let mut path = self.clone();
        path.push_contained(name);
        path
    }
}
