//! In-memory virtual filesystem.

use indexmap::IndexMap;

use crate::error::FsError;
use crate::models::{DisplaySize, FsNode, VirtualPath};

/// Virtual filesystem owned by a single terminal instance.
///
/// The root is always a directory. Every node has exactly one parent, and
/// all mutation happens in place.
///
/// # Path Convention
///
/// All lookups take canonical [`VirtualPath`]s; turning user input into one
/// is the job of [`PathResolver`](crate::PathResolver).
#[derive(Clone, Debug, PartialEq)]
pub struct VirtualFs {
    root: FsNode,
}

impl VirtualFs {
    /// Create a filesystem containing only the root directory.
    pub fn empty() -> Self {
        Self {
            root: FsNode::directory(),
        }
    }

    /// Create the practice filesystem with the demo dataset under `home`.
    ///
    /// Directories along the way to `home` are created empty.
    pub fn demo(home: &VirtualPath) -> Self {
        let segments: Vec<&str> = home.segments().collect();
        let root = segments.iter().rev().fold(
            FsNode::Directory {
                children: demo_dataset(),
            },
            |node, name| FsNode::directory_with([(*name, node)]),
        );
        Self { root }
    }

    /// Get the node at `path`.
    pub fn lookup(&self, path: &VirtualPath) -> Option<&FsNode> {
        let mut current = &self.root;
        for part in path.segments() {
            match current {
                FsNode::Directory { children } => current = children.get(part)?,
                FsNode::File { .. } => return None,
            }
        }
        Some(current)
    }

    /// Check if `path` is an existing directory.
    pub fn is_directory(&self, path: &VirtualPath) -> bool {
        matches!(self.lookup(path), Some(FsNode::Directory { .. }))
    }

    /// Create an empty directory named `name` inside `parent`.
    pub fn create_directory(&mut self, parent: &VirtualPath, name: &str) -> Result<(), FsError> {
        let children = self.children_mut(parent)?;
        if children.contains_key(name) {
            return Err(FsError::AlreadyExists);
        }
        children.insert(name.to_string(), FsNode::directory());
        Ok(())
    }

    /// Create or refresh a file named `name` inside `parent`.
    ///
    /// An existing file is replaced (keeping its listing position). An
    /// existing directory is left untouched, since a node never changes
    /// type.
    pub fn create_file(
        &mut self,
        parent: &VirtualPath,
        name: &str,
        size: DisplaySize,
    ) -> Result<(), FsError> {
        let children = self.children_mut(parent)?;
        match children.get_mut(name) {
            Some(FsNode::Directory { .. }) => {}
            Some(node) => *node = FsNode::File { size },
            None => {
                children.insert(name.to_string(), FsNode::File { size });
            }
        }
        Ok(())
    }

    /// List the entries of the directory at `path` in insertion order.
    ///
    /// Dotfiles are skipped unless `include_hidden` is set.
    pub fn list_children(
        &self,
        path: &VirtualPath,
        include_hidden: bool,
    ) -> Result<Vec<(&str, &FsNode)>, FsError> {
        match self.lookup(path).ok_or(FsError::NotFound)? {
            FsNode::Directory { children } => Ok(children
                .iter()
                .filter(|(name, _)| include_hidden || !name.starts_with('.'))
                .map(|(name, node)| (name.as_str(), node))
                .collect()),
            FsNode::File { .. } => Err(FsError::NotADirectory),
        }
    }

    fn children_mut(&mut self, path: &VirtualPath) -> Result<&mut IndexMap<String, FsNode>, FsError> {
        let mut current = &mut self.root;
        for part in path.segments() {
            current = match current {
                FsNode::Directory { children } => children.get_mut(part).ok_or(FsError::NotFound)?,
                FsNode::File { .. } => return Err(FsError::NotFound),
            };
        }
        match current {
            FsNode::Directory { children } => Ok(children),
            FsNode::File { .. } => Err(FsError::NotADirectory),
        }
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::empty()
    }
}

/// Sample digital-humanities project tree seeded into the home directory.
fn demo_dataset() -> IndexMap<String, FsNode> {
    let documents = FsNode::directory_with([
        (
            "DH-Projects",
            FsNode::directory_with([
                (
                    "victorian-novels",
                    FsNode::directory_with([
                        (
                            "data",
                            FsNode::directory_with([
                                ("novels.csv", FsNode::file("2.1MB")),
                                ("metadata.json", FsNode::file("156KB")),
                            ]),
                        ),
                        (
                            "scripts",
                            FsNode::directory_with([
                                ("analyze.py", FsNode::file("3.2KB")),
                                ("clean_data.py", FsNode::file("1.8KB")),
                            ]),
                        ),
                        ("README.md", FsNode::file("1.1KB")),
                    ]),
                ),
                (
                    "text-analysis-project",
                    FsNode::directory_with([(
                        "corpus",
                        FsNode::directory_with([
                            ("shakespeare.txt", FsNode::file("5.2MB")),
                            ("austen.txt", FsNode::file("2.8MB")),
                        ]),
                    )]),
                ),
            ]),
        ),
        ("notes.txt", FsNode::file("891B")),
        ("research-ideas.md", FsNode::file("2.3KB")),
    ]);

    [
        ("Documents", documents),
        (
            "Desktop",
            FsNode::directory_with([("quick-notes.txt", FsNode::file("445B"))]),
        ),
        (
            "Downloads",
            FsNode::directory_with([
                ("dataset.zip", FsNode::file("15.7MB")),
                ("python-tutorial.pdf", FsNode::file("8.9MB")),
            ]),
        ),
    ]
    .into_iter()
    .map(|(name, node)| (name.to_string(), node))
    .collect()
}
