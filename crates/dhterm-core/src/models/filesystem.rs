//! Virtual filesystem node types.

use std::fmt;

use indexmap::IndexMap;
use rand::Rng;

/// Human-readable size shown in long listings (`2.1MB`, `445B`).
///
/// This is a display string only. Nothing in the simulator measures bytes,
/// and randomly generated sizes are cosmetic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplaySize(String);

impl DisplaySize {
    pub fn new(size: impl Into<String>) -> Self {
        Self(size.into())
    }

    /// Size of a freshly touched file.
    pub fn zero() -> Self {
        Self("0B".to_string())
    }

    /// Random flavour size in `[low, high)` with one decimal place.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, (low, high): (f64, f64), unit: &str) -> Self {
        let value: f64 = rng.gen_range(low..high);
        Self(format!("{value:.1}{unit}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplaySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DisplaySize {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A node in the virtual filesystem tree.
///
/// Children keep insertion order, which is also listing order. A node's
/// variant never changes once it is in the tree.
#[derive(Clone, Debug, PartialEq)]
pub enum FsNode {
    Directory { children: IndexMap<String, FsNode> },
    File { size: DisplaySize },
}

impl FsNode {
    /// Create an empty directory.
    pub fn directory() -> Self {
        Self::Directory {
            children: IndexMap::new(),
        }
    }

    /// Create a directory from `(name, node)` pairs, in order.
    pub fn directory_with<'a>(entries: impl IntoIterator<Item = (&'a str, FsNode)>) -> Self {
        Self::Directory {
            children: entries
                .into_iter()
                .map(|(name, node)| (name.to_string(), node))
                .collect(),
        }
    }

    /// Create a file with the given display size.
    pub fn file(size: impl Into<DisplaySize>) -> Self {
        Self::File { size: size.into() }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    /// Child entries, if this node is a directory.
    pub fn children(&self) -> Option<&IndexMap<String, FsNode>> {
        match self {
            Self::Directory { children } => Some(children),
            Self::File { .. } => None,
        }
    }
}
