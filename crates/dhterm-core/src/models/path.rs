//! Canonical absolute paths in the virtual filesystem.

use std::fmt;

/// An absolute path with no `.`, `..` or empty segments.
///
/// The root is `/`; every other path is `/` followed by `/`-separated names
/// with no trailing slash. Construct one with [`VirtualPath::normalize`],
/// which accepts any string and clamps `..` at the root.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VirtualPath(String);

impl VirtualPath {
    /// The filesystem root, `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Canonicalize `raw`, treating it as rooted at `/`.
    ///
    /// - empty and `.` segments are dropped
    /// - `..` removes the previous segment, never going above the root
    pub fn normalize(raw: &str) -> Self {
        let mut parts: Vec<&str> = Vec::new();
        for part in raw.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    parts.pop();
                }
                _ => parts.push(part),
            }
        }
        Self(format!("/{}", parts.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Path segments from the root down.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Number of segments; the root has depth 0.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Parent directory, or `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        match self.0.rsplit_once('/') {
            Some(("", _)) => Some(Self::root()),
            Some((parent, _)) => Some(Self(parent.to_string())),
            None => Some(Self::root()),
        }
    }

    /// Last segment, or `None` at the root.
    pub fn file_name(&self) -> Option<&str> {
        self.segments().last()
    }

    /// Append a single name.
    pub fn join(&self, name: &str) -> Self {
        Self::normalize(&format!("{}/{}", self.0, name))
    }

    /// Segment-wise prefix test (`/Users/st` is not a prefix of `/Users/student`).
    pub fn starts_with(&self, other: &VirtualPath) -> bool {
        let mut own = self.segments();
        other.segments().all(|seg| own.next() == Some(seg))
    }

    /// Prompt form: `~` for home, `~/rest` below it, absolute elsewhere.
    pub fn display_from(&self, home: &VirtualPath) -> String {
        if self == home {
            return "~".to_string();
        }
        if !home.is_root() && self.starts_with(home) {
            return format!("~{}", &self.0[home.0.len()..]);
        }
        self.0.clone()
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VirtualPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
