//! Path resolution for user-typed path expressions.
//!
//! Resolution is pure string work; whether the result exists is checked
//! afterwards against [`VirtualFs`](crate::VirtualFs).

use crate::models::VirtualPath;

/// Turns raw path arguments into canonical absolute paths.
///
/// Rules, in priority order:
///
/// 1. `/...` is already absolute
/// 2. `~` is the home directory
/// 3. `~/rest` is home joined with `rest`
/// 4. `..` is the parent of the current directory, clamped at home
/// 5. `../rest` is rule 4 joined with `rest`
/// 6. anything else is joined to the current directory
///
/// The joined string is then normalized: `.` segments vanish and any
/// remaining `..` pops a segment without ever climbing above `/`.
#[derive(Clone, Debug)]
pub struct PathResolver {
    home: VirtualPath,
}

impl PathResolver {
    pub fn new(home: VirtualPath) -> Self {
        Self { home }
    }

    pub fn home(&self) -> &VirtualPath {
        &self.home
    }

    /// Resolve `raw` against `current`.
    pub fn resolve(&self, raw: &str, current: &VirtualPath) -> VirtualPath {
        let joined = if raw.starts_with('/') {
            raw.to_string()
        } else if raw == "~" {
            return self.home.clone();
        } else if let Some(rest) = raw.strip_prefix("~/") {
            format!("{}/{}", self.home, rest)
        } else if raw == ".." {
            return self.parent_of(current);
        } else if let Some(rest) = raw.strip_prefix("../") {
            format!("{}/{}", self.parent_of(current), rest)
        } else {
            format!("{current}/{raw}")
        };

        VirtualPath::normalize(&joined)
    }

    /// One level up from `current`, never above home.
    ///
    /// Anywhere at or above home depth (home itself, `/Users`, `/`) goes to
    /// home.
    pub fn parent_of(&self, current: &VirtualPath) -> VirtualPath {
        if current.depth() > self.home.depth() {
            current.parent().unwrap_or_else(VirtualPath::root)
        } else {
            self.home.clone()
        }
    }
}
