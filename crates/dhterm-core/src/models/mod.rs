//! Data models shared by the simulator and its hosts.
//!
//! - [`FsNode`], [`DisplaySize`] - virtual filesystem tree
//! - [`VirtualPath`] - canonical absolute paths
//! - [`OutputLine`], [`OutputLog`], [`LineStyle`] - rendered terminal output

mod filesystem;
mod path;
mod terminal;

pub use filesystem::{DisplaySize, FsNode};
pub use path::VirtualPath;
pub use terminal::{LineStyle, OutputLine, OutputLineData, OutputLog};
