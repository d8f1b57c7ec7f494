//! Read-only view of the process environment used by the shell.
//!
//! The search path is parsed exactly once at startup and never mutated
//! afterwards; the home directory is read on demand because `cd` is the only
//! consumer and the variable may legitimately change between commands.

use std::env as stdenv;
use std::path::PathBuf;

/// Ordered list of directories consulted to locate an external executable.
///
/// Built from a colon-delimited string such as the `PATH` variable. Empty
/// segments are preserved as literal (and usually nonexistent) directories;
/// a failed stat on any candidate simply means "keep looking".
#[derive(Debug, Clone)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Parse a colon-delimited directory list.
    pub fn parse(raw: &str) -> Self {
        Self {
            dirs: raw.split(':').map(PathBuf::from).collect(),
        }
    }

    /// Capture the `PATH` variable of the current process.
    ///
    /// A missing `PATH` behaves like an empty one: nothing ever resolves.
    pub fn from_env() -> Self {
        Self::parse(&stdenv::var("PATH").unwrap_or_default())
    }

    /// Find the first directory in search order containing `name`.
    ///
    /// Returns the joined full path of the first match. Existence is the only
    /// criterion; whether the file is actually executable is left to the
    /// launch itself. The empty name never resolves.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        for dir in &self.dirs {
            let candidate = dir.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }
        None
    }
}

/// The user's home directory from the `HOME` variable.
///
/// Falls back to the empty string when unset, in which case a `cd` without
/// arguments fails the same way as `cd` to a missing directory.
pub fn home_dir() -> String {
    stdenv::var("HOME").unwrap_or_default()
}
