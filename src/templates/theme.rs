use std::path::{Path, PathBuf};

/// The host theming layer's override lookup.
///
/// Given a candidate path relative to a theme root (plugin slug joined with
/// the standardized template path), an implementation either resolves it to
/// an absolute override file or reports that no theme supplies one. The
/// search order inside a theme hierarchy is the implementation's business;
/// the renderer only cares about hit or miss.
pub trait ThemeLocator {
    fn locate_override(&self, candidate: &Path) -> Option<PathBuf>;
}

/// No active theme: every lookup misses and the plugin fallback is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTheme;

impl ThemeLocator for NoTheme {
    fn locate_override(&self, _candidate: &Path) -> Option<PathBuf> {
        None
    }
}

/// Ordered theme root directories, searched first-hit-wins.
///
/// Listing a child theme before its parent reproduces the usual hierarchy:
/// the child's file shadows the parent's.
#[derive(Debug, Clone, Default)]
pub struct ThemeDirs {
    roots: Vec<PathBuf>,
}

impl ThemeDirs {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        ThemeDirs { roots }
    }

    pub fn single(root: impl Into<PathBuf>) -> Self {
        ThemeDirs { roots: vec![root.into()] }
    }
}

impl ThemeLocator for ThemeDirs {
    fn locate_override(&self, candidate: &Path) -> Option<PathBuf> {
        for root in &self.roots {
            let path = root.join(candidate);
            if path.is_file() {
                tracing::debug!(path = %path.display(), "theme override located");
                return Some(path);
            }
        }
        None
    }
}

impl<F> ThemeLocator for F
where
    F: Fn(&Path) -> Option<PathBuf>,
{
    fn locate_override(&self, candidate: &Path) -> Option<PathBuf> {
        self(candidate)
    }
}
