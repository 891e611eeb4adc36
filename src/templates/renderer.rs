use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use minijinja::Environment;

use crate::core::{RenderConfig, TemplateError, TemplateResult};

use super::path::standardize_path;
use super::theme::{NoTheme, ThemeLocator};

/// Variables bound into the template's scope, one named binding per entry.
pub type TemplateArgs = HashMap<String, serde_json::Value>;

/// What a lenient-mode render call actually did.
///
/// `Skipped` (malformed arguments) and `NotFound` (missing file) are kept
/// distinct on purpose; callers distinguish the two non-error outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    Skipped,
    NotFound,
}

/// Resolves and renders plugin template parts.
///
/// Resolution prefers a theme-supplied override (looked up through the
/// [`ThemeLocator`] under the plugin's slug) and falls back to the file
/// inside the plugin directory itself. The resolved path is computed fresh
/// on every call and never cached.
pub struct TemplateRenderer<L = NoTheme> {
    config: RenderConfig,
    theme: L,
}

impl TemplateRenderer<NoTheme> {
    pub fn new(config: RenderConfig) -> Self {
        TemplateRenderer { config, theme: NoTheme }
    }
}

impl<L: ThemeLocator> TemplateRenderer<L> {
    pub fn with_theme(config: RenderConfig, theme: L) -> Self {
        TemplateRenderer { config, theme }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders a template part directly into `sink`.
    ///
    /// In strict mode malformed arguments and missing files are errors; in
    /// lenient mode they come back as [`RenderOutcome::Skipped`] and
    /// [`RenderOutcome::NotFound`] with nothing written. Read and render
    /// failures propagate in both modes.
    pub fn render_part(
        &self,
        plugin_dir: &str,
        relative_path: &str,
        args: &TemplateArgs,
        sink: &mut dyn Write,
    ) -> TemplateResult<RenderOutcome> {
        // Read per call, never cached across calls.
        let strict = self.config.strict;

        if plugin_dir.is_empty() || relative_path.is_empty() {
            if strict {
                return Err(TemplateError::InvalidArgument);
            }
            tracing::debug!("empty plugin dir or relative path, skipping render");
            return Ok(RenderOutcome::Skipped);
        }

        let template = self.resolve(plugin_dir, relative_path);

        if !template.is_file() {
            if strict {
                return Err(TemplateError::TemplateNotFound { path: template });
            }
            tracing::debug!(path = %template.display(), "template missing, skipping render");
            return Ok(RenderOutcome::NotFound);
        }

        let source = std::fs::read_to_string(&template).map_err(|source| TemplateError::Io {
            path: template.clone(),
            source,
        })?;

        let mut env = Environment::new();
        // The engine trims a single trailing newline by default; the file's
        // contents must come through byte-for-byte.
        env.set_keep_trailing_newline(true);
        let part = env.template_from_str(&source)?;
        part.render_to_write(args, &mut *sink)?;

        tracing::debug!(path = %template.display(), "rendered template part");
        Ok(RenderOutcome::Rendered)
    }

    /// Renders a template part and returns the output as a string.
    ///
    /// The emit-mode outcome is discarded: lenient-mode skips and misses
    /// yield an empty string, while errors propagate unchanged.
    pub fn render_part_to_string(
        &self,
        plugin_dir: &str,
        relative_path: &str,
        args: &TemplateArgs,
    ) -> TemplateResult<String> {
        let mut buffer = Vec::new();
        self.render_part(plugin_dir, relative_path, args, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    fn resolve(&self, plugin_dir: &str, relative_path: &str) -> PathBuf {
        let standardized = standardize_path(relative_path, &self.config.extension);

        // The plugin's final path segment doubles as its slug under theme
        // roots; an empty slug (e.g. plugin_dir == "/") just means the
        // override candidate is the bare relative path.
        let slug = Path::new(plugin_dir).file_name().unwrap_or_default();
        let candidate = Path::new(slug).join(&standardized);

        match self.theme.locate_override(&candidate) {
            Some(override_path) => override_path,
            None => Path::new(plugin_dir).join(&standardized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lenient() -> RenderConfig {
        RenderConfig::default()
    }

    #[test]
    fn resolve_falls_back_to_plugin_dir() {
        let renderer = TemplateRenderer::new(lenient());
        let resolved = renderer.resolve("/plugins/gallery", "templates/header");
        assert_eq!(resolved, PathBuf::from("/plugins/gallery/templates/header.jinja"));
    }

    #[test]
    fn resolve_queries_locator_with_slug_candidate() {
        let seen = std::sync::Mutex::new(Vec::new());
        let locator = |candidate: &Path| -> Option<PathBuf> {
            seen.lock().unwrap().push(candidate.to_path_buf());
            None
        };

        let renderer = TemplateRenderer::with_theme(lenient(), locator);
        renderer.resolve("/plugins/gallery", "templates/header");

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec![PathBuf::from("gallery/templates/header.jinja")]);
    }

    #[test]
    fn resolve_prefers_override() {
        let locator =
            |_: &Path| -> Option<PathBuf> { Some(PathBuf::from("/theme/gallery/templates/header.jinja")) };
        let renderer = TemplateRenderer::with_theme(lenient(), locator);
        let resolved = renderer.resolve("/plugins/gallery", "templates/header");
        assert_eq!(resolved, PathBuf::from("/theme/gallery/templates/header.jinja"));
    }

    #[test]
    fn resolve_standardizes_with_configured_extension() {
        let config = RenderConfig::builder().extension(".php").build();
        let renderer = TemplateRenderer::new(config);
        let resolved = renderer.resolve("/plugins/gallery", "templates/header.php");
        assert_eq!(resolved, PathBuf::from("/plugins/gallery/templates/header.php"));
    }
}
