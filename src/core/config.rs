use serde::{Deserialize, Serialize};

pub const DEFAULT_EXTENSION: &str = ".jinja";

/// Environment variable consulted by [`RenderConfig::from_env`].
pub const STRICT_ENV_VAR: &str = "PLUGIN_TEMPLATES_STRICT";

/// Execution policy for the renderer.
///
/// `strict` selects between raising errors and degrading silently when
/// arguments are malformed or the resolved template is missing. `extension`
/// is the canonical template extension that path standardization enforces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub strict: bool,
    pub extension: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            strict: false,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    /// Reads the strict flag from `PLUGIN_TEMPLATES_STRICT` ("1" or "true"),
    /// keeping the default extension.
    pub fn from_env() -> Self {
        let strict = std::env::var(STRICT_ENV_VAR)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        RenderConfig {
            strict,
            ..RenderConfig::default()
        }
    }
}

#[derive(Default)]
pub struct RenderConfigBuilder {
    strict: Option<bool>,
    extension: Option<String>,
}

impl RenderConfigBuilder {
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn build(self) -> RenderConfig {
        let default = RenderConfig::default();
        RenderConfig {
            strict: self.strict.unwrap_or(default.strict),
            extension: self.extension.unwrap_or(default.extension),
        }
    }
}
