pub mod core;
pub mod templates;

// Re-export commonly used types
pub use crate::core::{RenderConfig, TemplateError, TemplateResult};
pub use templates::{
    standardize_path, NoTheme, RenderOutcome, TemplateArgs, TemplateRenderer, ThemeDirs,
    ThemeLocator,
};
