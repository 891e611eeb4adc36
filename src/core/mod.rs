pub mod config;
pub mod error;

pub use config::{RenderConfig, RenderConfigBuilder, DEFAULT_EXTENSION};
pub use error::{TemplateError, TemplateResult};
