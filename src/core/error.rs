use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("invalid plugin dir or template relative path")]
    InvalidArgument,

    #[error("template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    #[error("failed to read template {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template render failed")]
    Render(#[from] minijinja::Error),

    #[error("rendered output was not valid UTF-8")]
    OutputEncoding(#[from] std::string::FromUtf8Error),
}

pub type TemplateResult<T> = Result<T, TemplateError>;
