use miette::Diagnostic;
use thiserror::Error;

/// Main error type for flamegen operations
#[derive(Error, Diagnostic, Debug)]
pub enum FlameError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(flamegen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Encode error with {path}: {message}")]
    #[diagnostic(code(flamegen::encode))]
    Encode {
        path: std::path::PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, FlameError>;
