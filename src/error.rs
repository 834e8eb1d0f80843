use miette::Diagnostic;
use thiserror::Error;

/// Main error type for artboard export operations
#[derive(Error, Diagnostic, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    #[diagnostic(code(abx::io))]
    IoError(#[from] std::io::Error),

    #[error("Missing precondition: {message}")]
    #[diagnostic(code(abx::precondition))]
    MissingPrecondition {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Filesystem error with {path}: {message}")]
    #[diagnostic(code(abx::filesystem))]
    Filesystem {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Render error for artboard '{artboard}' ({preset}): {message}")]
    #[diagnostic(code(abx::render))]
    Render {
        artboard: String,
        preset: String,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(abx::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;
