//! CLI-level errors (wraps lower-layer errors)

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to render config: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Catalog(e) => match e {
                CatalogError::FileNotFound(_) => exitcode::NOINPUT,
                CatalogError::Io(_) => exitcode::IOERR,
            },
            CliError::Config(_) => exitcode::CONFIG,
            CliError::Render(_) => exitcode::SOFTWARE,
        }
    }
}
