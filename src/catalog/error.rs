//! Ingestion-level errors

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
