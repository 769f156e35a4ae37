//! hs-catalog: canonical catalog file format, runtime model, and validation.

pub mod io;
pub mod model;
pub mod schema;
pub mod validate;

pub use io::load_catalog;
pub use model::*;
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_catalog};

use std::path::PathBuf;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported catalog file extension: {path}")]
    UnsupportedFormat { path: PathBuf },
}
