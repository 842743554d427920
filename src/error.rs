use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("category {category:?}: invalid pattern {pattern:?}")]
    Pattern {
        category: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("category {0:?} is declared more than once")]
    Duplicate(String),
    #[error("category name {0:?} is reserved for unmatched titles")]
    Reserved(String),
    #[error("category name must not be empty")]
    EmptyName,
    #[error("failed to read taxonomy file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse taxonomy file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input document {0:?} does not exist")]
    Missing(PathBuf),
    #[error("failed to read input document {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
