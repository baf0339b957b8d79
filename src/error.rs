use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures while reading the base tables. Any of these stops startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: line {line}: {source}", path.display())]
    Row {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum ViewError {
    #[error("unknown view '{0}'. Valid views: home, delivery-tracking, products, sellers, transactions")]
    UnknownView(String),
}
