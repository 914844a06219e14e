use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("file has {found} non-empty lines, at least 6 are required")]
    TooFewLines { found: usize },
    #[error("invalid {field} value {value:?}")]
    InvalidHeader { field: &'static str, value: String },
}
