use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error ({operation} {path}): {source}")]
    Io {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(operation: &str, path: &Path, source: std::io::Error) -> Error {
        Error::Io {
            operation: operation.to_string(),
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Error::Io { .. } => "IO_ERROR",
        }
    }
}
