//! Error types for indexing and querying.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// A corpus file could not be opened or was not valid UTF-8.
    #[error("cannot read {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A looked-up word does not occur anywhere in the corpus.
    #[error("word not found: {0}")]
    WordNotFound(String),

    /// Term frequency requested for a file with no indexable words.
    #[error("file {file} has no indexed words")]
    DivisionByZero { file: String },
}

impl SearchError {
    pub fn file_unreadable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        SearchError::FileUnreadable { path: path.into(), source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SearchError::WordNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
