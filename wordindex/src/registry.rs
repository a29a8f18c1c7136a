use serde::Serialize;
use sha1::{Digest, Sha1};

use crate::FileIndex;

#[derive(Debug, Clone, Serialize)]
pub struct IndexedFile {
    pub index: FileIndex,
    /// Display name, normally the path the file was read from.
    pub name: String,
    /// Hex SHA-1 of `name`.
    pub identifier: String,
    /// Number of indexed tokens read from this file.
    pub word_count: u64,
}

impl IndexedFile {
    fn new(index: FileIndex, name: String) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(name.as_bytes());
        let identifier = format!("{:x}", hasher.finalize());
        Self { index, name, identifier, word_count: 0 }
    }
}

/// Files of a corpus in registration order; a file's index is its position.
#[derive(Debug, Default)]
pub struct FileRegistry {
    files: Vec<IndexedFile>,
}

impl FileRegistry {
    pub fn new() -> Self { Self::default() }

    pub fn register<S: Into<String>>(&mut self, name: S) -> FileIndex {
        let index = self.files.len() as FileIndex;
        self.files.push(IndexedFile::new(index, name.into()));
        index
    }

    pub fn get(&self, index: FileIndex) -> Option<&IndexedFile> {
        self.files.get(index as usize)
    }

    pub(crate) fn get_mut(&mut self, index: FileIndex) -> Option<&mut IndexedFile> {
        self.files.get_mut(index as usize)
    }

    pub fn len(&self) -> usize { self.files.len() }

    pub fn is_empty(&self) -> bool { self.files.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexedFile> {
        self.files.iter()
    }

    pub fn as_slice(&self) -> &[IndexedFile] { &self.files }
}
