use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, SearchError};
use crate::tokenizer::index_terms;
use crate::trie::TrieIndex;
use crate::FileIndex;

/// Build a fresh index from `paths`, in the given order.
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<TrieIndex> {
    let mut index = TrieIndex::new();
    for path in paths {
        load_file(&mut index, path.as_ref())?;
    }
    tracing::info!(
        files = index.file_count(),
        distinct_words = index.distinct_words(),
        "index built"
    );
    Ok(index)
}

/// Open `path`, register it and stream its contents into `index`.
///
/// A file that cannot be opened leaves `index` untouched. A decode error part way
/// through leaves the file registered with the tokens read before the error.
pub fn load_file(index: &mut TrieIndex, path: &Path) -> Result<FileIndex> {
    let reader = File::open(path)
        .map(BufReader::new)
        .map_err(|e| SearchError::file_unreadable(path, e))?;
    let file = index.register_file(path.to_string_lossy());
    let tokens = index_reader(index, file, reader)
        .map_err(|e| SearchError::file_unreadable(path, e))?;
    tracing::debug!(path = %path.display(), tokens, "indexed file");
    Ok(file)
}

/// Insert every indexable token of `reader` into `index` under `file`.
/// Returns the number of tokens inserted.
pub fn index_reader<R: BufRead>(index: &mut TrieIndex, file: FileIndex, reader: R) -> io::Result<u64> {
    let mut inserted = 0u64;
    for line in reader.lines() {
        let line = line?;
        for term in index_terms(&line) {
            index.insert_word(&term, file);
            inserted += 1;
        }
    }
    Ok(inserted)
}

/// Convenience for in-memory corpora: one `(name, text)` pair per file.
pub fn index_texts<S: AsRef<str>>(docs: &[(S, S)]) -> TrieIndex {
    let mut index = TrieIndex::new();
    for (name, text) in docs {
        let file = index.register_file(name.as_ref());
        for term in text.as_ref().lines().flat_map(index_terms) {
            index.insert_word(&term, file);
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn unopenable_file_is_not_registered() {
        let dir = tempfile::tempdir().unwrap();
        let mut index = TrieIndex::new();
        let err = load_file(&mut index, &dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, SearchError::FileUnreadable { .. }));
        assert_eq!(index.file_count(), 0);
        assert_eq!(index.distinct_words(), 0);
    }

    #[test]
    fn reader_counts_inserted_tokens() {
        let mut index = TrieIndex::new();
        let f = index.register_file("mem");
        let n = index_reader(&mut index, f, Cursor::new("one two three\nfour, five")).unwrap();
        assert_eq!(n, 5);
        assert_eq!(index.files()[0].word_count, 5);
    }
}
