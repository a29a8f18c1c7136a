use std::path::Path;

use crate::error::{Result, SearchError};
use crate::frequency::{FrequencyEntry, FrequencyTable};
use crate::loader::load_files;
use crate::registry::IndexedFile;
use crate::tfidf::{self, SearchResult};
use crate::tokenizer::{normalize_word, sanitize_line};
use crate::trie::{TrieIndex, Word};

/// A corpus indexed once; every query reads the same index.
#[derive(Debug)]
pub struct Corpus {
    index: TrieIndex,
}

impl Corpus {
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        Ok(Self { index: load_files(paths)? })
    }

    pub fn from_index(index: TrieIndex) -> Self { Self { index } }

    pub fn report_top_frequencies(&self, k: usize) -> Vec<FrequencyEntry> {
        FrequencyTable::from_index(&self.index, k).report()
    }

    /// Total occurrences of `word` across the corpus.
    pub fn count_word(&self, word: &str) -> Result<u64> {
        normalize_word(word)
            .and_then(|w| self.index.word_exists(&w))
            .map(|w| w.overall_frequency)
            .ok_or_else(|| SearchError::WordNotFound(word.to_string()))
    }

    pub fn search(&self, query: &str) -> Result<SearchResult> {
        tfidf::search(&self.index, query)
    }

    /// Words starting with `prefix`; the prefix must sanitize to a single token.
    pub fn complete(&self, prefix: &str) -> Vec<&Word> {
        match sanitize_line(prefix).as_slice() {
            [p] => self.index.words_with_prefix(p),
            _ => Vec::new(),
        }
    }

    pub fn index(&self) -> &TrieIndex { &self.index }

    pub fn files(&self) -> &[IndexedFile] { self.index.files() }
}
