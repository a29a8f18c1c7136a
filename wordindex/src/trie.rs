use serde::Serialize;
use std::collections::BTreeMap;

use crate::registry::{FileRegistry, IndexedFile};
use crate::{FileIndex, WordId};

/// A distinct token together with its occurrence counts across the corpus.
#[derive(Debug, Clone, Serialize)]
pub struct Word {
    pub id: WordId,
    pub text: String,
    pub overall_frequency: u64,
    /// Occurrences per file, keyed by registry position.
    pub occurrences: BTreeMap<FileIndex, u32>,
}

impl Word {
    fn new(id: WordId, text: &str) -> Self {
        Self { id, text: text.to_string(), overall_frequency: 0, occurrences: BTreeMap::new() }
    }

    fn record(&mut self, file: FileIndex) {
        self.overall_frequency += 1;
        *self.occurrences.entry(file).or_insert(0) += 1;
    }

    /// Number of distinct files containing this word.
    pub fn file_count(&self) -> usize { self.occurrences.len() }

    pub fn occurrences_in(&self, file: FileIndex) -> u32 {
        self.occurrences.get(&file).copied().unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct TrieNode {
    pub children: BTreeMap<char, TrieNode>,
    pub word: Option<Word>,
}

impl TrieNode {
    fn child(&self, ch: char) -> Option<&TrieNode> { self.children.get(&ch) }

    // Pre-order over sorted children yields words in lexicographic order.
    fn collect_words<'a>(&'a self, out: &mut Vec<&'a Word>) {
        if let Some(word) = &self.word {
            out.push(word);
        }
        for child in self.children.values() {
            child.collect_words(out);
        }
    }
}

/// Prefix tree over every indexed token plus the registry of files they came from.
#[derive(Debug, Default)]
pub struct TrieIndex {
    root: TrieNode,
    files: FileRegistry,
    next_word_id: WordId,
}

impl TrieIndex {
    pub fn new() -> Self { Self::default() }

    pub fn register_file<S: Into<String>>(&mut self, name: S) -> FileIndex {
        self.files.register(name)
    }

    /// Record one occurrence of `token` in `file`, creating the word on first sight.
    ///
    /// Panics if `file` was never registered with this index.
    pub fn insert_word(&mut self, token: &str, file: FileIndex) -> &Word {
        let Some(entry) = self.files.get_mut(file) else {
            panic!("file index {file} is not registered");
        };
        entry.word_count += 1;

        let mut node = &mut self.root;
        for ch in token.chars() {
            node = node.children.entry(ch).or_default();
        }
        let next_id = &mut self.next_word_id;
        let word = node.word.get_or_insert_with(|| {
            let id = *next_id;
            *next_id += 1;
            Word::new(id, token)
        });
        word.record(file);
        word
    }

    /// Read-only lookup; never creates nodes.
    pub fn word_exists(&self, token: &str) -> Option<&Word> {
        self.find_node(token)?.word.as_ref()
    }

    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.child(ch)?;
        }
        Some(node)
    }

    /// Words starting with `prefix`, in lexicographic order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<&Word> {
        let mut out = Vec::new();
        if let Some(node) = self.find_node(prefix) {
            node.collect_words(&mut out);
        }
        out
    }

    /// Every word, in the order it was first inserted.
    pub fn words(&self) -> Vec<&Word> {
        let mut out = Vec::with_capacity(self.next_word_id as usize);
        self.root.collect_words(&mut out);
        out.sort_by_key(|w| w.id);
        out
    }

    pub fn distinct_words(&self) -> usize { self.next_word_id as usize }

    pub fn file_count(&self) -> usize { self.files.len() }

    pub fn files(&self) -> &[IndexedFile] { self.files.as_slice() }

    pub fn file(&self, index: FileIndex) -> Option<&IndexedFile> { self.files.get(index) }

    pub fn registry(&self) -> &FileRegistry { &self.files }
}
