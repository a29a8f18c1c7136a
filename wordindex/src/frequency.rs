use serde::Serialize;
use std::collections::HashMap;

use crate::trie::{TrieIndex, Word};
use crate::WordId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    #[serde(skip)]
    pub word_id: WordId,
    pub text: String,
    pub overall_frequency: u64,
}

impl FrequencyEntry {
    // Higher frequency first, then earlier-created word.
    fn outranks(&self, other: &FrequencyEntry) -> bool {
        self.overall_frequency > other.overall_frequency
            || (self.overall_frequency == other.overall_frequency && self.word_id < other.word_id)
    }
}

impl From<&Word> for FrequencyEntry {
    fn from(word: &Word) -> Self {
        Self { word_id: word.id, text: word.text.clone(), overall_frequency: word.overall_frequency }
    }
}

fn sort_ranked(entries: &mut [FrequencyEntry]) {
    entries.sort_by(|a, b| {
        b.overall_frequency
            .cmp(&a.overall_frequency)
            .then(a.word_id.cmp(&b.word_id))
    });
}

/// Keeps the `k` most frequent words seen so far, one entry per distinct word.
///
/// Inserting a word that is already held refreshes its frequency in place, so the
/// table can be fed once per token occurrence and still report each word once.
#[derive(Debug)]
pub struct FrequencyTable {
    k: usize,
    entries: Vec<FrequencyEntry>,
    // word id -> position in `entries`
    slots: HashMap<WordId, usize>,
}

impl FrequencyTable {
    pub fn new(k: usize) -> Self {
        Self { k, entries: Vec::new(), slots: HashMap::new() }
    }

    /// Table populated from every word of a built index.
    pub fn from_index(index: &TrieIndex, k: usize) -> Self {
        let mut entries: Vec<FrequencyEntry> = index.words().into_iter().map(FrequencyEntry::from).collect();
        sort_ranked(&mut entries);
        entries.truncate(k);
        let slots = entries.iter().enumerate().map(|(i, e)| (e.word_id, i)).collect();
        Self { k, entries, slots }
    }

    pub fn insert_word(&mut self, word: &Word) {
        if self.k == 0 {
            return;
        }
        if let Some(&i) = self.slots.get(&word.id) {
            self.entries[i].overall_frequency = word.overall_frequency;
            return;
        }
        let candidate = FrequencyEntry::from(word);
        if self.entries.len() < self.k {
            self.slots.insert(word.id, self.entries.len());
            self.entries.push(candidate);
            return;
        }
        let weakest = self
            .entries
            .iter()
            .enumerate()
            .reduce(|worst, cur| if worst.1.outranks(cur.1) { cur } else { worst })
            .map(|(i, _)| i);
        if let Some(i) = weakest {
            if candidate.outranks(&self.entries[i]) {
                self.slots.remove(&self.entries[i].word_id);
                self.slots.insert(word.id, i);
                self.entries[i] = candidate;
            }
        }
    }

    /// Held words, most frequent first.
    pub fn report(&self) -> Vec<FrequencyEntry> {
        let mut out = self.entries.clone();
        sort_ranked(&mut out);
        out
    }

    pub fn capacity(&self) -> usize { self.k }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(tokens: &[&str]) -> TrieIndex {
        let mut trie = TrieIndex::new();
        let f = trie.register_file("f");
        for t in tokens {
            trie.insert_word(t, f);
        }
        trie
    }

    fn texts(entries: &[FrequencyEntry]) -> Vec<(&str, u64)> {
        entries.iter().map(|e| (e.text.as_str(), e.overall_frequency)).collect()
    }

    #[test]
    fn reports_top_k_descending() {
        let trie = index_of(&["one", "two", "two", "three", "three", "three", "four"]);
        let table = FrequencyTable::from_index(&trie, 2);
        assert_eq!(texts(&table.report()), vec![("three", 3), ("two", 2)]);
    }

    #[test]
    fn ties_keep_first_inserted_order() {
        let trie = index_of(&["bbb", "aaa", "ccc", "aaa", "bbb", "ccc"]);
        let table = FrequencyTable::from_index(&trie, 2);
        assert_eq!(texts(&table.report()), vec![("bbb", 2), ("aaa", 2)]);
    }

    #[test]
    fn fewer_words_than_k_reports_all() {
        let trie = index_of(&["solo", "duo", "duo"]);
        let table = FrequencyTable::from_index(&trie, 10);
        assert_eq!(texts(&table.report()), vec![("duo", 2), ("solo", 1)]);
    }

    #[test]
    fn huge_k_reports_every_word() {
        let trie = index_of(&["alpha", "beta", "beta"]);
        let table = FrequencyTable::from_index(&trie, usize::MAX);
        assert_eq!(texts(&table.report()), vec![("beta", 2), ("alpha", 1)]);

        let mut fed = FrequencyTable::new(usize::MAX);
        for w in trie.words() {
            fed.insert_word(w);
        }
        assert_eq!(fed.len(), 2);
    }

    #[test]
    fn zero_k_reports_nothing() {
        let trie = index_of(&["word"]);
        assert!(FrequencyTable::from_index(&trie, 0).report().is_empty());
    }

    #[test]
    fn per_occurrence_feeding_does_not_duplicate() {
        let mut trie = TrieIndex::new();
        let f = trie.register_file("f");
        let mut table = FrequencyTable::new(2);
        for t in ["low", "late", "late", "low", "late", "new"] {
            let w = trie.insert_word(t, f);
            table.insert_word(w);
        }
        assert_eq!(texts(&table.report()), vec![("late", 3), ("low", 2)]);
    }

    #[test]
    fn evicted_word_can_return_once_it_overtakes() {
        let mut trie = TrieIndex::new();
        let f = trie.register_file("f");
        let mut table = FrequencyTable::new(1);
        for t in ["aaa", "bbb", "bbb"] {
            let w = trie.insert_word(t, f);
            table.insert_word(w);
        }
        assert_eq!(texts(&table.report()), vec![("bbb", 2)]);
        for _ in 0..2 {
            let w = trie.insert_word("aaa", f);
            table.insert_word(w);
        }
        assert_eq!(texts(&table.report()), vec![("aaa", 3)]);
    }
}
