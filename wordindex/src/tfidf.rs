//! TF-IDF relevance ranking over a built [`TrieIndex`].
//!
//! A query is split into terms with [`index_terms`]. Every term must exist in the
//! index, otherwise the whole search fails with [`SearchError::WordNotFound`] and
//! no partial ranking is produced.
//!
//! Per-file scores are combined term by term: the first term that touches a file
//! sets its score to `tf * idf`, every later term replaces it with the mean of the
//! accumulated score and the new `tf * idf`. Later terms therefore weigh more than
//! earlier ones. Rankings depend on this, so it is kept as is.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::{Result, SearchError};
use crate::tokenizer::index_terms;
use crate::trie::{TrieIndex, Word};
use crate::FileIndex;

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub file: FileIndex,
    pub name: String,
    pub score: f64,
}

/// IDF of one distinct query term, as used for the ranking.
#[derive(Debug, Clone, Serialize)]
pub struct TermIdf {
    pub term: String,
    pub idf: f64,
    pub file_count: usize,
}

/// Ranked files plus the IDF of every distinct query term, in query order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResult {
    pub hits: Vec<SearchHit>,
    pub terms: Vec<TermIdf>,
}

/// Occurrences of `word` in `file` divided by the file's indexed word count.
///
/// Panics if `file` was never registered with `index`.
pub fn calc_tf(index: &TrieIndex, word: &Word, file: FileIndex) -> Result<f64> {
    let Some(entry) = index.file(file) else {
        panic!("file index {file} is not registered");
    };
    if entry.word_count == 0 {
        return Err(SearchError::DivisionByZero { file: entry.name.clone() });
    }
    Ok(word.occurrences_in(file) as f64 / entry.word_count as f64)
}

/// `log10(total_files / files containing word)`, without smoothing.
pub fn calc_idf(word: &Word, total_files: usize) -> f64 {
    (total_files as f64 / word.file_count() as f64).log10()
}

/// Rank files by relevance to `query`, best first.
pub fn search(index: &TrieIndex, query: &str) -> Result<SearchResult> {
    let query_terms = index_terms(query);

    let mut words = Vec::with_capacity(query_terms.len());
    for term in &query_terms {
        match index.word_exists(term) {
            Some(word) => words.push(word),
            None => return Err(SearchError::WordNotFound(term.clone())),
        }
    }

    let total_files = index.file_count();
    let mut terms: Vec<TermIdf> = Vec::new();
    let mut term_slot: HashMap<&str, usize> = HashMap::new();
    // Files in the order they first received a score.
    let mut scored: Vec<(FileIndex, f64)> = Vec::new();
    let mut slot: HashMap<FileIndex, usize> = HashMap::new();

    for word in words {
        let idf = match term_slot.get(word.text.as_str()) {
            Some(&i) => terms[i].idf,
            None => {
                let idf = calc_idf(word, total_files);
                term_slot.insert(word.text.as_str(), terms.len());
                terms.push(TermIdf { term: word.text.clone(), idf, file_count: word.file_count() });
                idf
            }
        };
        for &file in word.occurrences.keys() {
            let tf = match calc_tf(index, word, file) {
                Ok(tf) => tf,
                Err(err) => {
                    tracing::warn!(%err, file, "treating file as zero relevance");
                    0.0
                }
            };
            let value = tf * idf;
            match slot.get(&file) {
                Some(&i) => scored[i].1 = (value + scored[i].1) / 2.0,
                None => {
                    slot.insert(file, scored.len());
                    scored.push((file, value));
                }
            }
        }
        tracing::debug!(term = %word.text, idf, files = word.file_count(), "scored term");
    }

    // stable: ties keep first-scored order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let hits = scored
        .into_iter()
        .filter_map(|(file, score)| {
            index.file(file).map(|f| SearchHit { file, name: f.name.clone(), score })
        })
        .collect();
    Ok(SearchResult { hits, terms })
}
