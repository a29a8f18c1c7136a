pub mod corpus;
pub mod error;
pub mod frequency;
pub mod loader;
pub mod registry;
pub mod tfidf;
pub mod tokenizer;
pub mod trie;

pub use corpus::Corpus;
pub use error::{Result, SearchError};
pub use frequency::{FrequencyEntry, FrequencyTable};
pub use registry::{FileRegistry, IndexedFile};
pub use tfidf::{SearchHit, SearchResult, TermIdf};
pub use trie::{TrieIndex, TrieNode, Word};

/// Position of a file in the registry, assigned at registration.
pub type FileIndex = u32;
/// Creation order of a distinct word in the trie.
pub type WordId = u32;
