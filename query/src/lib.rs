use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use wordindex::{Corpus, FrequencyEntry, SearchError, SearchHit, SearchResult, TermIdf};

#[derive(Parser)]
#[command(name = "wordtrie")]
#[command(about = "Word frequencies and TF-IDF search over a set of text files", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = Format::Text, env = "WORDTRIE_FORMAT")]
    pub format: Format,
    /// File extensions to pick up when an input is a directory
    #[arg(long = "ext", global = true, value_delimiter = ',', default_value = "txt", env = "WORDTRIE_EXT")]
    pub extensions: Vec<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the most frequent words across all inputs
    Freq {
        /// Number of words to report
        #[arg(long, short = 'k', default_value_t = 10, env = "WORDTRIE_TOP")]
        top: usize,
        /// Input files or directories
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Print how many times a word occurs across all inputs
    Count {
        word: String,
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Rank inputs by TF-IDF relevance to a query
    Search {
        query: String,
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// List indexed words starting with a prefix
    Complete {
        prefix: String,
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
pub struct SearchResponse<'a> {
    pub query: &'a str,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: &'a [SearchHit],
    pub terms: &'a [TermIdf],
}

#[derive(Serialize)]
struct CountResponse<'a> {
    word: &'a str,
    count: u64,
}

#[derive(Serialize)]
struct CompletionHit<'a> {
    text: &'a str,
    overall_frequency: u64,
    file_count: usize,
}

/// Expand inputs into the ordered list of files to index.
/// Directories are walked recursively and their matches sorted by path;
/// anything else is kept as given so unreadable paths surface when loading.
pub fn collect_inputs(inputs: &[PathBuf], extensions: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(input)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .map(|e| e.into_path())
                .filter(|p| has_extension(p, extensions))
                .collect();
            found.sort();
            tracing::debug!(dir = %input.display(), files = found.len(), "walked input directory");
            files.extend(found);
        } else {
            files.push(input.clone());
        }
    }
    files
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => extensions.iter().any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext)),
        None => false,
    }
}

fn open_corpus(inputs: &[PathBuf], extensions: &[String]) -> Result<Corpus> {
    let files = collect_inputs(inputs, extensions);
    if files.is_empty() {
        anyhow::bail!("no input files found");
    }
    Ok(Corpus::load(&files)?)
}

pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let format = cli.format;
    match cli.command {
        Commands::Freq { top, inputs } => {
            let corpus = open_corpus(&inputs, &cli.extensions)?;
            let entries = corpus.report_top_frequencies(top);
            render_frequencies(out, format, &entries)
        }
        Commands::Count { word, inputs } => {
            let corpus = open_corpus(&inputs, &cli.extensions)?;
            match corpus.count_word(&word) {
                Ok(count) => match format {
                    Format::Text => Ok(writeln!(out, "occurrences of {word}: {count}")?),
                    Format::Json => write_json(out, &CountResponse { word: &word, count }),
                },
                Err(err) => render_lookup_error(out, format, err),
            }
        }
        Commands::Search { query, inputs } => {
            let corpus = open_corpus(&inputs, &cli.extensions)?;
            let start = std::time::Instant::now();
            match corpus.search(&query) {
                Ok(result) => {
                    let took_s = start.elapsed().as_secs_f64();
                    render_search(out, format, &query, took_s, &result)
                }
                Err(err) => render_lookup_error(out, format, err),
            }
        }
        Commands::Complete { prefix, inputs } => {
            let corpus = open_corpus(&inputs, &cli.extensions)?;
            let words = corpus.complete(&prefix);
            match format {
                Format::Text => {
                    for w in &words {
                        writeln!(out, "{}: {}", w.text, w.overall_frequency)?;
                    }
                    Ok(())
                }
                Format::Json => {
                    let hits: Vec<CompletionHit> = words
                        .iter()
                        .map(|w| CompletionHit { text: &w.text, overall_frequency: w.overall_frequency, file_count: w.file_count() })
                        .collect();
                    write_json(out, &hits)
                }
            }
        }
    }
}

fn render_frequencies<W: Write>(out: &mut W, format: Format, entries: &[FrequencyEntry]) -> Result<()> {
    match format {
        Format::Text => {
            for e in entries {
                writeln!(out, "{}: {}", e.text, e.overall_frequency)?;
            }
            Ok(())
        }
        Format::Json => write_json(out, &entries),
    }
}

fn render_search<W: Write>(out: &mut W, format: Format, query: &str, took_s: f64, result: &SearchResult) -> Result<()> {
    let hits = &result.hits;
    match format {
        Format::Text => {
            for h in hits {
                writeln!(out, "{} - {}", h.name, h.score)?;
            }
            Ok(())
        }
        Format::Json => write_json(
            out,
            &SearchResponse { query, took_s, total_hits: hits.len(), results: hits, terms: &result.terms },
        ),
    }
}

// A missing word is an answer, not a failure; everything else propagates.
fn render_lookup_error<W: Write>(out: &mut W, format: Format, err: SearchError) -> Result<()> {
    let word = match err {
        SearchError::WordNotFound(word) => word,
        other => return Err(other.into()),
    };
    tracing::info!(%word, "lookup miss");
    match format {
        Format::Text => writeln!(out, "word not found: {word}")?,
        Format::Json => write_json(out, &serde_json::json!({ "error": "not found", "word": word }))?,
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
