use criterion::{criterion_group, criterion_main, Criterion};
use wordindex::loader::index_texts;
use wordindex::tfidf::search;
use wordindex::FrequencyTable;

const TEXT: &str = include_str!("../src/tfidf.rs");

fn bench_index(c: &mut Criterion) {
    let docs = [("a", TEXT), ("b", TEXT), ("c", "unrelated filler text for idf")];
    c.bench_function("index_three_files", |b| b.iter(|| index_texts(&docs)));

    let index = index_texts(&docs);
    c.bench_function("search_two_terms", |b| b.iter(|| search(&index, "files score")));
    c.bench_function("top_ten", |b| b.iter(|| FrequencyTable::from_index(&index, 10).report()));
}

criterion_group!(benches, bench_index);
criterion_main!(benches);
