//! Search and paging benchmarks over a synthetic dictionary.
//!
//! Run with: cargo bench

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wort::{Blob, Index, IndexEntry, Pager};

/// Build an n-entry dictionary with short generated definitions.
fn synthetic_dictionary(n: usize) -> (Index, Blob) {
    let mut entries = Vec::with_capacity(n);
    let mut data = String::new();

    for i in 0..n {
        let term = format!("term{i:06}");
        entries.push(IndexEntry::new(term.clone(), data.len() as u64));
        data.push_str(&format!("{term}: definition of entry {i}\n"));
    }

    (Index::from_entries(entries), Blob::from_bytes(data.into_bytes()))
}

fn bench_search(c: &mut Criterion) {
    let (index, _blob) = synthetic_dictionary(10_000);

    c.bench_function("search_hit_10k", |b| {
        b.iter(|| index.search(black_box("term004999")).unwrap())
    });

    c.bench_function("search_miss_10k", |b| {
        b.iter(|| index.search(black_box("term004999a")).unwrap())
    });
}

fn bench_page(c: &mut Criterion) {
    let (index, blob) = synthetic_dictionary(10_000);
    let pager = Pager::new(&index, &blob);

    c.bench_function("page_10k", |b| {
        b.iter(|| pager.page(black_box(4_999)).unwrap())
    });
}

criterion_group!(benches, bench_search, bench_page);
criterion_main!(benches);
