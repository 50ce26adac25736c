use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slbc_kosha::{Entry, Kosha, RegistryKind};

fn sample_kosha() -> Kosha {
    let entries: Vec<Entry> = (0..2000)
        .map(|i| Entry {
            id: i,
            iast: format!("dhatu{i}"),
            metadata: Vec::new(),
        })
        .collect();
    Kosha::from_entries(RegistryKind::Dhatu, 1, entries)
}

fn lookup_benchmark(c: &mut Criterion) {
    let kosha = sample_kosha();

    c.bench_function("lookup_by_iast", |b| {
        b.iter(|| kosha.lookup_by_iast(black_box("dhatu1000")))
    });

    c.bench_function("lookup_by_id", |b| {
        b.iter(|| kosha.lookup_by_id(black_box(1000)))
    });
}

criterion_group!(benches, lookup_benchmark);
criterion_main!(benches);
