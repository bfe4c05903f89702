use criterion::{Criterion, black_box, criterion_group, criterion_main};
use katameros_data::{Synaxarium, SynaxariumEntry};
use katameros_search::SynaxariumIndex;

fn synthetic_synaxarium(entries_per_day: usize) -> Synaxarium {
    let months = ["Tout", "Baba", "Hator", "Kiahk", "Toba", "Amshir"];
    let mut synaxarium = Synaxarium::default();
    for (m, month) in months.iter().enumerate() {
        for day in 1..=30 {
            let key = format!("{day} {month}");
            let entries = (0..entries_per_day)
                .map(|i| SynaxariumEntry {
                    name: Some(format!("Commemoration of Saint Number{m}x{day}x{i} of Egypt")),
                    url: None,
                    text: None,
                })
                .collect();
            synaxarium.days.insert(key, entries);
        }
    }
    synaxarium
}

fn bench_search(c: &mut Criterion) {
    let synaxarium = synthetic_synaxarium(10);
    let index = SynaxariumIndex::build(&synaxarium);

    c.bench_function("index_build", |b| {
        b.iter(|| SynaxariumIndex::build(black_box(&synaxarium)))
    });
    c.bench_function("search_indexed_word", |b| {
        b.iter(|| index.search(black_box("commemoration"), Some(50)))
    });
    c.bench_function("search_fallback_scan", |b| {
        b.iter(|| index.search(black_box("numb"), Some(50)))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
