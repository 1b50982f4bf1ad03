use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glossbot::glossary::Glossary;
use glossbot::menu::MenuBuilder;
use glossbot::search::{SearchEngine, SubstringEngine};
use std::sync::Arc;

const SYLLABLES: [&str; 12] = [
    "ба", "ло", "ри", "ст", "ме", "ка", "ну", "те", "ви", "за", "до", "гр",
];

/// Deterministic glossary of `size` distinct terms spread over the alphabet.
fn create_glossary(size: usize) -> Arc<Glossary> {
    let letters: Vec<char> = ('А'..='Я').collect();
    let pairs = (0..size).map(|i| {
        let letter = letters[i % letters.len()];
        let a = SYLLABLES[i % SYLLABLES.len()];
        let b = SYLLABLES[(i / SYLLABLES.len()) % SYLLABLES.len()];
        (
            format!("{}{}{} {}", letter, a, b, i),
            format!("описание термина номер {}", i),
        )
    });
    Arc::new(Glossary::from_entries(pairs).expect("generated terms are unique"))
}

fn bench_inline_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline_search");

    for size in [100, 1_000, 10_000] {
        let engine = SubstringEngine::new(create_glossary(size));

        // Common substring: the scan stops after the fifth hit
        group.bench_with_input(BenchmarkId::new("early_exit", size), &engine, |b, engine| {
            b.iter(|| engine.search(black_box("бало")))
        });

        // No match: full scan
        group.bench_with_input(BenchmarkId::new("full_scan", size), &engine, |b, engine| {
            b.iter(|| engine.search(black_box("пингвин")))
        });
    }

    group.finish();
}

fn bench_letter_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("letter_page");

    for size in [1_000, 10_000] {
        let glossary = create_glossary(size);
        group.bench_with_input(BenchmarkId::new("page_3", size), &glossary, |b, glossary| {
            let builder = MenuBuilder::new(glossary);
            b.iter(|| builder.build_letter_page(black_box('К'), black_box(3)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_inline_search, bench_letter_pages);
criterion_main!(benches);
