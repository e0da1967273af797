//! Benchmarks for the augmentation and tagging hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use piigen::{corpus, tagger, Augmenter, GeneratorConfig, RawAddress, Rng};

fn bench_mutate(c: &mut Criterion) {
    let aug = Augmenter::default();
    let mut rng = Rng::new(42);
    c.bench_function("mutate_address", |b| {
        b.iter(|| {
            aug.mutate(
                black_box("Blk 123 Serangoon Avenue 4 #05-678"),
                black_box("550123"),
                &mut rng,
            )
        })
    });
}

fn bench_tag(c: &mut Criterion) {
    c.bench_function("tag_person_and_location", |b| {
        b.iter(|| {
            tagger::tag(
                black_box("The patient John Tan lives at Blk 9 Bishan St 22 S570009."),
                black_box(Some("John Tan")),
                black_box(Some("Blk 9 Bishan St 22 S570009")),
                true,
            )
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    let addresses = vec![
        RawAddress {
            street: "Blk 123 Serangoon Avenue 4 #05-678".into(),
            zip_code: "550123".into(),
        },
        RawAddress {
            street: "Blk 9, Bishan Street 22".into(),
            zip_code: "570009".into(),
        },
    ];
    let names = vec!["John Tan".to_string(), "Siti binti Abdullah".to_string()];
    let config = GeneratorConfig {
        total: 600,
        ..Default::default()
    };
    c.bench_function("generate_600_sentences", |b| {
        b.iter(|| {
            let mut rng = Rng::new(7);
            corpus::generate(&addresses, &names, &config, &mut rng).unwrap()
        })
    });
}

criterion_group!(benches, bench_mutate, bench_tag, bench_generate);
criterion_main!(benches);
