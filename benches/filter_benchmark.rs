//! Benchmark for parsing and filter evaluation
//!
//! Target: parse + apply over 10k records should stay well under 5ms

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use farmer_search_core::{
    apply, sample_farmers, translate, CachedParser, FarmerRecord, Filter, QueryParser, Range,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Create a synthetic corpus by perturbing the sample farmers
fn create_corpus(size: usize) -> Vec<FarmerRecord> {
    let mut rng = StdRng::seed_from_u64(42);
    let samples = sample_farmers();
    let districts = ["Nagpur", "Amravati", "Wardha", "Chandrapur", "Akola", "Yavatmal"];

    (0..size)
        .map(|i| {
            let base = samples.choose(&mut rng).expect("sample corpus is not empty");
            FarmerRecord {
                id: i.to_string(),
                age: rng.gen_range(18..=80),
                district: districts.choose(&mut rng).unwrap_or(&"Nagpur").to_string(),
                land_owned: rng.gen_range(0.5..20.0),
                irrigation_facility: rng.gen_bool(0.6),
                ..base.clone()
            }
        })
        .collect()
}

const QUERIES: [&str; 5] = [
    "Show me all farmers in Nagpur district",
    "Find female farmers who grow fruits",
    "List all farmers with FPO association and irrigation facilities",
    "Show me farmers who own more than 5 acres of land and grow rice",
    "Find Hindu farmers from Amravati who are married",
];

fn bench_parse(c: &mut Criterion) {
    let parser = QueryParser::sample();
    c.bench_function("parse_example_queries", |b| {
        b.iter(|| {
            for query in QUERIES {
                black_box(parser.parse(black_box(query)));
            }
        })
    });

    let cached = CachedParser::new(QueryParser::sample());
    c.bench_function("parse_example_queries_cached", |b| {
        b.iter(|| {
            for query in QUERIES {
                black_box(cached.parse(black_box(query)));
            }
        })
    });
}

fn bench_apply(c: &mut Criterion) {
    let corpus = create_corpus(10_000);
    let filter = Filter::default()
        .with_districts(["Nagpur", "Wardha"])
        .with_crop_types(["Cereals", "Fruits"])
        .with_age(Some(Range::new(25, 60)))
        .with_land_owned(Some(Range::at_least(5.0)))
        .with_irrigation(Some(true));

    c.bench_function("apply_10k_records", |b| {
        b.iter(|| black_box(apply(black_box(&filter), black_box(&corpus))))
    });

    c.bench_function("translate_filter", |b| {
        b.iter(|| black_box(translate(black_box(&filter), "farmers").to_query_string()))
    });
}

fn bench_end_to_end(c: &mut Criterion) {
    let corpus = create_corpus(10_000);
    let parser = QueryParser::sample();

    c.bench_function("parse_and_apply_10k", |b| {
        b.iter(|| {
            for query in QUERIES {
                let parsed = parser.parse(black_box(query)).normalized();
                black_box(apply(&parsed.filters, &corpus));
            }
        })
    });
}

criterion_group!(benches, bench_parse, bench_apply, bench_end_to_end);
criterion_main!(benches);
