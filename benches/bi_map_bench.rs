use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;
use tagmap::{BiMap, Tag};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn value(n: u64) -> String {
    format!("v{:016x}", n)
}

fn bench_insert_fresh_100k(c: &mut Criterion) {
    c.bench_function("bi_map::insert_fresh_100k", |b| {
        b.iter_batched(
            BiMap::<String>::new,
            |mut m| {
                for x in lcg(1).take(100_000) {
                    let _ = m.insert(value(x));
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_tag_of_hit_10k(c: &mut Criterion) {
    let mut m = BiMap::new();
    let values: Vec<String> = lcg(2).take(10_000).map(value).collect();
    for v in &values {
        let _ = m.insert(v.clone());
    }
    c.bench_function("bi_map::tag_of_hit_10k", |b| {
        b.iter(|| {
            let mut found = 0usize;
            for v in &values {
                if m.tag_of(black_box(v.as_str())).is_some() {
                    found += 1;
                }
            }
            black_box(found)
        })
    });
}

fn bench_tag_of_miss_10k(c: &mut Criterion) {
    let mut m = BiMap::new();
    for x in lcg(3).take(10_000) {
        let _ = m.insert(value(x));
    }
    let missing: Vec<String> = lcg(999).take(10_000).map(value).collect();
    c.bench_function("bi_map::tag_of_miss_10k", |b| {
        b.iter(|| {
            let mut found = 0usize;
            for v in &missing {
                if m.tag_of(black_box(v.as_str())).is_some() {
                    found += 1;
                }
            }
            black_box(found)
        })
    });
}

fn bench_associate_churn_10k(c: &mut Criterion) {
    c.bench_function("bi_map::associate_churn_10k", |b| {
        b.iter_batched(
            || {
                let mut m = BiMap::new();
                let tags: Vec<Tag> = lcg(4).take(10_000).map(|x| m.insert(value(x))).collect();
                (m, tags)
            },
            |(mut m, tags)| {
                // Rewrite every tag's value in place through the
                // teardown-then-write path.
                for (i, &t) in tags.iter().enumerate() {
                    let _ = m.associate(t, value(i as u64));
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_dissociate_reinsert_10k(c: &mut Criterion) {
    c.bench_function("bi_map::dissociate_reinsert_10k", |b| {
        b.iter_batched(
            || {
                let mut m = BiMap::new();
                let tags: Vec<Tag> = lcg(5).take(10_000).map(|x| m.insert(value(x))).collect();
                (m, tags)
            },
            |(mut m, tags)| {
                for &t in &tags {
                    let _ = m.dissociate_tag(t);
                }
                for x in lcg(6).take(10_000) {
                    let _ = m.insert(value(x));
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(12)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches_insert;
    config = bench_config();
    targets = bench_insert_fresh_100k
}
criterion_group! {
    name = benches_ops;
    config = bench_config();
    targets = bench_tag_of_hit_10k,
              bench_tag_of_miss_10k,
              bench_associate_churn_10k,
              bench_dissociate_reinsert_10k
}
criterion_main!(benches_insert, benches_ops);
