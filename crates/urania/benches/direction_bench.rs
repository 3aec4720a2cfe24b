use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::aspects::MAJOR_ASPECTS;
use urania::chart::ChartSnapshot;
use urania::directions::{build_table, DirectionSettings};

fn bench_build_table(c: &mut Criterion) {
    let chart =
        ChartSnapshot::from_json(include_str!("../tests/fixtures/chart_2015.json")).unwrap();

    c.bench_function("build_direction_table", |b| {
        b.iter(|| {
            build_table(
                black_box(&chart),
                black_box(MAJOR_ASPECTS),
                DirectionSettings::default(),
            )
        })
    });
}

criterion_group!(benches, bench_build_table);
criterion_main!(benches);
