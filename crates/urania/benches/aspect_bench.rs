use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::aspects::{AspectCalculator, AspectCatalogue, MAJOR_ASPECTS};
use urania::chart::{ids, ChartPoint, ChartSnapshot};

fn bench_evaluate(c: &mut Criterion) {
    let calculator = AspectCalculator::default();
    let sun = ChartPoint::body(ids::SUN, 352.79, 0.0, 0.9976).unwrap();
    let moon = ChartPoint::body(ids::MOON, 262.38, 5.03, 13.27).unwrap();

    c.bench_function("evaluate_major", |b| {
        b.iter(|| {
            calculator.evaluate(
                black_box(&sun),
                black_box(&moon),
                black_box(MAJOR_ASPECTS),
            )
        })
    });
}

fn bench_chart_aspects(c: &mut Criterion) {
    let calculator = AspectCalculator::default();
    let chart =
        ChartSnapshot::from_json(include_str!("../tests/fixtures/chart_2015.json")).unwrap();
    let points: Vec<&str> = chart.points.keys().map(String::as_str).collect();
    let all = AspectCatalogue::standard().angles();

    c.bench_function("chart_aspects_all_angles", |b| {
        b.iter(|| calculator.chart_aspects(black_box(&chart), black_box(&points), black_box(&all)))
    });
}

criterion_group!(benches, bench_evaluate, bench_chart_aspects);
criterion_main!(benches);
