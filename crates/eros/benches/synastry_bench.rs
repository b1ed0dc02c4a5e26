use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eros::{Body, ChartBuilder, HouseCusp, NatalChart, PlanetPlacement, SynastryScorer};

fn chart(offset: f64) -> NatalChart {
    let placements = Body::ALL
        .iter()
        .enumerate()
        .map(|(i, &body)| {
            PlanetPlacement::at(body, (i as f64 * 41.0 + offset) % 360.0, (i % 12) as u8 + 1)
        })
        .collect();
    let houses = (1..=12u8)
        .map(|n| HouseCusp::at(n, (offset + (n as f64 - 1.0) * 30.0) % 360.0))
        .collect();
    ChartBuilder::default().build(placements, houses).unwrap()
}

fn bench_score(c: &mut Criterion) {
    let scorer = SynastryScorer::default();
    let a = chart(3.0);
    let b = chart(127.0);

    c.bench_function("synastry_score", |bench| {
        bench.iter(|| scorer.score(black_box(&a), black_box(&b)).unwrap())
    });
}

fn bench_rank(c: &mut Criterion) {
    let scorer = SynastryScorer::default();
    let subject = chart(3.0);
    let candidates: Vec<(usize, NatalChart)> =
        (0..50).map(|i| (i, chart(i as f64 * 7.0))).collect();

    c.bench_function("synastry_rank_50", |bench| {
        bench.iter(|| scorer.rank(black_box(&subject), black_box(&candidates)).unwrap())
    });
}

criterion_group!(benches, bench_score, bench_rank);
criterion_main!(benches);
