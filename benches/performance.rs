use criterion::{black_box, criterion_group, criterion_main, Criterion};
use playoff_series::fixtures::{mock_season_games, synthetic_season, MOCK_SEASON};
use playoff_series::series::{
    group_by_series, resolve_matchup, resolve_season, SeriesQuery, SeriesSettings,
};

fn bench_resolve_matchup(c: &mut Criterion) {
    let batch = mock_season_games();
    let settings = SeriesSettings::default();
    let query = SeriesQuery::new(9, 22, MOCK_SEASON);

    c.bench_function("resolve_matchup_mock_season", |b| {
        b.iter(|| resolve_matchup(black_box(&batch), black_box(&query), &settings))
    });
}

fn bench_resolve_full_season(c: &mut Criterion) {
    // 15 series covers a full bracket
    let batch = synthetic_season(15);
    let settings = SeriesSettings::default();

    c.bench_function("resolve_season_full_bracket", |b| {
        b.iter(|| resolve_season(black_box(&batch), 2023, &settings))
    });
}

fn bench_grouping(c: &mut Criterion) {
    let batch = synthetic_season(200);

    c.bench_function("group_by_series_1400_games", |b| {
        b.iter(|| group_by_series(black_box(&batch)))
    });
}

criterion_group!(
    benches,
    bench_resolve_matchup,
    bench_resolve_full_season,
    bench_grouping
);
criterion_main!(benches);
