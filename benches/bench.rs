// Criterion benchmarks for Lotto Insights

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lotto_insights::core::{check_ticket, compute_frequencies, frequency_report, shuffle_for_display};
use lotto_insights::models::{DrawResult, GameDefinition, UserTicket};
use lotto_insights::services::LotteryCatalog;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn synthetic_draws(game: &GameDefinition, count: usize) -> Vec<DrawResult> {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let max = game.regular_number_range.max as usize;
    let special_max = game.special_ball_range.max as usize;

    (0..count)
        .map(|i| DrawResult {
            draw_date: start - Duration::days(i as i64),
            regular_numbers: (0..5).map(|k| ((i * 7 + k * 13) % max + 1) as u8).collect(),
            special_ball: (i % special_max + 1) as u8,
            multiplier: None,
            jackpot_amount: "$1,000,000".to_string(),
        })
        .collect()
}

fn bench_frequencies(c: &mut Criterion) {
    let catalog = LotteryCatalog::bundled().unwrap();
    let game = catalog.game("mega-millions").unwrap();

    let mut group = c.benchmark_group("frequencies");

    for draw_count in [15, 100, 1000].iter() {
        let draws = synthetic_draws(game, *draw_count);

        group.bench_with_input(BenchmarkId::new("compute_frequencies", draw_count), draw_count, |b, _| {
            b.iter(|| compute_frequencies(black_box(&draws), black_box(game)));
        });

        group.bench_with_input(BenchmarkId::new("frequency_report", draw_count), draw_count, |b, _| {
            b.iter(|| frequency_report(black_box(&draws), black_box(game)));
        });
    }

    group.finish();
}

fn bench_check_ticket(c: &mut Criterion) {
    let catalog = LotteryCatalog::bundled().unwrap();
    let game = catalog.game("powerball").unwrap();
    let draws = catalog.draws("powerball").unwrap();
    let oldest = draws.last().unwrap().draw_date;
    let ticket = UserTicket::new(vec![10, 22, 35, 47, 1], 8, oldest);

    c.bench_function("check_ticket_oldest_draw", |b| {
        b.iter(|| check_ticket(black_box(&ticket), black_box(game), black_box(draws)));
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let catalog = LotteryCatalog::bundled().unwrap();
    let game = catalog.game("cash4life").unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    c.bench_function("shuffle_for_display", |b| {
        b.iter(|| shuffle_for_display(black_box(&game.smart_picks), &mut rng));
    });
}

criterion_group!(benches, bench_frequencies, bench_check_ticket, bench_shuffle);

criterion_main!(benches);
