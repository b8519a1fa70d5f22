use crate::models::{DrawResult, FrequencyReport, FrequencyTally, GameDefinition, NumberFrequency, Pool};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Count how often each number was drawn
///
/// Every number in the game's regular and special ranges gets an entry,
/// starting at zero. Numbers outside the ranges are ignored.
pub fn compute_frequencies(draws: &[DrawResult], game: &GameDefinition) -> FrequencyTally {
    let mut regular: BTreeMap<u8, u32> = game.regular_number_range.iter().map(|n| (n, 0)).collect();
    let mut special: BTreeMap<u8, u32> = game.special_ball_range.iter().map(|n| (n, 0)).collect();

    for draw in draws {
        for number in &draw.regular_numbers {
            if let Some(count) = regular.get_mut(number) {
                *count += 1;
            }
        }
        if let Some(count) = special.get_mut(&draw.special_ball) {
            *count += 1;
        }
    }

    FrequencyTally {
        regular,
        special,
        total_draws: draws.len(),
    }
}

/// Share of draws a number appeared in, as a percentage
#[inline]
pub fn percentage(count: u32, total_draws: usize) -> f64 {
    if total_draws == 0 {
        return 0.0;
    }
    count as f64 / total_draws as f64 * 100.0
}

/// Build per-number display rows
///
/// `draws` must be ordered newest first; `draws_since_seen` is the index of
/// the most recent draw containing the number.
pub fn frequency_report(draws: &[DrawResult], game: &GameDefinition) -> FrequencyReport {
    let tally = compute_frequencies(draws, game);

    let regular = build_rows(&tally.regular, tally.total_draws, |number| {
        draws.iter().position(|d| d.regular_numbers.contains(&number))
    });
    let special = build_rows(&tally.special, tally.total_draws, |number| {
        draws.iter().position(|d| d.special_ball == number)
    });

    FrequencyReport {
        game_id: game.id.clone(),
        total_draws: tally.total_draws,
        regular,
        special,
    }
}

fn build_rows<F>(counts: &BTreeMap<u8, u32>, total_draws: usize, last_seen: F) -> Vec<NumberFrequency>
where
    F: Fn(u8) -> Option<usize>,
{
    counts
        .iter()
        .map(|(&number, &count)| NumberFrequency {
            number,
            count,
            percentage: percentage(count, total_draws),
            draws_since_seen: last_seen(number),
        })
        .collect()
}

/// Most drawn numbers first, ties by ascending number
pub fn hot_numbers(report: &FrequencyReport, pool: Pool, limit: usize) -> Vec<NumberFrequency> {
    ranked(report.pool(pool), limit, |a, b| {
        b.count.cmp(&a.count).then_with(|| a.number.cmp(&b.number))
    })
}

/// Least drawn numbers first, ties by ascending number
pub fn cold_numbers(report: &FrequencyReport, pool: Pool, limit: usize) -> Vec<NumberFrequency> {
    ranked(report.pool(pool), limit, |a, b| {
        a.count.cmp(&b.count).then_with(|| a.number.cmp(&b.number))
    })
}

/// Numbers absent the longest first; never-seen numbers lead
pub fn overdue_numbers(report: &FrequencyReport, pool: Pool, limit: usize) -> Vec<NumberFrequency> {
    ranked(report.pool(pool), limit, |a, b| {
        let absence = match (a.draws_since_seen, b.draws_since_seen) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => y.cmp(&x),
        };
        absence.then_with(|| a.number.cmp(&b.number))
    })
}

/// Look up a single number's row
pub fn number_frequency(report: &FrequencyReport, pool: Pool, number: u8) -> Option<&NumberFrequency> {
    report.pool(pool).iter().find(|row| row.number == number)
}

fn ranked<F>(rows: &[NumberFrequency], limit: usize, compare: F) -> Vec<NumberFrequency>
where
    F: Fn(&NumberFrequency, &NumberFrequency) -> Ordering,
{
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| compare(a, b));
    sorted.truncate(limit);
    sorted
}
