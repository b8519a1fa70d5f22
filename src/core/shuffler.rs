use crate::models::{Confidence, GameDefinition, PredictedCombination};
use rand::seq::SliceRandom;
use rand::Rng;

/// Randomly reorder combinations for display
///
/// Uses a uniform permutation and gives each element an independently drawn
/// confidence label. The label is decorative: the combinations are fixed and
/// draws are independent, so it says nothing about winning chances.
pub fn shuffle_for_display<R>(combinations: &[PredictedCombination], rng: &mut R) -> Vec<PredictedCombination>
where
    R: Rng + ?Sized,
{
    let mut shuffled = combinations.to_vec();
    shuffled.shuffle(rng);

    for combination in &mut shuffled {
        combination.confidence = Some(random_confidence(rng));
    }

    shuffled
}

#[inline]
fn random_confidence<R: Rng + ?Sized>(rng: &mut R) -> Confidence {
    Confidence::ALL[rng.random_range(0..Confidence::ALL.len())]
}

/// Shuffle a game's precomputed combinations and keep the first `count`
pub fn smart_picks<R>(game: &GameDefinition, count: usize, rng: &mut R) -> Vec<PredictedCombination>
where
    R: Rng + ?Sized,
{
    let mut picks = shuffle_for_display(&game.smart_picks, rng);
    picks.truncate(count);
    picks
}
