use crate::models::{GameDefinition, PrizeTier};

/// Prize table lookup result
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrizeLookup<'a> {
    Won(&'a PrizeTier),
    NoPrize,
}

impl<'a> PrizeLookup<'a> {
    pub fn tier(&self) -> Option<&'a PrizeTier> {
        match self {
            PrizeLookup::Won(tier) => Some(tier),
            PrizeLookup::NoPrize => None,
        }
    }
}

/// Map a match result onto the game's prize table
///
/// Combinations absent from the table win nothing.
pub fn prize_for(game: &GameDefinition, matched: u8, special_matched: bool) -> PrizeLookup<'_> {
    game.prize_tiers
        .iter()
        .find(|tier| tier.matched == matched && tier.special_ball == special_matched)
        .map_or(PrizeLookup::NoPrize, PrizeLookup::Won)
}

/// Label used for a multiplier factor, e.g. `x3`
#[inline]
pub fn multiplier_key(factor: u8) -> String {
    format!("x{}", factor)
}

/// Prize for a tier when the given multiplier applies
pub fn prize_with_multiplier(tier: &PrizeTier, factor: u8) -> Option<&str> {
    tier.multiplier_prizes
        .get(&multiplier_key(factor))
        .map(String::as_str)
}
