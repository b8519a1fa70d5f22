use crate::core::validation::{validate_ticket, ValidationError};
use crate::models::{CheckOutcome, DrawResult, GameDefinition, MatchOutcome, UserTicket};

/// Check a ticket against the draw held on its target date
///
/// # Pipeline Stages
/// 1. Validate the ticket against the game rules
/// 2. Find the draw for the target date (linear scan)
/// 3. Count overlapping regular numbers, duplicates removed
/// 4. Compare special balls
///
/// A date with no draw yields `CheckOutcome::NotFound`, never a zero-match
/// outcome.
pub fn check_ticket(
    ticket: &UserTicket,
    game: &GameDefinition,
    draws: &[DrawResult],
) -> Result<CheckOutcome, ValidationError> {
    validate_ticket(ticket, game)?;

    let Some(draw) = find_draw(draws, ticket) else {
        return Ok(CheckOutcome::NotFound {
            draw_date: ticket.target_draw_date,
        });
    };

    let matched = ticket
        .distinct_numbers()
        .iter()
        .filter(|n| draw.regular_numbers.contains(n))
        .count();

    Ok(CheckOutcome::Matched(MatchOutcome {
        matched_regular_count: matched as u8,
        special_ball_matched: ticket.chosen_special_ball == draw.special_ball,
        reference_draw: draw.clone(),
    }))
}

#[inline]
fn find_draw<'a>(draws: &'a [DrawResult], ticket: &UserTicket) -> Option<&'a DrawResult> {
    draws.iter().find(|d| d.draw_date == ticket.target_draw_date)
}
