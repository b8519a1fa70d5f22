use crate::models::{GameDefinition, UserTicket};
use chrono::NaiveDate;
use thiserror::Error;

/// Ticket input rejected before any matching happens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected {expected} distinct numbers, got {actual}")]
    WrongNumberCount { expected: u8, actual: usize },

    #[error("number {number} is outside the range {min}-{max}")]
    NumberOutOfRange { number: u32, min: u8, max: u8 },

    #[error("{name} {number} is outside the range {min}-{max}")]
    SpecialBallOutOfRange {
        name: String,
        number: u32,
        min: u8,
        max: u8,
    },

    #[error("invalid draw date '{0}', expected DD/MM/YYYY or YYYY-MM-DD")]
    InvalidDate(String),
}

/// Check a ticket's shape against the game rules
///
/// Duplicates are collapsed before counting, so a ticket repeating a
/// number fails the count check.
pub fn validate_ticket(ticket: &UserTicket, game: &GameDefinition) -> Result<(), ValidationError> {
    let distinct = ticket.distinct_numbers();

    if distinct.len() != game.regular_number_count as usize {
        return Err(ValidationError::WrongNumberCount {
            expected: game.regular_number_count,
            actual: distinct.len(),
        });
    }

    let range = game.regular_number_range;
    if let Some(&number) = distinct.iter().find(|&&n| !range.contains(n)) {
        return Err(ValidationError::NumberOutOfRange {
            number: number.into(),
            min: range.min,
            max: range.max,
        });
    }

    let special = game.special_ball_range;
    if !special.contains(ticket.chosen_special_ball) {
        return Err(ValidationError::SpecialBallOutOfRange {
            name: game.special_ball_display_name.clone(),
            number: ticket.chosen_special_ball.into(),
            min: special.min,
            max: special.max,
        });
    }

    Ok(())
}

/// Build a ticket from raw request input
///
/// Values too large to ever be a ball number are reported as out of range
/// rather than failing to parse. The result still goes through
/// `validate_ticket` when checked.
pub fn ticket_from_input(
    numbers: &[u32],
    special_ball: u32,
    draw_date: &str,
    game: &GameDefinition,
) -> Result<UserTicket, ValidationError> {
    let range = game.regular_number_range;
    let chosen_numbers = numbers
        .iter()
        .map(|&n| {
            u8::try_from(n).map_err(|_| ValidationError::NumberOutOfRange {
                number: n,
                min: range.min,
                max: range.max,
            })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let special = game.special_ball_range;
    let chosen_special_ball = u8::try_from(special_ball).map_err(|_| ValidationError::SpecialBallOutOfRange {
        name: game.special_ball_display_name.clone(),
        number: special_ball,
        min: special.min,
        max: special.max,
    })?;

    Ok(UserTicket::new(chosen_numbers, chosen_special_ball, parse_draw_date(draw_date)?))
}

/// Parse a draw date given as `DD/MM/YYYY` or `YYYY-MM-DD`
pub fn parse_draw_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))
}
