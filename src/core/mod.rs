// Core algorithm exports
pub mod frequency;
pub mod matcher;
pub mod prizes;
pub mod shuffler;
pub mod validation;

pub use frequency::{
    cold_numbers, compute_frequencies, frequency_report, hot_numbers, number_frequency, overdue_numbers, percentage,
};
pub use matcher::check_ticket;
pub use prizes::{prize_for, prize_with_multiplier, PrizeLookup};
pub use shuffler::{shuffle_for_display, smart_picks};
pub use validation::{parse_draw_date, ticket_from_input, validate_ticket, ValidationError};
