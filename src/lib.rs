//! Lotto Insights - draw history, frequency analysis and ticket checking
//!
//! The library holds the pure computations: frequency tallies over a game's
//! draw history, ticket checking against a specific draw, prize table
//! lookup and the display shuffle for Smart Pick combinations. The binary
//! serves them over HTTP.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{check_ticket, compute_frequencies, shuffle_for_display, ValidationError};
pub use models::{CheckOutcome, DrawResult, FrequencyTally, GameDefinition, MatchOutcome, PredictedCombination, UserTicket};
pub use services::{CatalogError, LotteryCatalog};
