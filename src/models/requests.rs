use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Pool;

/// Request to check a ticket against a past draw
///
/// Fields are taken as given; counts and ranges are checked against the
/// game so every bad ticket gets the same error shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckTicketRequest {
    #[serde(alias = "chosenNumbers")]
    pub numbers: Vec<u32>,
    #[serde(alias = "special_ball", alias = "chosenSpecialBall", rename = "specialBall")]
    pub special_ball: u32,
    /// `DD/MM/YYYY` or `YYYY-MM-DD`
    #[serde(alias = "draw_date", alias = "targetDrawDate", rename = "drawDate")]
    pub draw_date: String,
}

/// Request to generate Smart Pick combinations
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SmartPickRequest {
    #[validate(range(min = 1, max = 20))]
    #[serde(default)]
    pub count: Option<u8>,
}

/// `?limit=` query for result listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultsQuery {
    pub limit: Option<usize>,
}

/// `?limit=&pool=` query for hot/cold listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HotColdQuery {
    pub limit: Option<usize>,
    #[serde(default)]
    pub pool: Pool,
}
