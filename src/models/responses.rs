use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::domain::{DrawResult, GameDefinition, NumberFrequency, Pool, PredictedCombination};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub games: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct GamesResponse {
    pub games: Vec<GameDefinition>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsResponse {
    #[serde(rename = "gameId")]
    pub game_id: String,
    pub results: Vec<DrawResult>,
    pub total: usize,
}

/// Raw count maps plus the per-number display rows
#[derive(Debug, Clone, Serialize)]
pub struct FrequencyResponse {
    #[serde(rename = "gameId")]
    pub game_id: String,
    #[serde(rename = "totalDraws")]
    pub total_draws: usize,
    pub regular: BTreeMap<u8, u32>,
    pub special: BTreeMap<u8, u32>,
    #[serde(rename = "regularDetail")]
    pub regular_detail: Vec<NumberFrequency>,
    #[serde(rename = "specialDetail")]
    pub special_detail: Vec<NumberFrequency>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HotColdResponse {
    #[serde(rename = "gameId")]
    pub game_id: String,
    pub pool: Pool,
    #[serde(rename = "basedOn")]
    pub based_on: usize,
    pub hot: Vec<NumberFrequency>,
    pub cold: Vec<NumberFrequency>,
    pub overdue: Vec<NumberFrequency>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrizeRow {
    pub label: String,
    pub matched: u8,
    #[serde(rename = "specialBall")]
    pub special_ball: bool,
    pub odds: String,
    pub prize: String,
    #[serde(rename = "multiplierPrizes")]
    pub multiplier_prizes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrizeMatrixResponse {
    #[serde(rename = "gameId")]
    pub game_id: String,
    #[serde(rename = "multiplierName")]
    pub multiplier_name: Option<String>,
    pub multipliers: Vec<String>,
    pub tiers: Vec<PrizeRow>,
}

/// Prize attached to a ticket check
#[derive(Debug, Clone, Serialize)]
pub struct PrizeAward {
    pub label: String,
    pub prize: String,
    /// Multiplied prize when the draw carried a multiplier
    #[serde(rename = "withMultiplier", skip_serializing_if = "Option::is_none")]
    pub with_multiplier: Option<String>,
}

/// Ticket check response; `found == false` means no draw on that date
#[derive(Debug, Clone, Serialize)]
pub struct CheckTicketResponse {
    pub found: bool,
    #[serde(rename = "drawDate")]
    pub draw_date: String,
    #[serde(rename = "matchedRegularCount", skip_serializing_if = "Option::is_none")]
    pub matched_regular_count: Option<u8>,
    #[serde(rename = "specialBallMatched", skip_serializing_if = "Option::is_none")]
    pub special_ball_matched: Option<bool>,
    #[serde(rename = "referenceDraw", skip_serializing_if = "Option::is_none")]
    pub reference_draw: Option<DrawResult>,
    /// `None` for a found draw means no prize
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prize: Option<PrizeAward>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SmartPickResponse {
    #[serde(rename = "gameId")]
    pub game_id: String,
    pub combinations: Vec<PredictedCombination>,
    /// Confidence labels are decorative and carry no statistical meaning
    pub disclaimer: String,
}
