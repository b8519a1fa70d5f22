use actix_web::{http::StatusCode, web, HttpResponse, Responder, ResponseError};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

use crate::config::{ResultsSettings, SmartPickSettings};
use crate::core::{
    check_ticket, cold_numbers, frequency_report, hot_numbers, overdue_numbers, prize_for, prize_with_multiplier,
    smart_picks, ticket_from_input, ValidationError,
};
use crate::models::{
    CheckOutcome, CheckTicketRequest, CheckTicketResponse, ErrorResponse, FrequencyReport, FrequencyResponse,
    GamesResponse, HealthResponse, HotColdQuery, HotColdResponse, MatchOutcome, NumberFrequency, PrizeAward,
    PrizeMatrixResponse, PrizeRow, ResultsQuery, ResultsResponse, SmartPickRequest, SmartPickResponse,
};
use crate::models::domain::draw_date_format;
use crate::services::{CatalogError, FrequencyCache, LotteryCatalog};

const CONFIDENCE_DISCLAIMER: &str =
    "Combinations are shown in random order and confidence labels are assigned at random; they do not predict draws.";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<LotteryCatalog>,
    pub cache: FrequencyCache,
    pub results: ResultsSettings,
    pub smart_pick: SmartPickSettings,
}

/// Errors surfaced by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    InvalidTicket(#[from] ValidationError),

    #[error("{0}")]
    BadRequest(String),

    #[error("No draws recorded for {0}")]
    NoDraws(String),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Catalog(CatalogError::UnknownGame(_)) => "unknown_game",
            ApiError::Catalog(_) => "catalog_error",
            ApiError::InvalidTicket(_) => "invalid_ticket",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::NoDraws(_) => "no_draws",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Catalog(CatalogError::UnknownGame(_)) | ApiError::NoDraws(_) => StatusCode::NOT_FOUND,
            ApiError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidTicket(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Configure all lottery routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/games", web::get().to(list_games))
        .route("/games/{id}", web::get().to(get_game))
        .route("/games/{id}/results", web::get().to(get_results))
        .route("/games/{id}/results/latest", web::get().to(get_latest_result))
        .route("/games/{id}/frequencies", web::get().to(get_frequencies))
        .route("/games/{id}/hot-cold", web::get().to(get_hot_cold))
        .route("/games/{id}/prizes", web::get().to(get_prizes))
        .route("/games/{id}/check", web::post().to(check))
        .route("/games/{id}/smart-picks", web::post().to(generate_smart_picks));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        games: state.catalog.games().len(),
    })
}

/// GET /api/v1/games
async fn list_games(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(GamesResponse {
        games: state.catalog.games().to_vec(),
    })
}

/// GET /api/v1/games/{id}
async fn get_game(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let game = state.catalog.game(&path)?;
    Ok(HttpResponse::Ok().json(game))
}

/// Past results, newest first
///
/// GET /api/v1/games/{id}/results?limit=10
async fn get_results(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ResultsQuery>,
) -> Result<HttpResponse, ApiError> {
    let game_id = path.into_inner();
    let limit = query
        .limit
        .unwrap_or(state.results.default_limit)
        .min(state.results.max_limit);

    let results = state.catalog.recent_draws(&game_id, limit)?.to_vec();
    let total = state.catalog.draws(&game_id)?.len();

    tracing::debug!("Returning {} of {} results for {}", results.len(), total, game_id);

    Ok(HttpResponse::Ok().json(ResultsResponse {
        game_id,
        results,
        total,
    }))
}

/// GET /api/v1/games/{id}/results/latest
async fn get_latest_result(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let game_id = path.into_inner();
    let draw = state
        .catalog
        .latest_draw(&game_id)?
        .ok_or_else(|| ApiError::NoDraws(game_id.clone()))?;
    Ok(HttpResponse::Ok().json(draw))
}

/// Cached per-number report for a game
async fn cached_report(state: &AppState, game_id: &str) -> Result<Arc<FrequencyReport>, ApiError> {
    let game = state.catalog.game(game_id)?;
    let draws = state.catalog.draws(game_id)?;
    Ok(state
        .cache
        .get_or_compute(game_id, || frequency_report(draws, game))
        .await)
}

fn count_map(rows: &[NumberFrequency]) -> BTreeMap<u8, u32> {
    rows.iter().map(|row| (row.number, row.count)).collect()
}

/// GET /api/v1/games/{id}/frequencies
async fn get_frequencies(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let game_id = path.into_inner();
    let report = cached_report(&state, &game_id).await?;

    Ok(HttpResponse::Ok().json(FrequencyResponse {
        game_id,
        total_draws: report.total_draws,
        regular: count_map(&report.regular),
        special: count_map(&report.special),
        regular_detail: report.regular.clone(),
        special_detail: report.special.clone(),
    }))
}

/// Hot, cold and overdue numbers for one pool
///
/// GET /api/v1/games/{id}/hot-cold?limit=10&pool=regular
async fn get_hot_cold(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<HotColdQuery>,
) -> Result<HttpResponse, ApiError> {
    let game_id = path.into_inner();
    let limit = query.limit.unwrap_or(10);
    let pool = query.pool;
    let report = cached_report(&state, &game_id).await?;

    Ok(HttpResponse::Ok().json(HotColdResponse {
        game_id,
        pool,
        based_on: report.total_draws,
        hot: hot_numbers(&report, pool, limit),
        cold: cold_numbers(&report, pool, limit),
        overdue: overdue_numbers(&report, pool, limit),
    }))
}

/// GET /api/v1/games/{id}/prizes
async fn get_prizes(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let game_id = path.into_inner();
    let game = state.catalog.game(&game_id)?;

    let tiers = game
        .prize_tiers
        .iter()
        .map(|tier| PrizeRow {
            label: tier.label(&game.special_ball_display_name),
            matched: tier.matched,
            special_ball: tier.special_ball,
            odds: tier.odds.clone(),
            prize: tier.prize.clone(),
            multiplier_prizes: tier.multiplier_prizes.clone(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(PrizeMatrixResponse {
        game_id: game.id.clone(),
        multiplier_name: game.multiplier_display_name.clone(),
        multipliers: game.multipliers.iter().map(|f| format!("x{}", f)).collect(),
        tiers,
    }))
}

/// Check a ticket against the draw on the given date
///
/// POST /api/v1/games/{id}/check
///
/// Request body:
/// ```json
/// {
///   "numbers": [7, 30, 39, 41, 70],
///   "specialBall": 13,
///   "drawDate": "26/04/2025"
/// }
/// ```
async fn check(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<CheckTicketRequest>,
) -> Result<HttpResponse, ApiError> {
    let game_id = path.into_inner();
    let game = state.catalog.game(&game_id)?;
    let draws = state.catalog.draws(&game_id)?;

    let outcome = ticket_from_input(&req.numbers, req.special_ball, &req.draw_date, game)
        .and_then(|ticket| check_ticket(&ticket, game, draws))
        .inspect_err(|e| tracing::info!("Rejected ticket for {}: {}", game_id, e))?;

    let response = match outcome {
        CheckOutcome::Matched(MatchOutcome {
            matched_regular_count,
            special_ball_matched,
            reference_draw,
        }) => {
            let prize = prize_for(game, matched_regular_count, special_ball_matched)
                .tier()
                .map(|tier| PrizeAward {
                    label: tier.label(&game.special_ball_display_name),
                    prize: tier.prize.clone(),
                    with_multiplier: reference_draw
                        .multiplier
                        .and_then(|factor| prize_with_multiplier(tier, factor))
                        .map(str::to_string),
                });

            tracing::debug!(
                "Ticket for {} on {}: {} matched, special ball {}",
                game_id,
                reference_draw.draw_date,
                matched_regular_count,
                special_ball_matched
            );

            CheckTicketResponse {
                found: true,
                draw_date: reference_draw.draw_date.format(draw_date_format::FORMAT).to_string(),
                matched_regular_count: Some(matched_regular_count),
                special_ball_matched: Some(special_ball_matched),
                reference_draw: Some(reference_draw),
                prize,
            }
        }
        CheckOutcome::NotFound { draw_date } => {
            tracing::debug!("No {} draw on {}", game_id, draw_date);
            CheckTicketResponse {
                found: false,
                draw_date: draw_date.format(draw_date_format::FORMAT).to_string(),
                matched_regular_count: None,
                special_ball_matched: None,
                reference_draw: None,
                prize: None,
            }
        }
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Shuffle the precomputed combinations for display
///
/// POST /api/v1/games/{id}/smart-picks
async fn generate_smart_picks(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: Option<web::Json<SmartPickRequest>>,
) -> Result<HttpResponse, ApiError> {
    let req = req.map(web::Json::into_inner).unwrap_or_default();
    if let Err(errors) = req.validate() {
        return Err(ApiError::BadRequest(errors.to_string()));
    }

    let game_id = path.into_inner();
    let game = state.catalog.game(&game_id)?;
    let count = req
        .count
        .map(usize::from)
        .unwrap_or(state.smart_pick.default_count)
        .min(state.smart_pick.max_count);

    let combinations = smart_picks(game, count, &mut rand::rng());

    tracing::info!("Generated {} smart picks for {}", combinations.len(), game_id);

    Ok(HttpResponse::Ok().json(SmartPickResponse {
        game_id,
        combinations,
        disclaimer: CONFIDENCE_DISCLAIMER.to_string(),
    }))
}
