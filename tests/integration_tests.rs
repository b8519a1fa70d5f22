// Integration tests for Lotto Insights

use actix_web::{http::StatusCode, test, web, App};
use lotto_insights::config::{ResultsSettings, SmartPickSettings};
use lotto_insights::core::{check_ticket, compute_frequencies, parse_draw_date, prize_for, prize_with_multiplier};
use lotto_insights::models::{CheckOutcome, FrequencyReport, NumberFrequency, UserTicket};
use lotto_insights::routes::{configure_routes, AppState};
use lotto_insights::services::{FrequencyCache, LotteryCatalog};
use serde_json::{json, Value};
use std::sync::Arc;

fn app_state() -> AppState {
    AppState {
        catalog: Arc::new(LotteryCatalog::bundled().expect("bundled dataset")),
        cache: FrequencyCache::new(16, 60),
        results: ResultsSettings::default(),
        smart_pick: SmartPickSettings::default(),
    }
}

macro_rules! test_app {
    () => {
        test_app!(app_state())
    };
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure_routes),
        )
        .await
    };
}

#[std::prelude::v1::test]
fn test_bundled_frequencies_sum() {
    let catalog = LotteryCatalog::bundled().unwrap();

    for game in catalog.games() {
        let draws = catalog.draws(&game.id).unwrap();
        let tally = compute_frequencies(draws, game);
        assert_eq!(
            tally.regular.values().sum::<u32>() as usize,
            draws.len() * game.regular_number_count as usize,
            "regular tally for {}",
            game.id
        );
        assert_eq!(tally.special.len(), game.special_ball_range.len());
    }
}

#[std::prelude::v1::test]
fn test_integration_end_to_end_check() {
    let catalog = LotteryCatalog::bundled().unwrap();
    let game = catalog.game("mega-millions").unwrap();
    let draws = catalog.draws("mega-millions").unwrap();

    let ticket = UserTicket::new(vec![7, 30, 39, 1, 2], 13, parse_draw_date("26/04/2025").unwrap());
    let CheckOutcome::Matched(outcome) = check_ticket(&ticket, game, draws).unwrap() else {
        panic!("26/04/2025 is in the dataset");
    };

    assert_eq!(outcome.matched_regular_count, 3);
    assert!(outcome.special_ball_matched);
    assert_eq!(outcome.reference_draw.multiplier, Some(3));

    let tier = prize_for(game, 3, true).tier().expect("3 + Mega Ball pays");
    assert_eq!(tier.prize, "$200");
    assert_eq!(prize_with_multiplier(tier, 3), Some("$600"));
}

#[actix_web::test]
async fn test_health() {
    let app = test_app!();
    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["games"], 3);
}

#[actix_web::test]
async fn test_list_and_get_games() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/v1/games").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["games"].as_array().unwrap().len(), 3);

    let req = test::TestRequest::get().uri("/api/v1/games/cash4life").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["specialBallDisplayName"], "Cash Ball");
    assert_eq!(body["specialBallRange"], json!([1, 4]));

    let req = test::TestRequest::get().uri("/api/v1/games/keno").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_results_limit() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/games/powerball/results?limit=3")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["results"].as_array().unwrap().len(), 3);
    assert_eq!(body["total"], 15);
    assert_eq!(body["results"][0]["drawDate"], "27/04/2025");

    let req = test::TestRequest::get()
        .uri("/api/v1/games/powerball/results/latest")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["regularNumbers"], json!([10, 22, 35, 47, 65]));
}

#[actix_web::test]
async fn test_frequencies_endpoint() {
    let app = test_app!();
    let req = test::TestRequest::get()
        .uri("/api/v1/games/mega-millions/frequencies")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalDraws"], 15);
    let regular = body["regular"].as_object().unwrap();
    assert_eq!(regular.len(), 70);
    let total: u64 = regular.values().map(|v| v.as_u64().unwrap()).sum();
    assert_eq!(total, 75);
    assert_eq!(body["specialDetail"].as_array().unwrap().len(), 25);
}

#[actix_web::test]
async fn test_frequencies_served_from_cache() {
    let state = app_state();
    state
        .cache
        .get_or_compute("cash4life", || FrequencyReport {
            game_id: "cash4life".to_string(),
            total_draws: 1,
            regular: vec![NumberFrequency {
                number: 7,
                count: 42,
                percentage: 100.0,
                draws_since_seen: Some(0),
            }],
            special: vec![],
        })
        .await;

    let app = test_app!(state);
    let req = test::TestRequest::get()
        .uri("/api/v1/games/cash4life/frequencies")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalDraws"], 1);
    assert_eq!(body["regular"], json!({ "7": 42 }));
    assert_eq!(body["special"], json!({}));
}

#[actix_web::test]
async fn test_hot_cold_endpoint() {
    let app = test_app!();
    let req = test::TestRequest::get()
        .uri("/api/v1/games/cash4life/hot-cold?limit=2&pool=special")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["pool"], "special");
    assert_eq!(body["basedOn"], 15);
    assert_eq!(body["hot"].as_array().unwrap().len(), 2);
    assert_eq!(body["cold"].as_array().unwrap().len(), 2);
    assert_eq!(body["overdue"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_prize_matrix() {
    let app = test_app!();
    let req = test::TestRequest::get().uri("/api/v1/games/powerball/prizes").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["multiplierName"], "Power Play");
    assert_eq!(body["multipliers"], json!(["x2", "x3", "x4", "x5", "x10"]));
    assert_eq!(body["tiers"][0]["label"], "5 + Powerball");
    assert_eq!(body["tiers"][0]["prize"], "Jackpot");
}

#[actix_web::test]
async fn test_check_ticket_found() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/games/powerball/check")
        .set_json(json!({
            "numbers": [10, 22, 35, 47, 1],
            "specialBall": 2,
            "drawDate": "2025-04-27"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["found"], true);
    assert_eq!(body["drawDate"], "27/04/2025");
    assert_eq!(body["matchedRegularCount"], 4);
    assert_eq!(body["specialBallMatched"], false);
    assert_eq!(body["prize"]["label"], "4");
    assert_eq!(body["prize"]["prize"], "$100");
    assert_eq!(body["prize"]["withMultiplier"], "$300");
}

#[actix_web::test]
async fn test_check_ticket_no_prize() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/games/powerball/check")
        .set_json(json!({
            "numbers": [1, 2, 3, 4, 5],
            "specialBall": 1,
            "drawDate": "27/04/2025"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["found"], true);
    assert_eq!(body["matchedRegularCount"], 0);
    assert!(body.get("prize").is_none());
}

#[actix_web::test]
async fn test_check_ticket_not_found() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/games/powerball/check")
        .set_json(json!({
            "numbers": [1, 2, 3, 4, 5],
            "specialBall": 1,
            "drawDate": "01/01/2020"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["found"], false);
    assert_eq!(body["drawDate"], "01/01/2020");
    assert!(body.get("matchedRegularCount").is_none());
}

#[actix_web::test]
async fn test_check_ticket_invalid() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/games/powerball/check")
        .set_json(json!({
            "numbers": [1, 2, 99, 4, 5],
            "specialBall": 1,
            "drawDate": "27/04/2025"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_ticket");

    let req = test::TestRequest::post()
        .uri("/api/v1/games/powerball/check")
        .set_json(json!({
            "numbers": [1, 2, 3, 4, 5],
            "specialBall": 1,
            "drawDate": "not-a-date"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_smart_picks() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/games/mega-millions/smart-picks")
        .set_json(json!({ "count": 3 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let combinations = body["combinations"].as_array().unwrap();
    assert_eq!(combinations.len(), 3);
    for c in combinations {
        let confidence = c["confidence"].as_str().unwrap();
        assert!(["high", "medium", "low"].contains(&confidence));
        assert_eq!(c["numbers"].as_array().unwrap().len(), 5);
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/games/mega-millions/smart-picks")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["combinations"].as_array().unwrap().len(), 5);

    let req = test::TestRequest::post()
        .uri("/api/v1/games/mega-millions/smart-picks")
        .set_json(json!({ "count": 0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_check_ticket_every_invalid_shape_is_422() {
    let app = test_app!();
    let cases = [
        (json!([1, 2, 3, 4, 5, 6]), 1, "six numbers"),
        (json!([]), 1, "empty"),
        (json!([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]), 1, "eleven numbers"),
        (json!([1, 2, 300, 4, 5]), 1, "number above 255"),
        (json!([1, 2, 3, 4, 5]), 300, "special ball above 255"),
    ];

    for (numbers, special_ball, case) in cases {
        let req = test::TestRequest::post()
            .uri("/api/v1/games/powerball/check")
            .set_json(json!({
                "numbers": numbers,
                "specialBall": special_ball,
                "drawDate": "27/04/2025"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{}", case);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_ticket", "{}", case);
    }
}

#[actix_web::test]
async fn test_check_ticket_padded_date() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/games/powerball/check")
        .set_json(json!({
            "numbers": [10, 22, 35, 47, 65],
            "specialBall": 8,
            "drawDate": " 27/04/2025 "
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["found"], true);
    assert_eq!(body["matchedRegularCount"], 5);
    assert_eq!(body["specialBallMatched"], true);
}
