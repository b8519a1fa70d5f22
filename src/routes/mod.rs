// Route exports
pub mod lottery;

use actix_web::web;

pub use lottery::{ApiError, AppState};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(lottery::configure),
    );
}
