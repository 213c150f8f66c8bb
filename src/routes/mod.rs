// Route exports
pub mod matches;

use actix_web::web;

/// Versioned prefix every endpoint is mounted under
pub const API_PREFIX: &str = "/api/v1";

/// Mount the matching API
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope(API_PREFIX).configure(matches::configure));
}
