//! HTTP handlers and route configuration.

mod health;
mod signup;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/signup", web::post().to(signup::sign_up)),
    );
}
