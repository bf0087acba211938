use actix_web::{guard, web};
use crate::config::MAX_BODY_BYTES;
use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
        // Preflight for every path, ahead of the real routes
        .service(
            web::resource("/{tail:.*}")
                .guard(guard::Options())
                .to(handlers::preflight),
        )
        .service(
            web::scope("/api")
                .route("/chat", web::post().to(handlers::chat))
        )
        .route("/health", web::get().to(handlers::health_check));
}
