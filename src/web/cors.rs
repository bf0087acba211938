use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use actix_web::middleware::DefaultHeaders;

pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
pub const ALLOWED_METHODS: &str = "POST, OPTIONS";

pub fn allow_origin() -> (actix_web::http::header::HeaderName, &'static str) {
    (ACCESS_CONTROL_ALLOW_ORIGIN, "*")
}

pub fn allow_headers() -> (actix_web::http::header::HeaderName, &'static str) {
    (ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS)
}

pub fn allow_methods() -> (actix_web::http::header::HeaderName, &'static str) {
    (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS)
}

// Only fills headers a handler did not already set.
pub fn default_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(allow_origin())
        .add(allow_headers())
}
