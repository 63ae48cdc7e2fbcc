//! Cross-origin policy for the static site client.

use actix_cors::Cors;
use actix_web::http::{Method, header};

use crate::config::CorsConfig;

/// Only the configured origin may call the API from a browser, with
/// credentials, using read and write methods.
pub fn cors(config: &CorsConfig) -> Cors {
    Cors::default()
        .allowed_origin(&config.allowed_origin)
        .allowed_methods([Method::GET, Method::POST, Method::PUT])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT])
        .supports_credentials()
        .max_age(3600)
}
