use std::env;

use actix_cors::Cors;
use actix_web::http::header;

/// CORS middleware for browser clients.
///
/// Origins come from `CORS_ALLOWED_ORIGINS` (falling back to localhost);
/// methods are limited to the ones the blog API routes use.
pub fn cors_middleware() -> Cors {
    let allowed_raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        // Headers the browser may send
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        // Headers the browser is allowed to read from responses
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(3600);

    for origin in effective_origins(&allowed_raw) {
        cors = cors.allowed_origin(&origin);
    }

    cors
}

/// Parse a comma-separated origin list, e.g.
/// `http://localhost:3000,https://blog.example.com`.
///
/// Empty, `null` and non-http(s) entries are dropped; if nothing valid
/// remains, localhost-only origins are used.
fn effective_origins(allowed_raw: &str) -> Vec<String> {
    let allowed_origins: Vec<String> = allowed_raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.to_string())
        .collect();

    if allowed_origins.is_empty() {
        vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ]
    } else {
        allowed_origins
    }
}
