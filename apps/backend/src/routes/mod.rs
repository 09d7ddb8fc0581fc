use actix_web::web;
use serde::Serialize;

pub mod authors;
pub mod health;
pub mod posts;
pub mod stats;

/// Acknowledgment body for writes: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Register every application route. Used by `main.rs` and by tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Authors: /authors, /authors/{id}
    cfg.service(web::scope("/authors").configure(authors::configure_routes));

    // Posts: /posts, /posts/{id}, /posts/by_author/{id}
    cfg.service(web::scope("/posts").configure(posts::configure_routes));

    // Stats: /stats/posts/count
    cfg.service(web::scope("/stats").configure(stats::configure_routes));
}
