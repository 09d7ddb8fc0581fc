use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::services::{PostCounts, StatsService};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct PostCountsResponse {
    pub total_posts: u64,
    pub total_authors: u64,
}

impl From<PostCounts> for PostCountsResponse {
    fn from(value: PostCounts) -> Self {
        Self {
            total_posts: value.total_posts,
            total_authors: value.total_authors,
        }
    }
}

async fn post_counts(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let counts = with_txn(&app_state, |txn| {
        Box::pin(async move { StatsService.counts(txn).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(PostCountsResponse::from(counts)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/posts/count", web::get().to(post_counts));
}
