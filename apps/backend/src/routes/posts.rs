use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError, DisplayFromStr, PickFirst};
use time::OffsetDateTime;

use super::MessageResponse;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::LenientJson;
use crate::repos::posts::{Post, PostWithAuthor};
use crate::services::{PostChanges, PostInput, PostService};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Post> for PostResponse {
    fn from(value: Post) -> Self {
        Self {
            id: value.id,
            title: value.title,
            content: value.content,
            author_id: value.author_id,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostAuthorResponse {
    pub author_id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub author: PostAuthorResponse,
}

impl From<PostWithAuthor> for PostDetailResponse {
    fn from(value: PostWithAuthor) -> Self {
        Self {
            id: value.post.id,
            title: value.post.title,
            content: value.post.content,
            created_at: value.post.created_at,
            author: PostAuthorResponse {
                author_id: value.author.id,
                name: value.author.name,
                email: value.author.email,
            },
        }
    }
}

/// `author_id` is accepted as a number or a numeric string; any other
/// mistyped field reads as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub title: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub content: Option<String>,
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    pub author_id: Option<i64>,
}

impl From<CreatePostRequest> for PostInput {
    fn from(value: CreatePostRequest) -> Self {
        Self {
            title: value.title,
            content: value.content,
            author_id: value.author_id,
        }
    }
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePostRequest {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub title: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub content: Option<String>,
}

impl From<UpdatePostRequest> for PostChanges {
    fn from(value: UpdatePostRequest) -> Self {
        Self {
            title: value.title,
            content: value.content,
        }
    }
}

fn post_list(posts: Vec<Post>) -> Vec<PostResponse> {
    posts.into_iter().map(Into::into).collect()
}

async fn list_posts(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let posts = with_txn(&app_state, |txn| {
        Box::pin(async move { PostService.list_posts(txn).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(post_list(posts)))
}

async fn get_post(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let post_id = path.into_inner();
    let post = with_txn(&app_state, move |txn| {
        Box::pin(async move { PostService.get_post(txn, post_id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(PostDetailResponse::from(post)))
}

async fn create_post(
    app_state: web::Data<AppState>,
    body: LenientJson<CreatePostRequest>,
) -> Result<HttpResponse, AppError> {
    let input = PostInput::from(body.into_inner());
    with_txn(&app_state, move |txn| {
        Box::pin(async move { PostService.create_post(txn, &input).await })
    })
    .await?;

    Ok(HttpResponse::Created().json(MessageResponse::new("Post created successfully")))
}

async fn update_post(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: LenientJson<UpdatePostRequest>,
) -> Result<HttpResponse, AppError> {
    let post_id = path.into_inner();
    let changes = PostChanges::from(body.into_inner());
    with_txn(&app_state, move |txn| {
        Box::pin(async move { PostService.update_post(txn, post_id, &changes).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post updated successfully")))
}

async fn delete_post(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let post_id = path.into_inner();
    with_txn(&app_state, move |txn| {
        Box::pin(async move { PostService.delete_post(txn, post_id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully")))
}

async fn list_posts_by_author(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let author_id = path.into_inner();
    let posts = with_txn(&app_state, move |txn| {
        Box::pin(async move { PostService.list_posts_by_author(txn, author_id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(post_list(posts)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_posts))
        .route("", web::post().to(create_post))
        .route("/by_author/{id}", web::get().to(list_posts_by_author))
        .route("/{id}", web::get().to(get_post))
        .route("/{id}", web::put().to(update_post))
        .route("/{id}", web::delete().to(delete_post));
}
