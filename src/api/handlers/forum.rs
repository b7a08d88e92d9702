use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use crate::api::models::{NewPost, PostItem};
use crate::errors::StoreResult;
use super::AppState;

pub async fn get_posts(State(state): State<Arc<AppState>>) -> StoreResult<Json<Vec<PostItem>>> {
    let posts = state.forum.get_posts()?;
    Ok(Json(posts.into_iter().map(PostItem::from).collect()))
}

pub async fn add_post(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewPost>,
) -> StoreResult<(StatusCode, Json<PostItem>)> {
    let post = state.forum.add_post(&body.content)?;
    Ok((StatusCode::CREATED, Json(post.into())))
}
