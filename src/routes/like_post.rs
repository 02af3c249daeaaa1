use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::adapters::repositories::post_repository::PostRepository;
use crate::dependencies::connection_pool;
use crate::domain::board::BoardStateWrapper;
use crate::services::board::BoardService;
use crate::services::response::ServiceError;

#[derive(Serialize)]
pub struct LikeCount {
	pub id: i64,
	pub likes: i64,
}

pub async fn like_post(
	State(state): State<BoardStateWrapper>,
	Path(id): Path<i64>,
) -> Result<Json<LikeCount>, ServiceError> {
	let repo = PostRepository::new(connection_pool().await);
	let likes = BoardService::like_post(state, &repo, id).await?;

	Ok(Json(LikeCount { id, likes }))
}
