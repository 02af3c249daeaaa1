use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use crate::adapters::repositories::comment_repository::CommentRepository;
use crate::adapters::repositories::post_repository::PostRepository;
use crate::dependencies::connection_pool;
use crate::domain::comment::entity::Comment;
use crate::domain::post::entity::Post;
use crate::services::response::ServiceError;

#[derive(Serialize)]
pub struct PostDetail {
	pub post: Post,
	pub comments: Vec<Comment>,
}

pub async fn show_post(Path(id): Path<i64>) -> Result<Json<PostDetail>, ServiceError> {
	let pool = connection_pool().await;
	let post = PostRepository::new(pool).get(id).await?;
	let comments = CommentRepository::new(pool).fetch_for_post(id).await?;

	Ok(Json(PostDetail { post, comments }))
}
