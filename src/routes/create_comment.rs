use axum::extract::Path;
use axum::headers::authorization::Bearer;
use axum::headers::Authorization;
use axum::http::StatusCode;
use axum::{Json, TypedHeader};

use crate::adapters::repositories::comment_repository::CommentRepository;
use crate::adapters::repositories::post_repository::PostRepository;
use crate::adapters::repositories::user_repository::UserRepository;
use crate::common::session::resolve_author;
use crate::dependencies::connection_pool;
use crate::domain::comment::commands::CreateComment;
use crate::domain::comment::entity::Comment;
use crate::services::board::BoardService;
use crate::services::response::ServiceError;

pub async fn create_comment(
	Path(id): Path<i64>,
	bearer: Option<TypedHeader<Authorization<Bearer>>>,
	Json(command): Json<CreateComment>,
) -> Result<(StatusCode, Json<Comment>), ServiceError> {
	command.validate()?;

	let pool = connection_pool().await;
	// comments only attach to posts that are still there
	PostRepository::new(pool).get(id).await?;

	let author = resolve_author(&UserRepository::new(pool), bearer).await;

	let comment_repo = CommentRepository::new(pool);
	let mut thread = comment_repo.fetch_for_post(id).await?;
	let tentative = Comment::tentative(id, author, &command.content);
	let confirmed = BoardService::submit_comment(&mut thread, &comment_repo, tentative).await?;

	Ok((StatusCode::CREATED, Json(confirmed)))
}
