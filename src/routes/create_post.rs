use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_macros::debug_handler;

use crate::adapters::repositories::post_repository::PostRepository;
use crate::dependencies::connection_pool;
use crate::domain::board::BoardStateWrapper;
use crate::domain::post::commands::CreatePost;
use crate::domain::post::entity::Post;
use crate::domain::post::events::BoardEvent;
use crate::services::handlers::EventHandler;
use crate::services::response::ServiceError;

#[debug_handler(state = BoardStateWrapper)]
pub async fn create_post(
	State(state): State<BoardStateWrapper>,
	Json(command): Json<CreatePost>,
) -> Result<(StatusCode, Json<Post>), ServiceError> {
	command.validate()?;

	let repo = PostRepository::new(connection_pool().await);
	let post = repo.add(&command).await?;

	// announce the insert; subscribers and the snapshot refetch on it
	let listeners = state.read().await.listeners.clone();
	EventHandler::publish(
		&listeners,
		&BoardEvent::PostCreated {
			id: post.id,
			category: post.category,
			title: post.title.clone(),
		},
	)?;

	Ok((StatusCode::CREATED, Json(post)))
}
