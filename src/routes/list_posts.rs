use axum::extract::{Query, State};
use axum::Json;

use crate::adapters::repositories::post_repository::PostRepository;
use crate::dependencies::connection_pool;
use crate::domain::board::listing::{derive_page, BoardPage, ListSelection};
use crate::domain::board::BoardStateWrapper;
use crate::services::board::BoardService;
use crate::services::response::ServiceError;

/// Refetches the snapshot, then derives the visible page from it. The
/// derivation itself never touches the store.
pub async fn list_posts(
	State(state): State<BoardStateWrapper>,
	Query(selection): Query<ListSelection>,
) -> Result<Json<BoardPage>, ServiceError> {
	let repo = PostRepository::new(connection_pool().await);
	BoardService::refresh_snapshot(state.clone(), &repo).await?;

	let board = state.read().await;
	Ok(Json(derive_page(&board.posts, &selection)))
}
