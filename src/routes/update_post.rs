use axum::extract::Path;
use axum::Json;

use crate::adapters::repositories::post_repository::PostRepository;
use crate::dependencies::connection_pool;
use crate::domain::post::commands::UpdatePost;
use crate::domain::post::entity::Post;
use crate::services::response::ServiceError;

pub async fn update_post(
	Path(id): Path<i64>,
	Json(command): Json<UpdatePost>,
) -> Result<Json<Post>, ServiceError> {
	command.validate()?;

	let post = PostRepository::new(connection_pool().await).update(id, &command).await?;

	Ok(Json(post))
}
