use axum::extract::Path;
use axum::http::StatusCode;

use crate::adapters::repositories::post_repository::PostRepository;
use crate::dependencies::connection_pool;
use crate::services::response::ServiceError;

pub async fn delete_post(Path(id): Path<i64>) -> Result<StatusCode, ServiceError> {
	PostRepository::new(connection_pool().await).delete(id).await?;

	Ok(StatusCode::NO_CONTENT)
}
