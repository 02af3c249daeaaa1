use async_trait::async_trait;
use sqlx::PgPool;

use super::CommentStore;
use crate::domain::comment::entity::Comment;
use crate::services::response::ServiceError;

pub struct CommentRepository {
	pool: &'static PgPool,
}

impl CommentRepository {
	pub fn new(pool: &'static PgPool) -> Self {
		Self { pool }
	}

	pub async fn fetch_for_post(
		&self,
		post_id: i64,
	) -> Result<Vec<Comment>, ServiceError> {
		let comments = sqlx::query_as::<_, Comment>(
			"SELECT id, post_id, user_id, content, created_at FROM comments WHERE post_id = $1 ORDER BY created_at ASC",
		)
		.bind(post_id)
		.fetch_all(self.pool)
		.await?;

		Ok(comments)
	}
}

#[async_trait]
impl CommentStore for CommentRepository {
	/// The store assigns id and timestamp; the returned row is the
	/// confirmed record that replaces the tentative one.
	async fn add(
		&self,
		tentative: &Comment,
	) -> Result<Comment, ServiceError> {
		let comment = sqlx::query_as::<_, Comment>(
			"INSERT INTO comments (post_id, user_id, content) VALUES ($1, $2, $3) RETURNING id, post_id, user_id, content, created_at",
		)
		.bind(tentative.post_id)
		.bind(tentative.user_id)
		.bind(&tentative.content)
		.fetch_one(self.pool)
		.await?;

		Ok(comment)
	}
}
