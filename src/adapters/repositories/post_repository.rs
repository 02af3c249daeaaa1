use async_trait::async_trait;
use sqlx::PgPool;

use super::{LikeStore, SnapshotSource};
use crate::domain::post::commands::{CreatePost, UpdatePost};
use crate::domain::post::entity::Post;
use crate::services::response::ServiceError;

const POST_COLUMNS: &str = "id, title, content, category, created_at, likes";

pub struct PostRepository {
	pool: &'static PgPool,
}

impl PostRepository {
	pub fn new(pool: &'static PgPool) -> Self {
		Self { pool }
	}

	pub async fn get(
		&self,
		id: i64,
	) -> Result<Post, ServiceError> {
		sqlx::query_as::<_, Post>(&format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1"))
			.bind(id)
			.fetch_optional(self.pool)
			.await?
			.ok_or(ServiceError::PostNotFound)
	}

	pub async fn add(
		&self,
		command: &CreatePost,
	) -> Result<Post, ServiceError> {
		let post = sqlx::query_as::<_, Post>(&format!(
			"INSERT INTO posts (title, content, category) VALUES ($1, $2, $3) RETURNING {POST_COLUMNS}"
		))
		.bind(&command.title)
		.bind(&command.content)
		.bind(command.category)
		.fetch_one(self.pool)
		.await?;

		Ok(post)
	}

	pub async fn update(
		&self,
		id: i64,
		command: &UpdatePost,
	) -> Result<Post, ServiceError> {
		sqlx::query_as::<_, Post>(&format!(
			"UPDATE posts SET title = $2, content = $3, category = $4 WHERE id = $1 RETURNING {POST_COLUMNS}"
		))
		.bind(id)
		.bind(&command.title)
		.bind(&command.content)
		.bind(command.category)
		.fetch_optional(self.pool)
		.await?
		.ok_or(ServiceError::PostNotFound)
	}

	pub async fn delete(
		&self,
		id: i64,
	) -> Result<(), ServiceError> {
		let result = sqlx::query("DELETE FROM posts WHERE id = $1").bind(id).execute(self.pool).await?;

		if result.rows_affected() == 0 {
			return Err(ServiceError::PostNotFound);
		}
		Ok(())
	}
}

#[async_trait]
impl SnapshotSource for PostRepository {
	async fn fetch_all(&self) -> Result<Vec<Post>, ServiceError> {
		let posts = sqlx::query_as::<_, Post>(&format!(
			"SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC"
		))
		.fetch_all(self.pool)
		.await?;

		Ok(posts)
	}
}

#[async_trait]
impl LikeStore for PostRepository {
	async fn set_likes(
		&self,
		post_id: i64,
		likes: i64,
	) -> Result<(), ServiceError> {
		let result = sqlx::query("UPDATE posts SET likes = $2 WHERE id = $1")
			.bind(post_id)
			.bind(likes)
			.execute(self.pool)
			.await?;

		if result.rows_affected() == 0 {
			return Err(ServiceError::PostNotFound);
		}
		Ok(())
	}
}
